//! ATS checker run path: validate, ask the backend, fall back to the local
//! engine when the backend is missing or fails.

use std::sync::Arc;

use tracing::{info, warn};

use crate::backend::{AtsBackend, HttpBackend};
use crate::config::Config;
use crate::errors::{AppError, BackendError};
use crate::keywords::{format_suggestions, score, KeywordExtractor};

pub mod report;
pub mod source;

pub use report::{AtsReport, CheckReport};
pub use source::AnalysisSource;

pub const FALLBACK_ADVISORY: &str =
    "Using local fallback analysis because backend /api/ats-score failed.";
pub const NO_BACKEND_ADVISORY: &str = "No ATS backend configured; using local analysis.";

/// Keywords previewed next to the JD before a run.
pub const JD_PREVIEW_LIMIT: usize = 20;

#[derive(Clone)]
pub struct AtsChecker {
    backend: Option<Arc<dyn AtsBackend>>,
    extractor: KeywordExtractor,
    config: Config,
}

impl AtsChecker {
    pub fn new(config: Config, backend: Option<Arc<dyn AtsBackend>>) -> Self {
        Self {
            backend,
            extractor: KeywordExtractor::ats(),
            config,
        }
    }

    /// Builds an [`HttpBackend`] when `config.backend_url` is set.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let backend = match config.backend_url.as_deref() {
            Some(url) => {
                let http = HttpBackend::new(url)
                    .map_err(|e| AppError::Config(format!("cannot build HTTP client: {e}")))?;
                info!("ATS backend at {url}");
                Some(Arc::new(http) as Arc<dyn AtsBackend>)
            }
            None => {
                info!("No ATS backend configured; analysis runs locally");
                None
            }
        };
        Ok(Self::new(config, backend))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Top candidate keywords of a JD, for display before a run.
    pub fn jd_keywords(&self, jd: &str, limit: usize) -> Vec<String> {
        let mut keywords = self.extractor.extract(jd);
        keywords.truncate(limit);
        keywords
    }

    /// The synchronous local analysis: extract, score, suggest.
    pub fn analyze_local(&self, jd: &str, resume: &str, min_occurrences: usize) -> CheckReport {
        let candidates = self.extractor.extract(jd);
        let analysis = score(&candidates, resume, min_occurrences);
        let suggestions = format_suggestions(&analysis.missing, self.config.suggestion_limit);
        CheckReport::new(analysis, suggestions)
    }

    /// [`run`](Self::run) with the configured minimum phrase occurrences.
    pub async fn run_default(
        &self,
        jd: &str,
        resume: &str,
    ) -> Result<AnalysisSource<CheckReport>, AppError> {
        self.run(jd, resume, self.config.min_occurrences).await
    }

    /// Validates input, tries the backend once, and falls back to
    /// [`analyze_local`](Self::analyze_local). Only validation errors are
    /// returned; backend failures become an advisory.
    pub async fn run(
        &self,
        jd: &str,
        resume: &str,
        min_occurrences: usize,
    ) -> Result<AnalysisSource<CheckReport>, AppError> {
        if jd.trim().is_empty() {
            return Err(AppError::Validation(
                "Please paste the Job Description first.".to_string(),
            ));
        }
        if resume.trim().is_empty() {
            return Err(AppError::Validation(
                "Please paste your resume text or upload a resume first.".to_string(),
            ));
        }

        let Some(backend) = &self.backend else {
            let report = self.analyze_local(jd, resume, min_occurrences);
            return Ok(AnalysisSource::Local {
                value: report,
                advisory: NO_BACKEND_ADVISORY.to_string(),
            });
        };

        match backend.ats_score(jd, resume).await {
            Ok(response) => {
                let report = CheckReport::from_remote(response, self.config.suggestion_limit);
                info!(
                    "Remote ATS score {} ({} of {} keywords)",
                    report.analysis.score, report.matched_count, report.analysis.total
                );
                Ok(AnalysisSource::Remote(report))
            }
            Err(e) => {
                warn!("ATS backend failed, falling back to local analysis: {e}");
                let report = self.analyze_local(jd, resume, min_occurrences);
                info!(
                    "Local ATS score {} ({} of {} keywords)",
                    report.analysis.score, report.matched_count, report.analysis.total
                );
                Ok(AnalysisSource::Local {
                    value: report,
                    advisory: FALLBACK_ADVISORY.to_string(),
                })
            }
        }
    }

    /// Uploads a résumé file for text extraction and merges the text into
    /// `existing`. No local fallback: on failure the user pastes the text.
    pub async fn import_resume_file(
        &self,
        existing: &str,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<String, AppError> {
        let size = content.len() as u64;
        if size > self.config.max_upload_bytes {
            return Err(AppError::FileTooLarge {
                size,
                limit: self.config.max_upload_bytes,
            });
        }

        let backend = self
            .backend
            .as_ref()
            .ok_or(AppError::Backend(BackendError::NotConfigured))?;

        let text = backend.extract_text(file_name, content).await.map_err(|e| {
            warn!("Text extraction failed for {file_name}: {e}");
            AppError::Backend(e)
        })?;

        Ok(merge_resume_text(existing, &text))
    }
}

/// Appends extracted text after a blank line, or takes it as-is when there
/// is nothing yet.
pub fn merge_resume_text(existing: &str, extracted: &str) -> String {
    if existing.is_empty() {
        extracted.to_string()
    } else {
        format!("{existing}\n\n{extracted}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::FakeBackend;
    use crate::backend::AtsScoreResponse;

    const JD: &str = "Looking for AWS and Kubernetes engineer with Docker experience";
    const RESUME: &str = "Worked extensively with AWS and Docker in production.";

    fn checker_with(backend: Arc<FakeBackend>) -> AtsChecker {
        AtsChecker::new(Config::default(), Some(backend as Arc<dyn AtsBackend>))
    }

    #[tokio::test]
    async fn test_blank_jd_is_validation_error() {
        let backend = FakeBackend::failing();
        let checker = checker_with(backend.clone());
        let err = checker.run("   ", RESUME, 1).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("Job Description")));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_resume_is_validation_error() {
        let checker = AtsChecker::new(Config::default(), None);
        let err = checker.run(JD, "\n", 1).await.unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("resume"));
    }

    #[tokio::test]
    async fn test_no_backend_runs_locally() {
        let checker = AtsChecker::new(Config::default(), None);
        let outcome = checker.run_default(JD, RESUME).await.unwrap();
        assert!(outcome.is_degraded());
        assert_eq!(outcome.advisory(), Some(NO_BACKEND_ADVISORY));
        let report = outcome.value();
        assert_eq!(report.analysis.score, 28);
        assert_eq!(report.matched_count, 2);
        assert_eq!(report.suggestions.len(), report.analysis.missing.len());
    }

    #[tokio::test]
    async fn test_backend_failure_falls_back_with_advisory() {
        let backend = FakeBackend::failing();
        let checker = checker_with(backend.clone());
        let outcome = checker.run_default(JD, RESUME).await.unwrap();

        assert_eq!(backend.calls(), 1);
        assert_eq!(outcome.advisory(), Some(FALLBACK_ADVISORY));
        assert_eq!(
            outcome.into_value(),
            checker.analyze_local(JD, RESUME, 1),
        );
    }

    #[tokio::test]
    async fn test_backend_success_is_remote() {
        let backend = Arc::new(FakeBackend {
            score: Some(AtsScoreResponse {
                score: Some(64),
                matched: Some(vec!["aws".to_string()]),
                missing: Some(vec!["kubernetes".to_string()]),
                ..Default::default()
            }),
            ..Default::default()
        });
        let outcome = checker_with(backend).run_default(JD, RESUME).await.unwrap();
        assert!(!outcome.is_degraded());
        let report = outcome.value();
        assert_eq!(report.analysis.score, 64);
        assert_eq!(report.analysis.total, 2);
        assert_eq!(report.suggestions, vec!["Add kubernetes"]);
    }

    #[tokio::test]
    async fn test_min_occurrences_reaches_local_scorer() {
        let checker = AtsChecker::new(Config::default(), None);
        let jd = "incident response";
        let resume = "incident response, then another incident and a slow response";
        let outcome = checker.run(jd, resume, 2).await.unwrap();
        let entry = outcome
            .value()
            .analysis
            .breakdown
            .iter()
            .find(|e| e.keyword == "incident response")
            .cloned()
            .unwrap();
        assert!(entry.found);
        assert_eq!(entry.occurrences, 4);
    }

    #[tokio::test]
    async fn test_run_default_uses_configured_min_occurrences() {
        let config = Config {
            min_occurrences: 2,
            ..Config::default()
        };
        let checker = AtsChecker::new(config, None);
        // phrase present once, so only the per-token fallback can find it
        let resume = "incident response, then another incident and a slow response";
        let report = checker.run_default("incident response", resume).await.unwrap();
        let entry = report
            .value()
            .analysis
            .breakdown
            .iter()
            .find(|e| e.keyword == "incident response")
            .cloned()
            .unwrap();
        assert_eq!(entry.occurrences, 4);

        let once = checker.run("incident response", resume, 1).await.unwrap();
        let entry = once
            .value()
            .analysis
            .breakdown
            .iter()
            .find(|e| e.keyword == "incident response")
            .cloned()
            .unwrap();
        assert_eq!(entry.occurrences, 1);
    }

    #[test]
    fn test_jd_keywords_preview_is_truncated() {
        let checker = AtsChecker::new(Config::default(), None);
        let preview = checker.jd_keywords(JD, 3);
        assert_eq!(preview, vec!["aws", "kubernetes", "docker"]);
        assert!(checker.jd_keywords("", JD_PREVIEW_LIMIT).is_empty());
    }

    #[test]
    fn test_from_config_without_url_has_no_backend() {
        let checker = AtsChecker::from_config(Config::default()).unwrap();
        assert!(!checker.has_backend());
    }

    #[test]
    fn test_from_config_with_url_has_backend() {
        let config = Config {
            backend_url: Some("http://localhost:5000".to_string()),
            ..Config::default()
        };
        assert!(AtsChecker::from_config(config).unwrap().has_backend());
    }

    #[tokio::test]
    async fn test_import_rejects_oversized_file_before_upload() {
        let backend = Arc::new(FakeBackend {
            extracted: Some("text".to_string()),
            ..Default::default()
        });
        let config = Config {
            max_upload_bytes: 4,
            ..Config::default()
        };
        let checker = AtsChecker::new(config, Some(backend.clone() as Arc<dyn AtsBackend>));
        let err = checker
            .import_resume_file("", "cv.pdf", vec![0; 5])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge { size: 5, limit: 4 }));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_import_appends_extracted_text() {
        let backend = Arc::new(FakeBackend {
            extracted: Some("Rust, Tokio".to_string()),
            ..Default::default()
        });
        let checker = checker_with(backend);
        let merged = checker
            .import_resume_file("Summary line", "cv.pdf", vec![1, 2, 3])
            .await
            .unwrap();
        assert_eq!(merged, "Summary line\n\nRust, Tokio");
    }

    #[tokio::test]
    async fn test_import_failure_surfaces_error() {
        let err = checker_with(FakeBackend::failing())
            .import_resume_file("", "cv.pdf", vec![1])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Backend(BackendError::Api { status: 400, .. })));
    }

    #[tokio::test]
    async fn test_import_without_backend_is_not_configured() {
        let checker = AtsChecker::new(Config::default(), None);
        let err = checker
            .import_resume_file("", "cv.pdf", vec![1])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Backend(BackendError::NotConfigured)));
    }

    #[test]
    fn test_merge_resume_text() {
        assert_eq!(merge_resume_text("", "new"), "new");
        assert_eq!(merge_resume_text("old", "new"), "old\n\nnew");
    }
}
