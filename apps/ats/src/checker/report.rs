use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::backend::AtsScoreResponse;
use crate::keywords::AnalysisResult;

/// What one checker run produces, in the shape the front-end renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    /// Usually `matched.len()`; a remote backend may report it without the list.
    pub matched_count: usize,
    pub suggestions: Vec<String>,
}

impl CheckReport {
    pub fn new(analysis: AnalysisResult, suggestions: Vec<String>) -> Self {
        let matched_count = analysis.matched_count();
        Self {
            analysis,
            matched_count,
            suggestions,
        }
    }

    /// Fills the defaultable remote response. Missing suggestions become a
    /// short "Add <keyword>" line for the first `suggestion_limit` missing
    /// keywords.
    pub fn from_remote(response: AtsScoreResponse, suggestion_limit: usize) -> Self {
        let matched_count = response
            .matched
            .as_ref()
            .map(Vec::len)
            .or(response.matched_count)
            .unwrap_or(0);
        let matched = response.matched.unwrap_or_default();
        let missing = response.missing.unwrap_or_default();
        let total = response.total.unwrap_or(matched.len() + missing.len());
        let suggestions = response.suggestions.unwrap_or_else(|| {
            missing
                .iter()
                .take(suggestion_limit)
                .map(|m| format!("Add {m}"))
                .collect()
        });

        Self {
            analysis: AnalysisResult {
                score: response.score.unwrap_or(0).min(100),
                total,
                matched,
                missing,
                breakdown: response.breakdown.unwrap_or_default(),
            },
            matched_count,
            suggestions,
        }
    }

    /// Suggestions as one block of text, one per line, for the clipboard.
    pub fn suggestions_text(&self) -> String {
        self.suggestions.join("\n")
    }
}

/// Downloadable JSON summary of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    #[serde(serialize_with = "serialize_millis")]
    pub generated_at: DateTime<Utc>,
    pub score: u32,
    pub total_keywords: usize,
    pub matched_count: usize,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub suggestions: Vec<String>,
}

impl AtsReport {
    pub fn new(report: &CheckReport, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            score: report.analysis.score,
            total_keywords: report.analysis.total,
            matched_count: report.matched_count,
            matched: report.analysis.matched.clone(),
            missing: report.analysis.missing.clone(),
            suggestions: report.suggestions.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// `ats_report_YYYY-MM-DD_HH_MM_SS.json`, from the generation time in UTC.
    pub fn file_name(&self) -> String {
        format!(
            "ats_report_{}.json",
            self.generated_at.format("%Y-%m-%d_%H_%M_%S")
        )
    }
}

/// RFC 3339 with milliseconds and a `Z` suffix, e.g. `2025-03-09T14:05:07.000Z`.
fn serialize_millis<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}
