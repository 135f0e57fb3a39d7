use serde::{Deserialize, Serialize};

use crate::keywords::KeywordEntry;

#[derive(Debug, Clone, Serialize)]
pub struct AtsScoreRequest<'a> {
    pub jd: &'a str,
    pub resume: &'a str,
}

/// Body of a successful `/api/ats-score` call. Every field is optional;
/// the checker fills in defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsScoreResponse {
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub matched: Option<Vec<String>>,
    #[serde(default)]
    pub matched_count: Option<usize>,
    #[serde(default)]
    pub missing: Option<Vec<String>>,
    #[serde(default)]
    pub breakdown: Option<Vec<KeywordEntry>>,
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractTextResponse {
    pub text: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BackendErrorBody {
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResendVerificationRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub org: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_to: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub details: String,
}

/// Structured résumé fields sent to `/api/generate-resume`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumePayload {
    pub name: String,
    pub title: String,
    pub contact: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub jd_text: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub strengths: Vec<String>,
}

impl ResumePayload {
    /// File name offered for the generated document.
    pub fn download_name(&self) -> String {
        let stem = self.name.split_whitespace().collect::<Vec<_>>().join("_");
        format!("{stem}_ATS_Resume.pdf")
    }
}

/// Splits a comma-separated skills field, dropping blanks.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
