//! Client side of the optional backend.
//!
//! Every network call in the crate goes through [`AtsBackend`]. The checker
//! holds an `Arc<dyn AtsBackend>`; [`HttpBackend`] is the real one, tests
//! plug in fakes.

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::BackendError;

pub mod http;
pub mod models;
#[cfg(test)]
pub(crate) mod testing;

pub use http::HttpBackend;
pub use models::{
    parse_skills, AtsScoreRequest, AtsScoreResponse, Education, Experience, Project, ResumePayload,
};

pub const EXTRACT_TEXT_ENDPOINT: &str = "/api/extract-text";
pub const ATS_SCORE_ENDPOINT: &str = "/api/ats-score";
pub const GENERATE_RESUME_ENDPOINT: &str = "/api/generate-resume";
pub const RESEND_VERIFICATION_ENDPOINT: &str = "/api/resend-verification";

/// The backend endpoints the front-end consumes. Implement this to swap
/// transports without touching the checker.
#[async_trait]
pub trait AtsBackend: Send + Sync {
    /// `POST /api/extract-text` — returns the plain text of an uploaded file.
    async fn extract_text(&self, file_name: &str, content: Vec<u8>) -> Result<String, BackendError>;

    /// `POST /api/ats-score` — remote scoring of a JD / résumé pair.
    async fn ats_score(&self, jd: &str, resume: &str) -> Result<AtsScoreResponse, BackendError>;

    /// `POST /api/generate-resume` — returns the rendered document bytes.
    async fn generate_resume(&self, payload: &ResumePayload) -> Result<Bytes, BackendError>;

    /// `POST /api/resend-verification` — success or failure only.
    async fn resend_verification(&self, email: &str) -> Result<(), BackendError>;
}
