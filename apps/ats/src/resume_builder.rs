//! Résumé document generation through `/api/generate-resume`.

use bytes::Bytes;
use tracing::{info, warn};

use crate::backend::{AtsBackend, ResumePayload};
use crate::errors::AppError;

/// A rendered résumé ready to save.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedResume {
    pub file_name: String,
    pub content: Bytes,
}

/// Asks the backend to render `payload`. There is no local renderer, so a
/// backend failure is returned to the caller.
pub async fn generate_resume(
    backend: &dyn AtsBackend,
    payload: &ResumePayload,
) -> Result<GeneratedResume, AppError> {
    let content = backend.generate_resume(payload).await.map_err(|e| {
        warn!("Resume generation failed: {e}");
        AppError::Backend(e)
    })?;

    let file_name = payload.download_name();
    info!("Generated {file_name} ({} bytes)", content.len());
    Ok(GeneratedResume { file_name, content })
}
