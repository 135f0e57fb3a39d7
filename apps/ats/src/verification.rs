//! Re-sending the sign-up verification email.

use tracing::warn;

use crate::backend::AtsBackend;
use crate::errors::AppError;

pub async fn resend_verification(backend: &dyn AtsBackend, email: &str) -> Result<(), AppError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::Validation(
            "Email missing — go back to signup and try again.".to_string(),
        ));
    }

    backend.resend_verification(email).await.map_err(|e| {
        warn!("Resending verification email failed: {e}");
        AppError::Backend(e)
    })
}
