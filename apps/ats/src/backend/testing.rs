//! Scripted in-memory backend for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::backend::{AtsBackend, AtsScoreResponse, ResumePayload};
use crate::errors::BackendError;

/// Each field scripts one endpoint; `None` / `false` makes it fail.
#[derive(Default)]
pub struct FakeBackend {
    pub score: Option<AtsScoreResponse>,
    pub extracted: Option<String>,
    pub document: Option<Bytes>,
    pub resend_ok: bool,
    pub calls: AtomicUsize,
}

impl FakeBackend {
    pub fn failing() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl AtsBackend for FakeBackend {
    async fn extract_text(
        &self,
        _file_name: &str,
        _content: Vec<u8>,
    ) -> Result<String, BackendError> {
        self.hit();
        self.extracted.clone().ok_or_else(|| BackendError::Api {
            status: 400,
            message: "Extraction weak — paste text manually".to_string(),
        })
    }

    async fn ats_score(&self, _jd: &str, _resume: &str) -> Result<AtsScoreResponse, BackendError> {
        self.hit();
        self.score.clone().ok_or_else(|| BackendError::Api {
            status: 503,
            message: "unavailable".to_string(),
        })
    }

    async fn generate_resume(&self, _payload: &ResumePayload) -> Result<Bytes, BackendError> {
        self.hit();
        self.document.clone().ok_or_else(|| BackendError::Api {
            status: 500,
            message: "Failed to generate resume".to_string(),
        })
    }

    async fn resend_verification(&self, _email: &str) -> Result<(), BackendError> {
        self.hit();
        if self.resend_ok {
            Ok(())
        } else {
            Err(BackendError::Api {
                status: 500,
                message: "Request failed".to_string(),
            })
        }
    }
}
