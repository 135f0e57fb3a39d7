use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use tracing::{debug, warn};

use crate::backend::models::{
    AtsScoreRequest, AtsScoreResponse, BackendErrorBody, ExtractTextResponse,
    ResendVerificationRequest, ResumePayload,
};
use crate::backend::{
    AtsBackend, ATS_SCORE_ENDPOINT, EXTRACT_TEXT_ENDPOINT, GENERATE_RESUME_ENDPOINT,
    RESEND_VERIFICATION_ENDPOINT,
};
use crate::errors::BackendError;

/// `reqwest`-backed [`AtsBackend`]. One attempt per call, no retries; the
/// caller decides what a failure means.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl AtsBackend for HttpBackend {
    async fn extract_text(&self, file_name: &str, content: Vec<u8>) -> Result<String, BackendError> {
        let part = Part::bytes(content)
            .file_name(file_name.to_string())
            .mime_str(content_type_for(file_name))?;
        let form = Form::new().part("file", part);

        debug!("POST {EXTRACT_TEXT_ENDPOINT} ({file_name})");
        let response = self
            .client
            .post(self.url(EXTRACT_TEXT_ENDPOINT))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!("Text extraction returned {status}");
            let message = if body.trim().is_empty() {
                format!("Server extraction failed ({})", status.as_u16())
            } else {
                body
            };
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ExtractTextResponse = serde_json::from_str(&body)?;
        match parsed.text {
            Some(serde_json::Value::String(text)) => Ok(text),
            _ => Err(BackendError::InvalidResponse(
                "Invalid response from server when extracting text.".to_string(),
            )),
        }
    }

    async fn ats_score(&self, jd: &str, resume: &str) -> Result<AtsScoreResponse, BackendError> {
        debug!("POST {ATS_SCORE_ENDPOINT}");
        let response = self
            .client
            .post(self.url(ATS_SCORE_ENDPOINT))
            .json(&AtsScoreRequest { jd, resume })
            .send()
            .await?;

        let body = success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn generate_resume(&self, payload: &ResumePayload) -> Result<Bytes, BackendError> {
        debug!("POST {GENERATE_RESUME_ENDPOINT}");
        let response = self
            .client
            .post(self.url(GENERATE_RESUME_ENDPOINT))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<BackendErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| "Failed to generate resume".to_string());
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?)
    }

    async fn resend_verification(&self, email: &str) -> Result<(), BackendError> {
        debug!("POST {RESEND_VERIFICATION_ENDPOINT}");
        let response = self
            .client
            .post(self.url(RESEND_VERIFICATION_ENDPOINT))
            .json(&ResendVerificationRequest { email })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: "Request failed".to_string(),
            });
        }
        Ok(())
    }
}

/// Returns the body of a 2xx response, or an `Api` error carrying it.
async fn success_body(response: Response) -> Result<String, BackendError> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if !status.is_success() {
        warn!("Backend returned {status}: {body}");
        return Err(BackendError::Api {
            status: status.as_u16(),
            message: body,
        });
    }
    Ok(body)
}

fn content_type_for(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".txt") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}
