use super::{
    encoder::{self, MAX_VIDEO_SIZE_MB},
    types::PromptResult,
};
use crate::{
    Result,
    error::Error,
    server::{PromptRequest, VideoPayload},
};
use chrono::Utc;
use std::path::Path;
use tracing::debug;

pub struct PromptClient {
    http: reqwest::Client,
    base_url: String,
}

impl PromptClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generatePrompt", self.base_url.trim_end_matches('/'))
    }

    /// Issues the single endpoint call for a payload. A non-2xx response
    /// surfaces its body text as the error message; a 2xx response
    /// without a usable `prompt` field fails with `EmptyResult`.
    pub async fn request_prompt(
        &self,
        payload: &VideoPayload,
        override_text: Option<&str>,
    ) -> Result<String> {
        let request = PromptRequest {
            video: payload.clone(),
            prompt_text: override_text.map(str::to_string),
        };

        debug!("Requesting prompt for a {} payload", payload.mime_type);

        let response = self
            .http
            .post(self.endpoint())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                format!("Request failed: {}", status.as_u16())
            } else {
                body
            };
            return Err(Error::upstream(status.as_u16(), message));
        }

        let body: serde_json::Value = response.json().await?;
        match body.get("prompt").and_then(|value| value.as_str()) {
            Some(prompt) if !prompt.trim().is_empty() => Ok(prompt.trim().to_string()),
            _ => Err(Error::EmptyResult),
        }
    }

    /// Validates, encodes and submits a file in one pass, stamping the
    /// result on success. Endpoint failures are normalized to a message
    /// fit for direct display.
    pub async fn generate_from_file(&self, path: &Path) -> Result<PromptResult> {
        encoder::validate(path).await?;
        let payload = encoder::encode(path).await?;

        let text = self
            .request_prompt(&payload, None)
            .await
            .map_err(user_facing)?;

        Ok(PromptResult {
            text,
            generated_at: Utc::now(),
        })
    }
}

/// An endpoint failure mentioning status 400 is reported as a
/// size/format problem with the file.
fn user_facing(error: Error) -> Error {
    match &error {
        Error::UpstreamStatus { .. } if error.to_string().contains("400") => {
            Error::validation(format!(
                "Failed to process video. It might be too large or the format is unsupported. Try a smaller clip (< {} MB).",
                MAX_VIDEO_SIZE_MB
            ))
        }
        _ => error,
    }
}
