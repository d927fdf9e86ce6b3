use super::types::*;
use crate::{Result, config::GeminiConfig, error::Error};
use async_trait::async_trait;
use tracing::debug;

/// Capability interface for the upstream multimodal model. The server
/// depends only on this trait, so tests substitute a stub that never
/// contacts the network.
#[async_trait]
pub trait PromptModel: Send + Sync {
    /// Performs one generation call with an inline video blob and an
    /// instruction text. Returns the model's raw text output.
    async fn generate(&self, video: Blob, instruction: &str, temperature: f32) -> Result<String>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: config.model,
            base_url: config.base_url,
        }
    }

    fn request_url(&self) -> String {
        format!(
            "{}{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl PromptModel for GeminiClient {
    async fn generate(&self, video: Blob, instruction: &str, temperature: f32) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![
                Part::InlineData { inline_data: video },
                Part::Text {
                    text: instruction.to_string(),
                },
            ])],
            generation_config: Some(GenerationConfig { temperature }),
        };

        debug!("Calling {}:generateContent", self.model);

        let response = self
            .http
            .post(self.request_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::upstream(status.as_u16(), message));
        }

        let response: GenerationResponse = response.json().await?;

        Ok(response.text())
    }
}
