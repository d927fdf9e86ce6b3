use super::types::{PromptRequest, PromptResponse};
use crate::{
    Result,
    config::API_KEY_VARS,
    error::Error,
    gemini::{Blob, PromptModel},
};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Instruction sent to the model when the request carries no override.
/// Asks for a single prose paragraph usable directly as a generation
/// prompt.
pub const DEFAULT_INSTRUCTION: &str = "Analyze this video clip in extreme detail to create a generative AI image/video prompt.

Focus on these aspects:
1. Subject: Who or what is the main focus? Appearance, clothing, action.
2. Environment: Setting, background details, time of day, weather.
3. Cinematography: Camera angle (wide, close-up, drone), movement (static, pan, zoom), depth of field.
4. Lighting: Natural, artificial, neon, harsh, soft, direction of light.
5. Style: Photorealistic, cinematic, anime, oil painting, 3D render, etc.
6. Color Palette: Dominant colors and mood.

Output Format:
Return a single, cohesive paragraph that reads as a high-quality prompt for a text-to-video model (like Sora or Runway) or text-to-image model (like Midjourney). Do not use bullet points in the final output. Do not start with \"Here is a prompt\". Just give the raw prompt text.";

/// Low temperature biases the model toward faithful description over
/// creative embellishment.
pub const GENERATION_TEMPERATURE: f32 = 0.4;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no credential was found in the environment; requests
    /// then fail with 500 before any upstream call.
    pub model: Option<Arc<dyn PromptModel>>,
}

pub async fn generate_prompt(State(state): State<AppState>, body: Bytes) -> Response {
    let request_id = Uuid::new_v4();
    info!("Received prompt generation request {}", request_id);

    match process(&state, &body).await {
        Ok(prompt) => {
            info!("Generated prompt for request {}", request_id);
            (StatusCode::OK, Json(PromptResponse { prompt })).into_response()
        }
        Err(e) => {
            let (status, message) = error_response(&e);
            if status.is_server_error() {
                error!("Request {} failed with {}: {}", request_id, status, e);
            } else {
                warn!("Request {} rejected with {}: {}", request_id, status, e);
            }
            (status, message).into_response()
        }
    }
}

/// Request pipeline: credential check, body validation, one upstream
/// call, trim. Each step short-circuits; no error escapes the caller's
/// mapping to an HTTP response.
async fn process(state: &AppState, body: &[u8]) -> Result<String> {
    let model = state
        .model
        .as_ref()
        .ok_or_else(|| Error::config(missing_credential_message()))?;

    let request = PromptRequest::parse(body)?;

    let instruction = request
        .prompt_text
        .as_deref()
        .filter(|text| !text.is_empty())
        .unwrap_or(DEFAULT_INSTRUCTION);

    // The base64 payload is handed to the upstream call verbatim; the
    // server never decodes the video bytes itself.
    let video = Blob::new(request.video.mime_type, request.video.data);

    let text = model
        .generate(video, instruction, GENERATION_TEMPERATURE)
        .await?;

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::UpstreamEmpty);
    }

    Ok(trimmed.to_string())
}

fn missing_credential_message() -> String {
    format!(
        "Missing server env var {} (or {}). Set it on your hosting platform.",
        API_KEY_VARS[0], API_KEY_VARS[1]
    )
}

fn error_response(error: &Error) -> (StatusCode, String) {
    let status = match error {
        Error::BadRequest(_) => StatusCode::BAD_REQUEST,
        Error::UpstreamEmpty => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, error.to_string())
}
