use super::types::VideoMeta;
use crate::{Result, error::Error, server::VideoPayload};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use mime::Mime;
use std::path::Path;

pub const MAX_VIDEO_SIZE_MB: u64 = 18;
pub const MAX_VIDEO_BYTES: u64 = MAX_VIDEO_SIZE_MB * 1024 * 1024;

fn detect_mime(path: &Path) -> Result<Mime> {
    mime_guess::from_path(path)
        .first()
        .ok_or_else(|| Error::validation("Please upload a valid video file."))
}

fn check(mime: &Mime, size: u64) -> Result<()> {
    if mime.type_() != mime::VIDEO {
        return Err(Error::validation("Please upload a valid video file."));
    }
    if size > MAX_VIDEO_BYTES {
        return Err(Error::validation(format!(
            "Video is too large. Please use a clip smaller than {} MB.",
            MAX_VIDEO_SIZE_MB
        )));
    }
    Ok(())
}

/// Checks the file's media type and size without reading its content.
/// Constraint violations fail before any network traffic.
pub async fn validate(path: &Path) -> Result<VideoMeta> {
    let mime = detect_mime(path)?;
    let metadata = tokio::fs::metadata(path).await?;

    check(&mime, metadata.len())?;

    Ok(VideoMeta {
        mime_type: mime.essence_str().to_string(),
        size: metadata.len(),
    })
}

/// Reads the file in one pass and base64-encodes it for transport.
pub async fn encode(path: &Path) -> Result<VideoPayload> {
    let mime = detect_mime(path)?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::encoding(format!("failed to read {}: {}", path.display(), e)))?;

    Ok(VideoPayload {
        data: STANDARD.encode(&bytes),
        mime_type: mime.essence_str().to_string(),
    })
}

/// Recovers the original byte sequence from a payload.
pub fn decode(payload: &VideoPayload) -> Result<Vec<u8>> {
    STANDARD
        .decode(&payload.data)
        .map_err(|e| Error::encoding(e.to_string()))
}
