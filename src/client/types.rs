use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Media type and size of a selected file, checked before any upload.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMeta {
    pub mime_type: String,
    pub size: u64,
}

/// A completed generation, stamped when the prompt arrived.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptResult {
    pub text: String,
    pub generated_at: DateTime<Utc>,
}
