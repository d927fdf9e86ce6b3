mod client;
mod types;

pub use client::{GeminiClient, PromptModel};
pub use types::*;
