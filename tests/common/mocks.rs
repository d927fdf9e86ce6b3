use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use video2prompt::{
    Error, Result,
    gemini::{Blob, PromptModel},
};

/// Arguments of one recorded `generate` call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub video: Blob,
    pub instruction: String,
    pub temperature: f32,
}

/// Stub upstream model for testing. Records every call so tests can
/// assert exactly how often and with what arguments it was invoked.
pub struct StubPromptModel {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub error: Option<String>,
}

impl StubPromptModel {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<&str>) -> Self {
        *self.responses.lock().unwrap() = responses.into_iter().map(String::from).collect();
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PromptModel for StubPromptModel {
    async fn generate(&self, video: Blob, instruction: &str, temperature: f32) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            video,
            instruction: instruction.to_string(),
            temperature,
        });

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::internal("No more stub responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for StubPromptModel {
    fn default() -> Self {
        Self::new()
    }
}
