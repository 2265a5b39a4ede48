use async_trait::async_trait;
use food_lens::{
    Error, Result,
    llm::{ChatCompletionRequest, Completion, Credential, LlmClient},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client that replays queued completions and records every call
#[derive(Debug)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<Completion>>>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub bearers: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            bearers: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<Completion>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn get_bearers(&self) -> Vec<String> {
        self.bearers.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        credential: &Credential,
        request: ChatCompletionRequest,
    ) -> Result<Completion> {
        self.requests.lock().unwrap().push(request);
        self.bearers.lock().unwrap().push(credential.bearer());

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}
