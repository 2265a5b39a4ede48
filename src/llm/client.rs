use super::{
    credential::Credential,
    types::{ChatCompletionRequest, ChatCompletionResponse, Completion},
};
use crate::{Error, Result, config::OpenRouterConfig};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        credential: &Credential,
        request: ChatCompletionRequest,
    ) -> Result<Completion>;
}

/// Client for OpenRouter's OpenAI-compatible chat-completions endpoint.
pub struct OpenRouterClient {
    client: reqwest::Client,
    endpoint: String,
    referer: Option<String>,
    title: Option<String>,
}

impl OpenRouterClient {
    pub fn new(config: &OpenRouterConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: format!(
                "{}/chat/completions",
                config.base_url.trim_end_matches('/')
            ),
            referer: config.referer.clone(),
            title: config.title.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LlmClient for OpenRouterClient {
    async fn create_chat_completion(
        &self,
        credential: &Credential,
        request: ChatCompletionRequest,
    ) -> Result<Completion> {
        debug!(
            "Sending chat completion to {} with model {}",
            self.endpoint, request.model
        );

        let mut http_request = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, credential.bearer())
            .header(CONTENT_TYPE, "application/json")
            .json(&request);

        if let Some(ref referer) = self.referer {
            http_request = http_request.header("HTTP-Referer", referer);
        }
        if let Some(ref title) = self.title {
            http_request = http_request.header("X-Title", title);
        }

        let response = http_request.send().await?;
        let status = response.status();
        debug!("Chat completion response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "Model {} returned status {}: {}",
                request.model, status, body
            );
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                body
            };
            return Ok(Completion::failure(status.as_u16(), message));
        }

        let body = response.text().await?;
        debug!("Chat completion response size: {} bytes", body.len());

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;
        let text = parsed.into_first_content().ok_or_else(|| {
            Error::llm(format!(
                "response from {} has no choices[0].message.content",
                request.model
            ))
        })?;

        Ok(Completion::success(text))
    }
}
