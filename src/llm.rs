//! Answer generation against a hosted chat-completion service.

use serde::{Deserialize, Serialize};

use crate::config::ChatConfig;
use crate::error::{Result, ScholarError};
use crate::http::send_with_retry;

const SERVICE: &str = "chat";

/// Single-shot text generation. No streaming.
pub trait AnswerGenerator {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// OpenAI-compatible `/chat/completions` client.
///
/// The API key is not validated up front; an absent or invalid key
/// surfaces as a typed `Auth` error on the first call.
pub struct ChatClient {
    client: reqwest::blocking::Client,
    config: ChatConfig,
    endpoint: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        let endpoint = format!("{}/chat/completions", config.base_url);
        Ok(Self {
            client,
            config,
            endpoint,
        })
    }
}

impl AnswerGenerator for ChatClient {
    fn generate(&self, prompt: &str) -> Result<String> {
        let response = send_with_retry(SERVICE, || {
            let mut request = self.client.post(&self.endpoint).json(&ChatRequest {
                model: &self.config.model,
                messages: vec![ChatMessage {
                    role: "user",
                    content: prompt,
                }],
            });
            if let Some(key) = &self.config.api_key {
                request = request.bearer_auth(key);
            }
            request.send()
        })?;

        let parsed: ChatResponse = response.json()?;
        let answer = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ScholarError::MalformedResponse {
                service: SERVICE.to_string(),
                reason: "response contained no message content".into(),
            })?;

        tracing::debug!(model = %self.config.model, chars = answer.len(), "generation complete");
        Ok(answer)
    }
}
