//! ChatClient - Direct REST implementation for the concierge endpoint.
//!
//! Calls a chat-completions API (DeepSeek by default) without any SDK
//! dependency. Configuration priority: ~/.config/pairlab/secret.json >
//! environment variables. The API key is never embedded in source.

use pairlab_core::PairlabError;
use pairlab_infrastructure::storage::{SecretConfig, SecretStore};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use tracing::debug;

const DEFAULT_CHAT_MODEL: &str = "deepseek-chat";
const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/chat/completions";
const DEFAULT_MAX_TOKENS: u32 = 100;
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Fixed persona for the concierge: short, warm answers about using the
/// pairing service.
const SYSTEM_PROMPT: &str = "You are the PairLab concierge, a friendly guide for a community \
     pairing service. Answer operator questions briefly and warmly in one \
     or two sentences.";

/// Errors from the chat client.
#[derive(Error, Debug)]
pub enum ChatError {
    /// No usable API key in the secret file or the environment.
    #[error("Chat credential not found: {0}")]
    MissingCredential(String),

    /// Transport-level failure before any HTTP status arrived.
    #[error("Chat request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status.
    #[error("Chat API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A 2xx response that did not carry usable content.
    #[error("Malformed chat response: {0}")]
    MalformedResponse(String),
}

impl From<ChatError> for PairlabError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::MissingCredential(msg) => PairlabError::config(msg),
            ChatError::Request(msg) => PairlabError::Remote {
                status: None,
                message: msg,
            },
            ChatError::Api { status, message } => PairlabError::Remote {
                status: Some(status),
                message,
            },
            ChatError::MalformedResponse(msg) => PairlabError::Remote {
                status: None,
                message: msg,
            },
        }
    }
}

/// Client for the concierge chat-completions endpoint.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    max_tokens: u32,
    temperature: f32,
}

impl ChatClient {
    /// Creates a client with the provided API key and the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Loads configuration from secret.json or environment variables.
    ///
    /// Priority:
    /// 1. `~/.config/pairlab/secret.json` (`deepseek.api_key`, blank keys
    ///    are treated as absent so the generated template never matches)
    /// 2. Environment variables (`DEEPSEEK_API_KEY`, `PAIRLAB_CHAT_MODEL`)
    pub fn try_from_config() -> Result<Self, ChatError> {
        if let Ok(store) = SecretStore::new() {
            if let Ok(secret_config) = store.load() {
                if let Some((api_key, model_name)) = credential_from_secret(secret_config) {
                    let mut client = Self::new(api_key);
                    if let Some(model) = model_name {
                        client = client.with_model(model);
                    }
                    return Ok(client);
                }
            }
        }

        let api_key = env::var("DEEPSEEK_API_KEY").ok().filter(|k| !k.is_empty());
        let Some(api_key) = api_key else {
            return Err(ChatError::MissingCredential(
                "set deepseek.api_key in ~/.config/pairlab/secret.json or export DEEPSEEK_API_KEY"
                    .to_string(),
            ));
        };

        let mut client = Self::new(api_key);
        if let Ok(model) = env::var("PAIRLAB_CHAT_MODEL") {
            client = client.with_model(model);
        }
        Ok(client)
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the endpoint URL after construction.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the maximum number of tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// One best-effort round trip: system prompt + the user message.
    ///
    /// No retry, no timeout beyond reqwest defaults; a failure is reported
    /// to the operator and that is all.
    pub async fn ask(&self, user_message: &str) -> Result<String, ChatError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_message.to_string(),
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!(model = %self.model, "Sending chat completion request");

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|err| ChatError::Request(format!("chat request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| ChatError::MalformedResponse(err.to_string()))?;

        extract_text_response(parsed)
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extracts a usable credential from the secret config; blank keys count
/// as absent.
fn credential_from_secret(config: SecretConfig) -> Option<(String, Option<String>)> {
    let deepseek = config.deepseek?;
    if deepseek.api_key.trim().is_empty() {
        return None;
    }
    Some((deepseek.api_key, deepseek.model_name))
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String, ChatError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            ChatError::MalformedResponse("no content in the first choice".to_string())
        })
}

fn map_http_error(status: StatusCode, body: String) -> ChatError {
    // The endpoint wraps errors as {"error": {"message": ...}}; fall back
    // to the raw body when it doesn't.
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);
    ChatError::Api {
        status: status.as_u16(),
        message,
    }
}
