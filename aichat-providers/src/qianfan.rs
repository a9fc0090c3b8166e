//! Blocking client for the Qianfan app conversation API

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use aichat_core::config::ServiceConfig;

use crate::base::{ConversationService, ProviderError, ProviderResult, RunReply};

const CONVERSATION_PATH: &str = "/v2/app/conversation";
const RUNS_PATH: &str = "/v2/app/conversation/runs";

/// Conversation creation request format
#[derive(Debug, Serialize)]
struct CreateConversationRequest<'a> {
    app_id: &'a str,
}

/// Conversation creation response format
#[derive(Debug, Deserialize)]
struct CreateConversationResponse {
    conversation_id: String,
}

/// Conversation run request format
#[derive(Debug, Serialize)]
struct RunRequest<'a> {
    app_id: &'a str,
    query: &'a str,
    stream: bool,
    conversation_id: &'a str,
}

/// Conversation run response format
#[derive(Debug, Deserialize)]
struct RunResponse {
    answer: String,
    date: String,
}

/// Client for the hosted app conversation endpoints
pub struct QianfanClient {
    client: Client,
    base_url: String,
    app_id: String,
}

impl QianfanClient {
    /// Create a client for the configured service
    pub fn new(config: &ServiceConfig) -> ProviderResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ProviderError::ConfigError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_id: config.app_id.clone(),
        })
    }

    /// Get the base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post<B, R>(&self, path: &str, token: &str, body: &B) -> ProviderResult<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(body)
            .send()?;

        // The body is parsed whatever the status; error payloads fall through
        // to the field check below.
        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status {}", url, status);
        }

        let text = response.text()?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        serde_json::from_value(value).map_err(|e| {
            warn!("Unexpected response from {}: {}", url, e);
            ProviderError::InvalidResponse(e.to_string())
        })
    }
}

impl ConversationService for QianfanClient {
    fn create_conversation(&self, token: &str) -> ProviderResult<String> {
        let body = CreateConversationRequest {
            app_id: &self.app_id,
        };
        let created: CreateConversationResponse = self.post(CONVERSATION_PATH, token, &body)?;
        Ok(created.conversation_id)
    }

    fn run(&self, token: &str, query: &str, conversation_id: &str) -> ProviderResult<RunReply> {
        let body = RunRequest {
            app_id: &self.app_id,
            query,
            stream: false,
            conversation_id,
        };
        let reply: RunResponse = self.post(RUNS_PATH, token, &body)?;
        Ok(RunReply {
            answer: reply.answer,
            date: reply.date,
        })
    }
}
