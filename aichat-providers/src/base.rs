//! Base trait for conversation services

use thiserror::Error;

/// Error type for provider operations
///
/// The display strings are shown to the user verbatim.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Request failed with error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Valid JSON without the expected fields; the detail is for logs only
    #[error("Invalid response format")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Answer returned for a single query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReply {
    pub answer: String,
    pub date: String,
}

/// A remote service hosting conversations with an AI application
///
/// Every call blocks until the service has answered or the request failed.
pub trait ConversationService {
    /// Create a new conversation and return its id
    fn create_conversation(&self, token: &str) -> ProviderResult<String>;

    /// Submit `query` within `conversation_id` and return the answer
    fn run(&self, token: &str, query: &str, conversation_id: &str) -> ProviderResult<RunReply>;
}
