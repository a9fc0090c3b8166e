//! Transient record of one query and its answer

use chrono::{DateTime, Utc};
use std::fmt;

/// Model label attached to every exchange. Never displayed.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// A single question/answer pair, built only to print a response
#[derive(Debug, Clone)]
pub struct ChatExchange {
    /// Local creation time
    pub timestamp: DateTime<Utc>,
    /// Date string reported by the service
    pub datetime: String,
    /// The query as typed by the user
    pub query: String,
    /// The service answer, if any
    pub answer: Option<String>,
    /// Whether this record carries a service response
    pub is_response: bool,
    /// Model label
    pub model: String,
}

impl ChatExchange {
    /// Create an exchange from a service response
    pub fn response(
        datetime: impl Into<String>,
        query: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            datetime: datetime.into(),
            query: query.into(),
            answer: Some(answer.into()),
            is_response: true,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl fmt::Display for ChatExchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Response:")?;
        writeln!(f, "Date: {}", self.datetime)?;
        writeln!(f, "Q: {}", self.query)?;
        write!(f, "A: {}", self.answer.as_deref().unwrap_or("No answer"))
    }
}
