//! Conversation service integrations for aichat
//!
//! This crate provides the [`ConversationService`] abstraction and the
//! blocking HTTP client for the hosted app conversation API.

pub mod base;
pub mod qianfan;

pub use base::{ConversationService, ProviderError, ProviderResult, RunReply};
pub use qianfan::QianfanClient;
