//! Core types for aichat
//!
//! This crate provides the configuration, the local credential and session
//! stores, and the transient chat exchange record shared by the other
//! aichat components.

pub mod config;
pub mod error;
pub mod exchange;
pub mod logging;
pub mod store;

pub use error::{Error, Result};
pub use exchange::ChatExchange;
