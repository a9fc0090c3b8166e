//! Configuration management
//!
//! The service endpoint, application id and local file locations are carried
//! in an explicit [`Config`] value handed to each component.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::validate_config;
