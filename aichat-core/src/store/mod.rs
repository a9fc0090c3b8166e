//! Plaintext stores for the bearer token and the conversation id

pub mod credential;
pub mod session;

pub use credential::CredentialStore;
pub use session::SessionStore;
