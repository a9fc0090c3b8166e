//! Error types for aichat

use thiserror::Error;

/// The main error type for aichat operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bearer token file is absent or empty
    #[error("Authorization key is missing. Please save it in {file} in {location}.")]
    MissingCredential { file: String, location: String },

    /// Session persistence errors
    #[error("Session error: {0}")]
    Session(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

/// A specialized Result type for aichat operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message() {
        let err = Error::MissingCredential {
            file: "auth.txt".to_string(),
            location: "the current directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Authorization key is missing. Please save it in auth.txt in the current directory."
        );
    }
}
