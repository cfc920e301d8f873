//! Error types for the Sitewright domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Classification gaps and memory misses are not errors; they resolve to
//! documented defaults or `None`. Only the boundaries below can fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelStoreError {
    #[error("I/O failure at {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    #[error("Failed to serialize model document: {0}")]
    Serialize(String),

    #[error("Invalid model name: {0:?}")]
    InvalidName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    #[error("Token {token} at position {position} is not a valid code point")]
    InvalidToken { position: usize, token: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_error_displays_path() {
        let err = ModelStoreError::Io {
            path: PathBuf::from("/var/models/site.json"),
            reason: "permission denied".into(),
        };
        assert!(err.to_string().contains("/var/models/site.json"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn invalid_token_displays_position() {
        let err = InferenceError::InvalidToken {
            position: 3,
            token: 0xD800,
        };
        assert!(err.to_string().contains("position 3"));
        assert!(err.to_string().contains("55296"));
    }
}
