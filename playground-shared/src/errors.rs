//! # Error Types
//!
//! Failures the state layer can report. None of them are fatal: callers turn
//! them into a visible message or a logged warning.

use thiserror::Error;

/// Login rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email missing or password too short. The message is shown to the user as is.
    #[error("Invalid credentials. Try any email and a 4+ char password.")]
    InvalidCredentials,
}

/// Problems reading a persisted session.
#[derive(Error, Debug)]
pub enum PersistError {
    /// The stored value was not valid session JSON.
    #[error("Malformed session cache: {source}")]
    Malformed {
        #[from]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_error_message_is_user_facing() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials. Try any email and a 4+ char password."
        );
    }

    #[test]
    fn malformed_wraps_serde_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PersistError::from(source);
        assert!(err.to_string().starts_with("Malformed session cache:"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
