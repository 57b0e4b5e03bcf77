use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the client considers someone signed in.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Idle,
    Authenticated,
}

impl SessionStatus {
    /// Return the wire representation used in persisted sessions.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Authenticated => "authenticated",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in identity shown in the header and on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    /// Address the user signed in with.
    pub email: String,
    /// Display name derived from the email.
    pub name: String,
}

/// Client-held session record.
///
/// Only the auth store writes it; layouts and guards read it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub status: SessionStatus,
    pub user: Option<SessionUser>,
    pub token: Option<String>,
}

impl Session {
    /// Build an authenticated session for `user`.
    #[must_use]
    pub fn authenticated(user: SessionUser, token: impl Into<String>) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            user: Some(user),
            token: Some(token.into()),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// True when both a user and a token are present, regardless of status.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> SessionUser {
        SessionUser {
            email: "ada@example.com".to_string(),
            name: "ada".to_string(),
        }
    }

    #[test]
    fn default_session_is_idle_and_empty() {
        let session = Session::default();
        assert_eq!(session.status, SessionStatus::Idle);
        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(!session.is_authenticated());
        assert!(!session.has_credentials());
    }

    #[test]
    fn authenticated_constructor_fills_every_field() {
        let session = Session::authenticated(sample_user(), "demo-token");
        assert!(session.is_authenticated());
        assert!(session.has_credentials());
        assert_eq!(session.token.as_deref(), Some("demo-token"));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&Session::authenticated(sample_user(), "t")).unwrap();
        assert!(json.contains("\"status\":\"authenticated\""));

        let idle = serde_json::to_string(&Session::default()).unwrap();
        assert_eq!(idle, r#"{"status":"idle","user":null,"token":null}"#);
    }

    #[test]
    fn status_display_matches_wire_form() {
        assert_eq!(SessionStatus::Idle.to_string(), "idle");
        assert_eq!(SessionStatus::Authenticated.to_string(), "authenticated");
    }
}
