//! # Session Persistence
//!
//! The session is mirrored into a single storage key. It is written whenever
//! the session is authenticated and removed otherwise; on boot any stored
//! value is adopted without signature or expiry checks.

use crate::errors::PersistError;
use crate::models::{Session, SessionStatus};
use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key holding the JSON-serialized session.
pub const SESSION_STORAGE_KEY: &str = "reactive-playground-auth";

/// Minimal key/value store the session is mirrored into.
///
/// The browser build backs this with `localStorage`.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory storage for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Serialize `session` if it is worth persisting.
///
/// Returns `None` unless the session is authenticated and carries both a user
/// and a token.
#[must_use]
pub fn encode_session(session: &Session) -> Option<String> {
    if !session.is_authenticated() || !session.has_credentials() {
        return None;
    }
    serde_json::to_string(session).ok()
}

/// Parse a stored session.
///
/// Incomplete records (no user or no token) yield `Ok(None)`. Complete ones are
/// adopted as authenticated whatever status they were saved with.
///
/// # Errors
/// Returns [`PersistError::Malformed`] when `raw` is not session JSON.
pub fn decode_session(raw: &str) -> Result<Option<Session>, PersistError> {
    let parsed: Session = serde_json::from_str(raw)?;
    if !parsed.has_credentials() {
        return Ok(None);
    }
    Ok(Some(Session {
        status: SessionStatus::Authenticated,
        ..parsed
    }))
}

/// Mirror `session` into `storage`.
pub fn persist_session<S: SessionStorage + ?Sized>(storage: &S, session: &Session) {
    match encode_session(session) {
        Some(json) => {
            log::debug!("persisting session for {:?}", session.user.as_ref().map(|u| &u.email));
            storage.set(SESSION_STORAGE_KEY, &json);
        }
        None => storage.remove(SESSION_STORAGE_KEY),
    }
}

/// Load the session saved by [`persist_session`], falling back to an idle one.
#[must_use]
pub fn restore_session<S: SessionStorage + ?Sized>(storage: &S) -> Session {
    let Some(raw) = storage.get(SESSION_STORAGE_KEY) else {
        return Session::default();
    };
    match decode_session(&raw) {
        Ok(Some(session)) => session,
        Ok(None) => Session::default(),
        Err(err) => {
            log::warn!("Unable to parse auth cache: {err}");
            Session::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Credentials, authenticate};
    use crate::models::SessionUser;

    fn signed_in() -> Session {
        authenticate(&Credentials::new("a@b.com", "abcd")).unwrap()
    }

    #[test]
    fn idle_session_is_not_encoded() {
        assert_eq!(encode_session(&Session::default()), None);
    }

    #[test]
    fn authenticated_session_without_token_is_not_encoded() {
        let session = Session {
            token: None,
            ..signed_in()
        };
        assert_eq!(encode_session(&session), None);
    }

    #[test]
    fn login_then_logout_clears_storage() {
        let storage = MemoryStorage::new();

        persist_session(&storage, &signed_in());
        assert!(storage.contains(SESSION_STORAGE_KEY));

        persist_session(&storage, &Session::default());
        assert!(!storage.contains(SESSION_STORAGE_KEY));
    }

    #[test]
    fn restore_round_trips_a_persisted_session() {
        let storage = MemoryStorage::new();
        let session = signed_in();
        persist_session(&storage, &session);
        assert_eq!(restore_session(&storage), session);
    }

    #[test]
    fn restore_without_entry_is_idle() {
        assert_eq!(restore_session(&MemoryStorage::new()), Session::default());
    }

    #[test]
    fn restore_discards_malformed_json() {
        let storage = MemoryStorage::new();
        storage.set(SESSION_STORAGE_KEY, "{not json");
        assert_eq!(restore_session(&storage), Session::default());
    }

    #[test]
    fn decode_reports_malformed_json() {
        assert!(matches!(
            decode_session("[]"),
            Err(PersistError::Malformed { .. })
        ));
    }

    #[test]
    fn decode_ignores_incomplete_records() {
        let raw = r#"{"status":"authenticated","user":null,"token":"demo-token"}"#;
        assert_eq!(decode_session(raw).unwrap(), None);
    }

    #[test]
    fn decode_promotes_complete_records_to_authenticated() {
        let raw = r#"{"status":"idle","user":{"email":"x@y.z","name":"x"},"token":"t"}"#;
        let session = decode_session(raw).unwrap().unwrap();
        assert!(session.is_authenticated());
        assert_eq!(
            session.user,
            Some(SessionUser {
                email: "x@y.z".to_string(),
                name: "x".to_string(),
            })
        );
    }
}
