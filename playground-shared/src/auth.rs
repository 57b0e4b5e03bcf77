//! # Demo Authentication
//!
//! There is no server: any non-empty email with a long enough password is
//! accepted and turned into a session carrying a fixed token.

use crate::errors::AuthError;
use crate::models::{Session, SessionUser};

/// Shortest password the demo accepts, in characters.
pub const MIN_PASSWORD_LEN: usize = 4;

/// Artificial latency before credentials are checked.
pub const LOGIN_DELAY_MS: u32 = 500;

/// Token stamped on every demo session.
pub const DEMO_TOKEN: &str = "demo-token";

/// Name used when the email has nothing before the `@`.
pub const FALLBACK_DISPLAY_NAME: &str = "Playground User";

/// What the login form submits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Check `credentials` and build the resulting session.
///
/// # Errors
/// Returns [`AuthError::InvalidCredentials`] when the email is empty or the
/// password is shorter than [`MIN_PASSWORD_LEN`].
pub fn authenticate(credentials: &Credentials) -> Result<Session, AuthError> {
    if credentials.email.is_empty() || credentials.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::InvalidCredentials);
    }

    let user = SessionUser {
        email: credentials.email.clone(),
        name: display_name_for(&credentials.email),
    };
    Ok(Session::authenticated(user, DEMO_TOKEN))
}

/// Local part of `email`, or [`FALLBACK_DISPLAY_NAME`] if it is empty.
#[must_use]
pub fn display_name_for(email: &str) -> String {
    match email.split('@').next() {
        Some(local) if !local.is_empty() => local.to_string(),
        _ => FALLBACK_DISPLAY_NAME.to_string(),
    }
}

/// Inline error for the email field, if any.
#[must_use]
pub fn validate_email_field(email: &str) -> Option<&'static str> {
    email.is_empty().then_some("Email is required")
}

/// Inline error for the password field, if any.
#[must_use]
pub fn validate_password_field(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some("Min 4 characters")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionStatus;
    use test_case::test_case;

    #[test]
    fn example_login_succeeds() {
        let session = authenticate(&Credentials::new("a@b.com", "abcd")).unwrap();
        assert_eq!(session.status, SessionStatus::Authenticated);
        let user = session.user.unwrap();
        assert_eq!(user.name, "a");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(session.token.as_deref(), Some(DEMO_TOKEN));
    }

    #[test]
    fn example_short_password_is_rejected() {
        assert_eq!(
            authenticate(&Credentials::new("a@b.com", "ab")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test_case("a@b.com" ; "regular email")]
    #[test_case("" ; "empty email")]
    #[test_case("someone" ; "no at sign")]
    #[test_case("   " ; "whitespace email")]
    fn short_passwords_always_fail(email: &str) {
        for password in ["", "a", "ab", "abc"] {
            assert_eq!(
                authenticate(&Credentials::new(email, password)),
                Err(AuthError::InvalidCredentials),
                "password {password:?} with email {email:?}"
            );
        }
    }

    #[test_case("a@b.com", "abcd")]
    #[test_case("jane.doe@example.org", "correct horse battery staple")]
    #[test_case("no-at-sign", "1234")]
    #[test_case("@example.com", "pass")]
    fn non_empty_email_and_long_password_succeed(email: &str, password: &str) {
        let session = authenticate(&Credentials::new(email, password)).unwrap();
        assert!(session.is_authenticated());
        assert!(session.has_credentials());
    }

    #[test]
    fn empty_email_fails_even_with_long_password() {
        assert!(authenticate(&Credentials::new("", "long enough")).is_err());
    }

    #[test]
    fn password_length_counts_characters() {
        // Four characters, eight bytes.
        assert!(authenticate(&Credentials::new("a@b.com", "éééé")).is_ok());
        // Three characters, nine bytes.
        assert!(authenticate(&Credentials::new("a@b.com", "日本語")).is_err());
    }

    #[test_case("ada@example.com", "ada")]
    #[test_case("no-at-sign", "no-at-sign")]
    #[test_case("@example.com", FALLBACK_DISPLAY_NAME)]
    #[test_case("first@second@third", "first")]
    fn display_name_is_local_part(email: &str, expected: &str) {
        assert_eq!(display_name_for(email), expected);
    }

    #[test]
    fn field_validation_messages() {
        assert_eq!(validate_email_field(""), Some("Email is required"));
        assert_eq!(validate_email_field("x@y.z"), None);
        assert_eq!(validate_password_field(""), Some("Password is required"));
        assert_eq!(validate_password_field("abc"), Some("Min 4 characters"));
        assert_eq!(validate_password_field("abcd"), None);
    }
}
