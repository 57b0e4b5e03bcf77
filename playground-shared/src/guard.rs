//! # Route Guards
//!
//! Decides what a route renders given the current session. Protected views
//! bounce anonymous visitors to the login view and remember where they were
//! headed; the login view bounces signed-in users back to the dashboard.

use serde::{Deserialize, Serialize};

pub const HOME_PATH: &str = "/";
pub const PLAYGROUND_PATH: &str = "/playground";
pub const LOGIN_PATH: &str = "/login";

/// Who may see a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    GuestOnly,
    AuthOnly,
}

/// Outcome of [`guard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Send the visitor to the login view; `from` is where they were going.
    RedirectToLogin { from: String },
    RedirectToHome,
}

/// Query carried to the login view so it can send the user back afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRedirect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl LoginRedirect {
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            from: Some(path.into()),
        }
    }
}

#[must_use]
pub fn guard(access: RouteAccess, authenticated: bool, requested_path: &str) -> GuardDecision {
    match (access, authenticated) {
        (RouteAccess::AuthOnly, false) => GuardDecision::RedirectToLogin {
            from: requested_path.to_string(),
        },
        (RouteAccess::GuestOnly, true) => GuardDecision::RedirectToHome,
        _ => GuardDecision::Render,
    }
}

/// Where unknown paths end up.
#[must_use]
pub fn fallback_path(authenticated: bool) -> &'static str {
    if authenticated { HOME_PATH } else { LOGIN_PATH }
}

/// Where to go after a successful login.
///
/// Only absolute in-app paths are honoured; anything else, including the
/// login view itself, falls back to the dashboard.
#[must_use]
pub fn post_login_path(from: Option<&str>) -> &str {
    match from {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\")
                && path != LOGIN_PATH =>
        {
            path
        }
        _ => HOME_PATH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(HOME_PATH)]
    #[test_case(PLAYGROUND_PATH)]
    fn anonymous_visit_to_protected_path_redirects_with_origin(path: &str) {
        let decision = guard(RouteAccess::AuthOnly, false, path);
        assert_eq!(
            decision,
            GuardDecision::RedirectToLogin {
                from: path.to_string()
            }
        );

        let GuardDecision::RedirectToLogin { from } = decision else {
            unreachable!();
        };
        assert_eq!(post_login_path(Some(from.as_str())), path);
    }

    #[test]
    fn authenticated_visit_to_protected_path_renders() {
        assert_eq!(
            guard(RouteAccess::AuthOnly, true, PLAYGROUND_PATH),
            GuardDecision::Render
        );
    }

    #[test]
    fn authenticated_visit_to_login_goes_home() {
        assert_eq!(
            guard(RouteAccess::GuestOnly, true, LOGIN_PATH),
            GuardDecision::RedirectToHome
        );
    }

    #[test]
    fn anonymous_visit_to_login_renders() {
        assert_eq!(
            guard(RouteAccess::GuestOnly, false, LOGIN_PATH),
            GuardDecision::Render
        );
    }

    #[test]
    fn fallback_depends_on_session() {
        assert_eq!(fallback_path(true), HOME_PATH);
        assert_eq!(fallback_path(false), LOGIN_PATH);
    }

    #[test_case(None, HOME_PATH ; "no origin")]
    #[test_case(Some(""), HOME_PATH ; "empty origin")]
    #[test_case(Some(LOGIN_PATH), HOME_PATH ; "login origin")]
    #[test_case(Some("https://evil.example"), HOME_PATH ; "absolute url")]
    #[test_case(Some("//evil.example"), HOME_PATH ; "protocol relative")]
    #[test_case(Some("/\\evil.example"), HOME_PATH ; "backslash protocol relative")]
    #[test_case(Some("/playground"), "/playground" ; "playground origin")]
    fn post_login_path_cases(from: Option<&str>, expected: &str) {
        assert_eq!(post_login_path(from), expected);
    }

    #[test]
    fn login_redirect_query_omits_missing_origin() {
        assert_eq!(serde_json::to_string(&LoginRedirect::default()).unwrap(), "{}");
        let parsed: LoginRedirect = serde_json::from_str(r#"{"from":"/playground"}"#).unwrap();
        assert_eq!(parsed, LoginRedirect::from_path("/playground"));
    }
}
