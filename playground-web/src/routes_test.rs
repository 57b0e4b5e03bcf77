//! Tests for the routing system
//!
//! Validates route paths, access rules and fallback resolution.

#[cfg(test)]
mod tests {
    use crate::routes::Route;
    use shared::guard::{HOME_PATH, LOGIN_PATH, PLAYGROUND_PATH, RouteAccess};
    use yew_router::Routable;

    /// Tests the paths match the guard constants
    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), HOME_PATH);
        assert_eq!(Route::Playground.to_path(), PLAYGROUND_PATH);
        assert_eq!(Route::Login.to_path(), LOGIN_PATH);
    }

    /// Tests recognition of known and unknown paths
    #[test]
    fn test_route_recognition() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/playground"), Some(Route::Playground));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }

    /// Tests access rules per route
    #[test]
    fn test_route_access() {
        assert_eq!(Route::Home.access(), Some(RouteAccess::AuthOnly));
        assert_eq!(Route::Playground.access(), Some(RouteAccess::AuthOnly));
        assert_eq!(Route::Login.access(), Some(RouteAccess::GuestOnly));
        assert_eq!(Route::NotFound.access(), None);
    }

    /// Tests the header only lists protected views
    #[test]
    fn test_nav_routes() {
        assert_eq!(Route::nav_routes(), vec![Route::Home, Route::Playground]);
    }

    /// Tests post-login resolution never lands on the fallback
    #[test]
    fn test_from_path_or_home() {
        assert_eq!(Route::from_path_or_home("/playground"), Route::Playground);
        assert_eq!(Route::from_path_or_home("/missing"), Route::Home);
        assert_eq!(Route::from_path_or_home("/"), Route::Home);
    }

    /// Tests Debug output for log lines
    #[test]
    fn test_route_debug() {
        assert!(format!("{:?}", Route::Playground).contains("Playground"));
        assert_eq!(Route::Playground.title(), "Playground");
    }
}
