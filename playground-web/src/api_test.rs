//! Tests for the API client functionality
//!
//! Covers client construction and the mapping from HTTP status to the
//! generic per-endpoint failure.

#[cfg(test)]
mod tests {
    use crate::api::{ApiError, PlaceholderClient, check_status};
    use reqwest::StatusCode;
    use shared::api::Endpoint;

    /// Tests API client creation trims the trailing slash
    #[test]
    fn test_api_client_creation() {
        let client = PlaceholderClient::new("https://jsonplaceholder.typicode.com/");
        assert_eq!(client.base_url(), "https://jsonplaceholder.typicode.com");
    }

    /// Tests that success statuses pass through
    #[test]
    fn test_success_status_is_ok() {
        assert_eq!(check_status(Endpoint::Users, StatusCode::OK), Ok(()));
        assert_eq!(check_status(Endpoint::CreateTodo, StatusCode::CREATED), Ok(()));
    }

    /// Tests non-success statuses become the endpoint's generic error
    #[test]
    fn test_error_status_uses_failure_message() {
        let err = check_status(Endpoint::Todos { limit: 10 }, StatusCode::NOT_FOUND).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                message: "Failed to fetch todos",
                status: 404,
            }
        );
        assert_eq!(err.to_string(), "Failed to fetch todos");
    }

    /// Tests redirects and server errors are both failures
    #[test]
    fn test_non_success_statuses() {
        for status in [
            StatusCode::MOVED_PERMANENTLY,
            StatusCode::UNAUTHORIZED,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            assert!(check_status(Endpoint::Posts { limit: 5 }, status).is_err());
        }
    }

    /// Tests request errors keep the details
    #[test]
    fn test_request_error_display() {
        let err = ApiError::Request {
            message: "Failed to fetch users",
            details: "network down".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to fetch users: network down");
    }
}
