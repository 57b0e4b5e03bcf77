//! # Demo API Endpoints
//!
//! Routing table for the JSONPlaceholder-backed mock client: where each call
//! goes, how long it pretends to take and what it says when it fails.

use std::fmt;

/// Public demo host the client talks to by default.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

pub const DEFAULT_TODO_LIMIT: u32 = 10;
pub const DEFAULT_POST_LIMIT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        })
    }
}

/// One call the client can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Users,
    User(u32),
    Todos { limit: u32 },
    Posts { limit: u32 },
    Comments { post_id: u32 },
    CreateTodo,
    UpdateTodo(u32),
}

impl Endpoint {
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::CreateTodo => Method::Post,
            Self::UpdateTodo(_) => Method::Patch,
            _ => Method::Get,
        }
    }

    /// Path and query relative to the base URL.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Users => "/users".to_string(),
            Self::User(id) => format!("/users/{id}"),
            Self::Todos { limit } => format!("/todos?_limit={limit}"),
            Self::Posts { limit } => format!("/posts?_limit={limit}"),
            Self::Comments { post_id } => format!("/posts/{post_id}/comments"),
            Self::CreateTodo => "/todos".to_string(),
            Self::UpdateTodo(id) => format!("/todos/{id}"),
        }
    }

    #[must_use]
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    /// Artificial delay applied before the request is sent.
    #[must_use]
    pub fn latency_ms(self) -> u32 {
        match self {
            Self::Users | Self::CreateTodo => 300,
            Self::User(_) | Self::UpdateTodo(_) => 200,
            Self::Todos { .. } => 400,
            Self::Posts { .. } => 350,
            Self::Comments { .. } => 250,
        }
    }

    /// Message surfaced for any non-success response.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Users => "Failed to fetch users",
            Self::User(_) => "Failed to fetch user",
            Self::Todos { .. } => "Failed to fetch todos",
            Self::Posts { .. } => "Failed to fetch posts",
            Self::Comments { .. } => "Failed to fetch comments",
            Self::CreateTodo => "Failed to create todo",
            Self::UpdateTodo(_) => "Failed to update todo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Endpoint::Users, "GET", "/users", 300)]
    #[test_case(Endpoint::User(3), "GET", "/users/3", 200)]
    #[test_case(Endpoint::Todos { limit: 10 }, "GET", "/todos?_limit=10", 400)]
    #[test_case(Endpoint::Posts { limit: 5 }, "GET", "/posts?_limit=5", 350)]
    #[test_case(Endpoint::Comments { post_id: 2 }, "GET", "/posts/2/comments", 250)]
    #[test_case(Endpoint::CreateTodo, "POST", "/todos", 300)]
    #[test_case(Endpoint::UpdateTodo(9), "PATCH", "/todos/9", 200)]
    fn endpoint_table(endpoint: Endpoint, method: &str, path: &str, latency: u32) {
        assert_eq!(endpoint.method().to_string(), method);
        assert_eq!(endpoint.path(), path);
        assert_eq!(endpoint.latency_ms(), latency);
    }

    #[test]
    fn url_joins_without_double_slash() {
        assert_eq!(
            Endpoint::Users.url("https://jsonplaceholder.typicode.com/"),
            "https://jsonplaceholder.typicode.com/users"
        );
        assert_eq!(
            Endpoint::Posts { limit: 5 }.url(DEFAULT_BASE_URL),
            "https://jsonplaceholder.typicode.com/posts?_limit=5"
        );
    }

    #[test]
    fn failure_messages_name_the_resource() {
        assert_eq!(Endpoint::Users.failure_message(), "Failed to fetch users");
        assert_eq!(
            Endpoint::UpdateTodo(1).failure_message(),
            "Failed to update todo"
        );
    }
}
