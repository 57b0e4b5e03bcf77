use crate::config::FrontendConfig;
use gloo_timers::future::TimeoutFuture;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::api::{DEFAULT_POST_LIMIT, DEFAULT_TODO_LIMIT, Endpoint, Method};
use shared::models::{Comment, NewTodo, Post, Todo, TodoPatch, User};
use thiserror::Error;

thread_local! {
    static SHARED_CLIENT: OnceCell<PlaceholderClient> = OnceCell::new();
}

/// Failure of a demo API call. Cloneable so it can live inside resource handles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { message: &'static str, status: u16 },
    /// The request never produced a usable response.
    #[error("{message}: {details}")]
    Request {
        message: &'static str,
        details: String,
    },
}

impl ApiError {
    fn request(endpoint: Endpoint, err: &reqwest::Error) -> Self {
        Self::Request {
            message: endpoint.failure_message(),
            details: err.to_string(),
        }
    }
}

/// Map a response status to the endpoint's generic failure.
pub(crate) fn check_status(endpoint: Endpoint, status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            message: endpoint.failure_message(),
            status: status.as_u16(),
        })
    }
}

/// Client for the JSONPlaceholder demo API with artificial latency.
#[derive(Clone, Debug)]
pub struct PlaceholderClient {
    base_url: String,
    client: Client,
    simulate_latency: bool,
}

impl PlaceholderClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            simulate_latency: true,
        }
    }

    pub fn with_latency(mut self, simulate_latency: bool) -> Self {
        self.simulate_latency = simulate_latency;
        self
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let config = FrontendConfig::new();
                Self::new(config.api_base_url()).with_latency(config.simulate_latency())
            })
            .clone()
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn builder(&self, endpoint: Endpoint) -> RequestBuilder {
        let url = endpoint.url(&self.base_url);
        match endpoint.method() {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Patch => self.client.patch(url),
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        if self.simulate_latency {
            TimeoutFuture::new(endpoint.latency_ms()).await;
        }
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::request(endpoint, &err))?;
        if let Err(err) = check_status(endpoint, response.status()) {
            log::warn!("{} {} failed: {err}", endpoint.method(), endpoint.path());
            return Err(err);
        }
        response
            .json()
            .await
            .map_err(|err| ApiError::request(endpoint, &err))
    }

    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        let endpoint = Endpoint::Users;
        self.send(endpoint, self.builder(endpoint)).await
    }

    pub async fn get_user(&self, id: u32) -> Result<User, ApiError> {
        let endpoint = Endpoint::User(id);
        self.send(endpoint, self.builder(endpoint)).await
    }

    /// Fetch the first `limit` todos (10 when `None`).
    pub async fn get_todos(&self, limit: Option<u32>) -> Result<Vec<Todo>, ApiError> {
        let endpoint = Endpoint::Todos {
            limit: limit.unwrap_or(DEFAULT_TODO_LIMIT),
        };
        self.send(endpoint, self.builder(endpoint)).await
    }

    /// Fetch the first `limit` posts (5 when `None`).
    pub async fn get_posts(&self, limit: Option<u32>) -> Result<Vec<Post>, ApiError> {
        let endpoint = Endpoint::Posts {
            limit: limit.unwrap_or(DEFAULT_POST_LIMIT),
        };
        self.send(endpoint, self.builder(endpoint)).await
    }

    pub async fn get_comments(&self, post_id: u32) -> Result<Vec<Comment>, ApiError> {
        let endpoint = Endpoint::Comments { post_id };
        self.send(endpoint, self.builder(endpoint)).await
    }

    /// Create a todo. The demo host echoes it back with an id but does not store it.
    pub async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, ApiError> {
        let endpoint = Endpoint::CreateTodo;
        self.send(endpoint, self.builder(endpoint).json(todo)).await
    }

    pub async fn update_todo(&self, id: u32, patch: &TodoPatch) -> Result<Todo, ApiError> {
        let endpoint = Endpoint::UpdateTodo(id);
        self.send(endpoint, self.builder(endpoint).json(patch)).await
    }
}
