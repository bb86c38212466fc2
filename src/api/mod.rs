//! REST API Client
//!
//! Typed bindings to the boards/tasks REST resource, organized by domain.
//! The board list arrives in an [`Envelope`] with the payload under `data`;
//! mutations only check the response status.

mod board;
mod task;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::models::Envelope;

const BOARDS_PATH: &str = "/api/boards";
const TASKS_PATH: &str = "/api/tasks";

/// HTTP client bound to one server
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn boards_url(&self) -> String {
        format!("{}{}", self.base_url, BOARDS_PATH)
    }

    fn board_url(&self, id: u32) -> String {
        format!("{}{}/{}", self.base_url, BOARDS_PATH, id)
    }

    fn tasks_url(&self) -> String {
        format!("{}{}", self.base_url, TASKS_PATH)
    }

    fn task_url(&self, id: u32) -> String {
        format!("{}{}/{}", self.base_url, TASKS_PATH, id)
    }

    /// Send a request and fail on non-success status
    async fn execute(&self, request: RequestBuilder, method: &'static str, url: &str) -> ApiResult<Response> {
        log::debug!("{} {}", method, url);
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    /// Send a request and unwrap the payload from the envelope
    async fn fetch_data<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &'static str,
        url: &str,
    ) -> ApiResult<T> {
        let response = self.execute(request, method, url).await?;
        let envelope: Envelope<T> = response.json().await?;
        envelope.data.ok_or_else(|| ApiError::MissingData { url: url.to_string() })
    }
}
