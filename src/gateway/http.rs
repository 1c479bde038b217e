//! REST Todo Gateway
//!
//! `reqwest` client for `/api/todos`. In the browser reqwest sits on top of
//! `fetch`; natively (tests) it uses rustls.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{TodoGateway, TodoQuery};
use crate::error::{AppError, AppResult};
use crate::models::{NewTodo, Todo};
use crate::storage::{KeyValueStorage, ACCESS_TOKEN_KEY};

/// Gateway backed by the REST API
#[derive(Clone)]
pub struct HttpTodoGateway {
    client: Client,
    /// `{api_base_url}/todos`, no trailing slash
    todos_url: String,
    storage: Arc<dyn KeyValueStorage>,
}

impl HttpTodoGateway {
    /// `api_base_url` is the API root, e.g. `http://localhost:8000/api`
    pub fn new(api_base_url: &str, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            client: Client::new(),
            todos_url: format!("{}/todos", api_base_url.trim_end_matches('/')),
            storage,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/", self.todos_url)
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}/{}/", self.todos_url, id)
    }

    /// Attach the stored bearer token, if any
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.storage.get(ACCESS_TOKEN_KEY) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, id: Option<u32>) -> AppResult<Response> {
        let response = self.authorized(request).send().await?;
        check_status(response, id).await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder, id: Option<u32>) -> AppResult<T> {
        let response = self.send(request, id).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}

/// Map a non-success status onto `AppError`
///
/// `id` is the todo the request addressed; a 404 on it becomes `NotFound`.
pub(crate) async fn check_status(response: Response, id: Option<u32>) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => Err(AppError::NotFound(id)),
        (StatusCode::UNAUTHORIZED, _) => Err(AppError::Unauthorized),
        _ => {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %message, "request failed");
            Err(AppError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: String,
}

/// Leading count of a message like "3 todo(s) removed"
fn parse_cleared_count(message: &str) -> usize {
    let digits: String = message
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

#[async_trait(?Send)]
impl TodoGateway for HttpTodoGateway {
    async fn list(&self, query: &TodoQuery) -> AppResult<Vec<Todo>> {
        debug!(?query, "GET todos");
        let request = self.client.get(self.collection_url()).query(query);
        self.send_json(request, None).await
    }

    async fn get_by_id(&self, id: u32) -> AppResult<Todo> {
        debug!(id, "GET todo");
        let request = self.client.get(self.item_url(id));
        self.send_json(request, Some(id)).await
    }

    async fn create(&self, todo: &NewTodo) -> AppResult<Todo> {
        debug!(title = %todo.title, "POST todo");
        let request = self.client.post(self.collection_url()).json(todo);
        self.send_json(request, None).await
    }

    async fn update(&self, todo: &Todo) -> AppResult<Todo> {
        debug!(id = todo.id, "PUT todo");
        let request = self.client.put(self.item_url(todo.id)).json(todo);
        self.send_json(request, Some(todo.id)).await
    }

    async fn delete(&self, id: u32) -> AppResult<()> {
        debug!(id, "DELETE todo");
        let request = self.client.delete(self.item_url(id));
        self.send(request, Some(id)).await?;
        Ok(())
    }

    async fn toggle(&self, id: u32) -> AppResult<Todo> {
        debug!(id, "PATCH todo toggle");
        let request = self
            .client
            .patch(format!("{}/{}/toggle/", self.todos_url, id))
            .json(&serde_json::json!({}));
        self.send_json(request, Some(id)).await
    }

    async fn clear_completed(&self) -> AppResult<usize> {
        debug!("DELETE completed todos");
        let request = self.client.delete(format!("{}/clear_completed/", self.todos_url));
        let body: MessageBody = self.send_json(request, None).await?;
        Ok(parse_cleared_count(&body.message))
    }
}
