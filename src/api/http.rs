//! HTTP Transport
//!
//! `TodoApi` over reqwest. On wasm32 this goes through the browser's fetch.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{HealthStatus, NewTodo, TodoId, TodoItem};

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    http: Client,
    base: String,
}

impl HttpTodoApi {
    /// `base` must be absolute, e.g. `http://localhost:8080/api`
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base)
    }

    fn todo_url(&self, id: TodoId) -> String {
        format!("{}/todos/{}", self.base, id)
    }
}

/// Turn a non-2xx response into `ApiError::Status`, keeping the body for the log
async fn check(res: Response) -> ApiResult<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(ApiError::Status { status: status.as_u16(), body })
}

async fn read_json<T: DeserializeOwned>(res: Response) -> ApiResult<T> {
    Ok(check(res).await?.json::<T>().await?)
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ApiResult<Vec<TodoItem>> {
        let res = self.http.get(self.todos_url()).send().await?;
        read_json(res).await
    }

    async fn create(&self, todo: &NewTodo) -> ApiResult<TodoItem> {
        let res = self.http.post(self.todos_url()).json(todo).send().await?;
        read_json(res).await
    }

    async fn delete(&self, id: TodoId) -> ApiResult<()> {
        let res = self.http.delete(self.todo_url(id)).send().await?;
        check(res).await?;
        Ok(())
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        let res = self.http.get(format!("{}/health", self.base)).send().await?;
        read_json(res).await
    }
}
