//! Todo API
//!
//! HTTP bindings for the `/todos` resource, organized by layer:
//! - `http`: reqwest transport, surfaces every failure as `ApiError`
//! - `client`: what components call; logs failures and collapses them

mod client;
mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{HealthStatus, NewTodo, TodoId, TodoItem};

pub use client::StoreClient;
pub use http::HttpTodoApi;

/// Transport for the todo resource.
///
/// Futures are `?Send` because requests run on the browser's single thread.
#[async_trait(?Send)]
pub trait TodoApi: Send + Sync {
    async fn list(&self) -> ApiResult<Vec<TodoItem>>;

    async fn create(&self, todo: &NewTodo) -> ApiResult<TodoItem>;

    async fn delete(&self, id: TodoId) -> ApiResult<()>;

    async fn health(&self) -> ApiResult<HealthStatus>;
}

#[cfg(test)]
pub(crate) mod fake {
    //! Scripted in-memory `TodoApi` for component-logic tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::error::ApiError;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        List,
        Create(NewTodo),
        Delete(TodoId),
        Health,
    }

    /// Canned outcome; `Fail` maps to a non-success status
    pub enum Reply<T> {
        Ok(T),
        Fail(u16),
    }

    #[derive(Default)]
    pub struct FakeApi {
        calls: Mutex<Vec<Call>>,
        lists: Mutex<VecDeque<Reply<Vec<TodoItem>>>>,
        creates: Mutex<VecDeque<Reply<TodoItem>>>,
        deletes: Mutex<VecDeque<Reply<()>>>,
    }

    fn next<T>(queue: &Mutex<VecDeque<Reply<T>>>) -> ApiResult<T> {
        match queue.lock().unwrap().pop_front() {
            Some(Reply::Ok(value)) => Ok(value),
            Some(Reply::Fail(status)) => Err(ApiError::Status {
                status,
                body: "scripted failure".to_string(),
            }),
            None => Err(ApiError::Status {
                status: 599,
                body: "no reply scripted".to_string(),
            }),
        }
    }

    impl FakeApi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn on_list(self, reply: Reply<Vec<TodoItem>>) -> Self {
            self.lists.lock().unwrap().push_back(reply);
            self
        }

        pub fn on_create(self, reply: Reply<TodoItem>) -> Self {
            self.creates.lock().unwrap().push_back(reply);
            self
        }

        pub fn on_delete(self, reply: Reply<()>) -> Self {
            self.deletes.lock().unwrap().push_back(reply);
            self
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl TodoApi for FakeApi {
        async fn list(&self) -> ApiResult<Vec<TodoItem>> {
            self.calls.lock().unwrap().push(Call::List);
            next(&self.lists)
        }

        async fn create(&self, todo: &NewTodo) -> ApiResult<TodoItem> {
            self.calls.lock().unwrap().push(Call::Create(todo.clone()));
            next(&self.creates)
        }

        async fn delete(&self, id: TodoId) -> ApiResult<()> {
            self.calls.lock().unwrap().push(Call::Delete(id));
            next(&self.deletes)
        }

        async fn health(&self) -> ApiResult<HealthStatus> {
            self.calls.lock().unwrap().push(Call::Health);
            Ok(HealthStatus { status: "ok".to_string() })
        }
    }

    pub fn todo(id: TodoId, title: &str) -> TodoItem {
        TodoItem {
            id,
            title: title.to_string(),
            due_date: None,
            categories: Vec::new(),
            timestamp: format!("t{}", id),
        }
    }
}
