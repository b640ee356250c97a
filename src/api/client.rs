//! Store Client
//!
//! The contract components see: every failure is logged here and comes
//! back as `None` / `false`, so callers simply leave their state alone.

use std::sync::Arc;

use super::{HttpTodoApi, TodoApi};
use crate::models::{NewTodo, TodoId, TodoItem};

#[derive(Clone)]
pub struct StoreClient {
    api: Arc<dyn TodoApi>,
}

impl StoreClient {
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        Self { api }
    }

    pub fn http(base: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpTodoApi::new(base)))
    }

    pub async fn list_items(&self) -> Option<Vec<TodoItem>> {
        match self.api.list().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "loaded todos");
                Some(items)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load todos");
                None
            }
        }
    }

    pub async fn create_item(&self, todo: &NewTodo) -> Option<TodoItem> {
        match self.api.create(todo).await {
            Ok(item) => {
                tracing::debug!(id = item.id, "created todo");
                Some(item)
            }
            Err(e) => {
                tracing::error!(error = %e, title = %todo.title, "failed to add todo");
                None
            }
        }
    }

    pub async fn delete_item(&self, id: TodoId) -> bool {
        match self.api.delete(id).await {
            Ok(()) => {
                tracing::debug!(id, "deleted todo");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, id, "failed to delete todo");
                false
            }
        }
    }

    /// Startup probe; only ever logs
    pub async fn check_health(&self) -> bool {
        match self.api.health().await {
            Ok(health) if health.is_ok() => true,
            Ok(health) => {
                tracing::warn!(status = %health.status, "todo backend reports unhealthy");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "todo backend unreachable");
                false
            }
        }
    }
}
