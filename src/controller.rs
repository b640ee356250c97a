//! Root Controller
//!
//! The only code that mutates the todo list. Each transition touches the
//! store before or after a request, never across an await.

use leptos::prelude::*;

use crate::api::StoreClient;
use crate::models::{TodoId, TodoItem};
use crate::store::{
    store_prepend_todo, store_remove_todo, store_replace_todos, store_set_phase, AppState,
    AppStateStoreFields, AppStore, LoadPhase,
};

#[derive(Clone)]
pub struct TodoController {
    store: AppStore,
    client: StoreClient,
}

impl TodoController {
    pub fn new(store: AppStore, client: StoreClient) -> Self {
        Self { store, client }
    }

    /// Initial full-list fetch. A failed fetch leaves the list as it was.
    pub async fn load(&self) {
        store_set_phase(&self.store, LoadPhase::Loading);
        if let Some(todos) = self.client.list_items().await {
            tracing::info!(count = todos.len(), "todo list loaded");
            store_replace_todos(&self.store, todos);
        }
        store_set_phase(&self.store, LoadPhase::Settled);
    }

    /// Optimistic prepend of a created item; no re-fetch
    pub fn add(&self, todo: TodoItem) {
        store_prepend_todo(&self.store, todo);
    }

    /// Remove locally only once the server confirmed the delete
    pub async fn delete(&self, id: TodoId) {
        if self.client.delete_item(id).await {
            store_remove_todo(&self.store, id);
        }
    }

    pub fn todos(&self) -> Vec<TodoItem> {
        self.store.todos().get()
    }

    pub fn phase(&self) -> LoadPhase {
        self.store.phase().get()
    }
}

/// Fresh store for a root controller
pub fn new_store() -> AppStore {
    AppStore::new(AppState::default())
}
