//! Todo List Store
//!
//! The root list and its initial-load phase, plus the helpers that
//! prepend and remove items.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{TodoId, TodoItem};

/// Initial-load progress of the root list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Not mounted yet
    #[default]
    Idle,
    Loading,
    /// The initial fetch finished, successfully or not
    Settled,
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }
}

/// Root list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Display order: server order, newest additions in front
    pub todos: Vec<TodoItem>,
    pub phase: LoadPhase,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_phase(store: &AppStore, phase: LoadPhase) {
    store.phase().set(phase);
}

pub fn store_replace_todos(store: &AppStore, todos: Vec<TodoItem>) {
    store.todos().set(todos);
}

/// Put a newly created item in front of the list
pub fn store_prepend_todo(store: &AppStore, todo: TodoItem) {
    prepend_todo(&mut store.todos().write(), todo);
}

/// Remove every item with this ID from the store
pub fn store_remove_todo(store: &AppStore, id: TodoId) {
    remove_todo(&mut store.todos().write(), id);
}

fn prepend_todo(todos: &mut Vec<TodoItem>, todo: TodoItem) {
    todos.insert(0, todo);
}

fn remove_todo(todos: &mut Vec<TodoItem>, id: TodoId) {
    todos.retain(|todo| todo.id != id);
}
