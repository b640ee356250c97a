//! UI Components
//!
//! Leptos views for the creation form and the item list.

mod todo_form;
mod todo_list;

pub use todo_form::TodoForm;
pub use todo_list::TodoList;
