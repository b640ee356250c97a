//! Todo List Component
//!
//! Stateless rendering of the root list.

use leptos::prelude::*;

use crate::models::{TodoId, TodoItem};

#[component]
pub fn TodoList(
    #[prop(into)] todos: Signal<Vec<TodoItem>>,
    #[prop(into)] on_delete: Callback<TodoId>,
) -> impl IntoView {
    view! {
        <Show
            when=move || todos.with(|t| !t.is_empty())
            fallback=|| view! { <p class="empty">"No to-dos yet."</p> }
        >
            <ul class="todo-list">
                <For
                    each=move || todos.get()
                    // Keyed diff assumes unique ids; the client does not enforce that
                    key=|item| item.id
                    children=move |item| view! { <TodoRow item=item on_delete=on_delete /> }
                />
            </ul>
        </Show>
    }
}

/// A single item row
#[component]
fn TodoRow(item: TodoItem, on_delete: Callback<TodoId>) -> impl IntoView {
    let id = item.id;

    view! {
        <li class="todo-item">
            <div class="meta">
                <div class="title">{item.title}</div>
                <div class="timestamp">{item.timestamp}</div>
                {item.due_date.map(|due| view! { <div class="due">"Due " {due}</div> })}
                {(!item.categories.is_empty()).then(|| view! {
                    <div class="categories">
                        {item.categories.into_iter()
                            .map(|c| view! { <span class="category">{c}</span> })
                            .collect_view()}
                    </div>
                })}
            </div>
            <div class="actions">
                <button class="delete" on:click=move |_| request_delete(on_delete, id)>"Delete"</button>
            </div>
        </li>
    }
}

/// Delete button handler: hands the row's id to the list owner
fn request_delete(on_delete: Callback<TodoId>, id: TodoId) {
    tracing::debug!(id, "delete requested");
    on_delete.run(id);
}
