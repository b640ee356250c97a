//! Todo Frontend App
//!
//! Root component: owns the list store and wires form and list to the controller.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::StoreClient;
use crate::components::{TodoForm, TodoList};
use crate::controller::{new_store, TodoController};
use crate::models::{TodoId, TodoItem};

#[component]
pub fn App(client: StoreClient) -> impl IntoView {
    provide_context(client.clone());
    let controller = TodoController::new(new_store(), client.clone());

    // Load once on mount
    Effect::new({
        let controller = controller.clone();
        move |_| {
            let controller = controller.clone();
            let client = client.clone();
            spawn_local(async move { controller.load().await });
            spawn_local(async move {
                client.check_health().await;
            });
        }
    });

    let on_add = Callback::new({
        let controller = controller.clone();
        move |item: TodoItem| controller.add(item)
    });

    let on_delete = Callback::new({
        let controller = controller.clone();
        move |id: TodoId| {
            let controller = controller.clone();
            spawn_local(async move { controller.delete(id).await });
        }
    });

    let todos = Signal::derive({
        let controller = controller.clone();
        move || controller.todos()
    });

    view! {
        <div class="container">
            <header>
                <h1>"To-Do"</h1>
                <p class="subtitle">"Simple, responsive To-Do app"</p>
            </header>
            <main>
                <TodoForm on_add=on_add />
                <Show
                    when=move || !controller.phase().is_loading()
                    fallback=|| view! { <p>"Loading..."</p> }
                >
                    <TodoList todos=todos on_delete=on_delete />
                </Show>
            </main>
            <footer>
                <small>"Leptos + reqwest client for the /todos API"</small>
            </footer>
        </div>
    }
}
