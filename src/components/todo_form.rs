//! Todo Form Component
//!
//! Title, due date and comma separated categories for a new item.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::StoreClient;
use crate::form::CreationForm;
use crate::models::TodoItem;

/// Form for creating new items
///
/// # Arguments
/// * `on_add` - Receives the server-returned item after a successful create
#[component]
pub fn TodoForm(#[prop(into)] on_add: Callback<TodoItem>) -> impl IntoView {
    let client = use_context::<StoreClient>().expect("StoreClient should be provided");
    let form = RwSignal::new(CreationForm::default());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(CreationForm::begin_submit).flatten() else {
            return;
        };
        let client = client.clone();
        spawn_local(async move {
            let created = client.create_item(&payload).await;
            form.update(|f| f.finish_submit(created.as_ref()));
            if let Some(item) = created {
                on_add.run(item);
            }
        });
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <div class="row">
                <input
                    type="text"
                    placeholder="What needs to be done?"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.title = value);
                    }
                />
                <button type="submit" disabled=move || form.with(CreationForm::is_submitting)>
                    "Add"
                </button>
            </div>
            <div class="row small">
                <input
                    type="date"
                    prop:value=move || form.with(|f| f.due_date.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.due_date = value);
                    }
                />
                <input
                    type="text"
                    placeholder="categories (comma separated)"
                    prop:value=move || form.with(|f| f.categories.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.categories = value);
                    }
                />
            </div>
        </form>
    }
}
