//! New Todo Input Component
//!
//! Single text field; Enter submits.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NewTodoInput() -> impl IntoView {
    let ctx = use_app_context();
    let (new_text, set_new_text) = signal(String::new());

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() {
            return;
        }

        ctx.run(move |sync| async move {
            // Input keeps its text if the store rejected it
            if sync.create_task(&text).await.is_ok() {
                set_new_text.set(String::new());
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create>
            <input
                type="text"
                placeholder="Create a new todo…"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
        </form>
    }
}
