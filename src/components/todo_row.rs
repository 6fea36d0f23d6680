//! Todo Row Component
//!
//! One task in the list.

use leptos::prelude::*;
use todo_sync::{Layout, Todo};

use crate::context::use_app_context;

/// A single task row: completion circle, text, delete icon
#[component]
pub fn TodoRow(todo: Todo, layout: Memo<Layout>) -> impl IntoView {
    let ctx = use_app_context();

    let Todo { id, text, completed } = todo;
    let toggle_id = id.clone();

    let toggle = move |_| {
        let id = toggle_id.clone();
        ctx.run(move |sync| async move {
            let _ = sync.toggle_completed(&id, completed).await;
        });
    };

    let delete = move |_| {
        let id = id.clone();
        ctx.run(move |sync| async move {
            let _ = sync.delete_task(&id).await;
        });
    };

    view! {
        <div class=if completed { "item completed" } else { "item" }>
            <div class="check" on:click=toggle>
                {if completed {
                    view! { <img class="check-icon" src="/assets/check-icon.png" alt="" /> }.into_any()
                } else {
                    view! { <div class="check-circle"></div> }.into_any()
                }}
            </div>

            <p class="item-text">{text}</p>

            <img
                class="delete-icon"
                src=move || layout.get().delete_icon()
                on:click=delete
                alt=""
            />
        </div>
    }
}
