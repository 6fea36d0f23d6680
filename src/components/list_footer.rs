//! List Footer Component
//!
//! Item count, desktop filters, and the bulk clear.

use leptos::prelude::*;
use todo_sync::Layout;

use crate::components::FilterBar;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ListFooter(layout: Memo<Layout>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let clear_completed = move |_| {
        ctx.run(|sync| async move {
            let _ = sync.clear_completed().await;
        });
    };

    view! {
        <div class="footer">
            // Counts whatever the list currently shows
            <span class="item-count">
                {move || format!("{} items left", store.view().read().len())}
            </span>

            <Show when=move || !layout.get().is_mobile()>
                <FilterBar />
            </Show>

            <button class="clear-btn" on:click=clear_completed>
                "Clear Completed"
            </button>
        </div>
    }
}
