//! Filter Bar Component
//!
//! All / Active / Completed buttons. The highlight follows the last
//! successful fetch, not the click.

use leptos::prelude::*;
use todo_sync::Filter;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    view! {
        <div class="filter-bar">
            {Filter::ALL.iter().map(|&filter| {
                let is_selected = move || store.view().read().filter == filter;
                view! {
                    <button
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| {
                            ctx.run(move |sync| async move {
                                let _ = sync.load_filtered(filter.as_keyword()).await;
                            });
                        }
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
