//! Header Component
//!
//! Logo and the light/dark toggle.

use leptos::prelude::*;
use todo_sync::Layout;
use tracing::debug;

use crate::store::{store_toggle_theme, use_app_store, AppStateStoreFields};

#[component]
pub fn Header(layout: Memo<Layout>) -> impl IntoView {
    let store = use_app_store();

    let toggle_theme = move |_| {
        let theme = store_toggle_theme(&store);
        debug!(?theme, "theme switched");
    };

    view! {
        <div class="header">
            <img src=move || layout.get().logo() alt="TODO" />
            <img
                class="theme-toggle"
                src=move || store.theme().get().toggle_icon()
                style=move || store.theme().get().toggle_style()
                on:click=toggle_theme
                alt=""
            />
        </div>
    }
}
