//! Todo Client App
//!
//! Root component: owns the store, the synchronizer and the window listeners.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{HttpRemote, RemoteConfig, Synchronizer, Theme, MOBILE_BREAKPOINT_PX};
use tracing::{info, warn};

use crate::components::{FilterBar, Header, NewTodoInput, TaskList};
use crate::context::AppContext;
use crate::store::{store_apply_snapshot, store_layout, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new(viewport_width()));
    provide_context(store);

    let remote = HttpRemote::new(RemoteConfig::from_build_env());
    info!(base_url = remote.config().base_url(), "using remote store");
    let sync = Synchronizer::new(remote, move |snapshot| store_apply_snapshot(&store, snapshot));
    let ctx = AppContext::new(sync);
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| {
        ctx.run(|sync| async move {
            let _ = sync.load_all().await;
        });
    });

    // Track viewport width
    let resize = window_event_listener(ev::resize, move |_| {
        store.viewport_width().set(viewport_width());
    });
    on_cleanup(move || resize.remove());

    // Mirror theme onto <html class="dark">
    Effect::new(move |_| apply_theme_class(store.theme().get()));

    let layout = Memo::new(move |_| store_layout(&store));

    view! {
        <section class="app">
            <div class="backdrop">
                <img src=move || layout.get().background() alt="" />
            </div>

            <section class="container">
                <Header layout=layout />
                <NewTodoInput />
                <TaskList layout=layout />

                // Narrow screens get the filters in their own bar
                <Show when=move || layout.get().is_mobile()>
                    <div class="footer-mobile">
                        <FilterBar />
                    </div>
                </Show>
            </section>
        </section>
    }
}

fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(MOBILE_BREAKPOINT_PX)
}

fn apply_theme_class(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(err) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        warn!(?err, "failed to switch theme class");
    }
}
