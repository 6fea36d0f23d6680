//! Task List Component

use leptos::prelude::*;
use todo_sync::Layout;

use crate::components::{ListFooter, TodoRow};
use crate::store::{use_app_store, AppStateStoreFields};

/// Rows in store order, followed by the footer
#[component]
pub fn TaskList(layout: Memo<Layout>) -> impl IntoView {
    let store = use_app_store();
    let todos = move || store.view().read().todos.clone();

    view! {
        <article class="task-wrapper">
            <For
                each=todos
                // Completion and text are part of the key so edits re-render the row
                key=|todo| (todo.id.clone(), todo.completed, todo.text.clone())
                children=move |todo| view! { <TodoRow todo=todo layout=layout /> }
            />
            <ListFooter layout=layout />
        </article>
    }
}
