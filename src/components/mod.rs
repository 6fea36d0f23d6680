//! UI Components
//!
//! Leptos components for the single list view.

mod filter_bar;
mod header;
mod list_footer;
mod new_todo_input;
mod task_list;
mod todo_row;

pub use filter_bar::FilterBar;
pub use header::Header;
pub use list_footer::ListFooter;
pub use new_todo_input::NewTodoInput;
pub use task_list::TaskList;
pub use todo_row::TodoRow;
