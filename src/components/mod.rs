//! UI Components
//!
//! Leptos components of the todo widget.

mod filter_bar;
mod list_footer;
mod new_task_input;
mod task_list_view;
mod task_row;
mod theme_toggle;

pub use filter_bar::FilterBar;
pub use list_footer::ListFooter;
pub use new_task_input::NewTaskInput;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
pub use theme_toggle::ThemeToggle;
