//! UI Components
//!
//! Reusable Leptos components.

mod delete_todo_button;
mod filter_bar;
mod nav_bar;
mod priority_selector;
mod todo_form;
mod todo_row;
mod todo_table;

pub use delete_todo_button::DeleteTodoButton;
pub use filter_bar::FilterBar;
pub use nav_bar::NavBar;
pub use priority_selector::{PriorityBadge, PrioritySelector};
pub use todo_form::TodoFormView;
pub use todo_row::TodoRow;
pub use todo_table::TodoTable;
