//! Todo Table Component
//!
//! The visible (filtered) todos, one row each.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::models::Todo;

/// List of todo rows
#[component]
pub fn TodoTable(#[prop(into)] todos: Signal<Vec<Todo>>) -> impl IntoView {
    view! {
        <div class="todo-table">
            <Show
                when=move || todos.with(|todos| !todos.is_empty())
                fallback=|| view! { <p class="empty">"Nothing to do here."</p> }
            >
                <For
                    each=move || todos.get()
                    // Every mutable field is in the key so edits re-render the row
                    key=|todo| (todo.id, todo.title.clone(), todo.priority, todo.completed)
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
            </Show>
        </div>
    }
}
