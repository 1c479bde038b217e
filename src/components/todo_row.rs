//! Todo Row Component
//!
//! Individual todo in the list view.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteTodoButton, PriorityBadge};
use crate::context::use_app_context;
use crate::controller;
use crate::models::Todo;
use crate::routing::Route;
use crate::store::TodoStore;

/// Completion state the checkbox should show: the store's, else the row's own
fn stored_completed(store: TodoStore, id: u32, fallback: bool) -> bool {
    store.get_by_id(id).map_or(fallback, |todo| todo.completed)
}

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let checkbox = NodeRef::<Input>::new();

    let id = todo.id;
    let completed = todo.completed;
    let title = todo.title.clone();

    let toggle = move |_| {
        spawn_local(async move {
            let gateway = ctx.gateway();
            if let Err(err) = controller::toggle_todo(&*gateway, ctx.store, id).await {
                // The browser already flipped the box; the store did not change
                if let Some(input) = checkbox.get_untracked() {
                    input.set_checked(stored_completed(ctx.store, id, completed));
                }
                ctx.report(&err);
            }
        });
    };

    view! {
        <div class=if completed { "todo-row completed" } else { "todo-row" }>
            // Checkbox
            <input
                type="checkbox"
                node_ref=checkbox
                prop:checked=move || stored_completed(ctx.store, id, completed)
                on:change=toggle
            />

            // Title
            <a class="todo-title" href=Route::Detail(id).href()>{title.clone()}</a>

            <PriorityBadge priority=todo.priority />

            // Edit button
            <button class="edit-btn" on:click=move |_| ctx.navigator.navigate(Route::Edit(id))>"Edit"</button>

            <DeleteTodoButton id=id title=title />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::gateway::LocalTodoGateway;
    use crate::models::{NewTodo, Priority};

    #[tokio::test]
    async fn test_failed_toggle_keeps_stored_state() {
        let rows = TodoStore::new();
        let todo = rows.add(NewTodo::new("Call the bank", Priority::High));
        // the gateway only knows id 50, so this toggle is a 404
        let gateway = LocalTodoGateway::seeded(TodoStore::with_todos(vec![Todo {
            id: 50,
            ..todo.clone()
        }]));

        let result = controller::toggle_todo(&gateway, rows, todo.id).await;

        assert_eq!(result, Err(AppError::NotFound(todo.id)));
        assert!(!stored_completed(rows, todo.id, true));
    }

    #[test]
    fn test_stored_completed_falls_back_for_unknown_rows() {
        let rows = TodoStore::new();
        assert!(stored_completed(rows, 9, true));
        assert!(!stored_completed(rows, 9, false));
    }
}
