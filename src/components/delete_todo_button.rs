//! Delete Todo Button
//!
//! Two-step delete for a todo row: the trash button asks, the confirm
//! button sends the request. Both stay disabled while it is in flight.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::controller;

/// Where the row's delete control is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStep {
    Idle,
    Confirming,
    Deleting,
}

impl DeleteStep {
    pub fn ask(self) -> Self {
        match self {
            DeleteStep::Idle => DeleteStep::Confirming,
            other => other,
        }
    }

    pub fn confirm(self) -> Self {
        match self {
            DeleteStep::Confirming => DeleteStep::Deleting,
            other => other,
        }
    }

    /// Cancel, or a failed request
    pub fn back(self) -> Self {
        DeleteStep::Idle
    }
}

#[component]
pub fn DeleteTodoButton(id: u32, #[prop(into)] title: String) -> impl IntoView {
    let ctx = use_app_context();
    let step = RwSignal::new(DeleteStep::Idle);
    let title = StoredValue::new(title);

    let confirm = move |ev: MouseEvent| {
        ev.stop_propagation();
        if step.get_untracked() != DeleteStep::Confirming {
            return;
        }
        step.update(|s| *s = s.confirm());
        spawn_local(async move {
            let gateway = ctx.gateway();
            match controller::delete_todo(&*gateway, ctx.store, id).await {
                // The row unmounts once the store drops the todo
                Ok(()) => {
                    ctx.toasts.success(format!("Deleted \"{}\"", title.get_value()));
                }
                Err(err) => {
                    step.update(|s| *s = s.back());
                    ctx.report(&err);
                }
            }
        });
    };

    view! {
        {move || match step.get() {
            DeleteStep::Idle => view! {
                <button
                    class="delete-btn"
                    title=move || format!("Delete \"{}\"", title.get_value())
                    on:click=move |ev| {
                        ev.stop_propagation();
                        step.update(|s| *s = s.ask());
                    }
                >
                    "×"
                </button>
            }.into_any(),
            current => {
                let busy = current == DeleteStep::Deleting;
                view! {
                    <span class="delete-confirm">
                        <span class="delete-confirm-text">
                            {if busy { "Deleting..." } else { "Delete this task?" }}
                        </span>
                        <button class="confirm-btn" disabled=busy on:click=confirm>"Yes"</button>
                        <button
                            class="cancel-btn"
                            disabled=busy
                            on:click=move |ev| {
                                ev.stop_propagation();
                                step.update(|s| *s = s.back());
                            }
                        >
                            "No"
                        </button>
                    </span>
                }.into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_steps() {
        let asked = DeleteStep::Idle.ask();
        assert_eq!(asked, DeleteStep::Confirming);
        assert_eq!(asked.confirm(), DeleteStep::Deleting);
        assert_eq!(asked.back(), DeleteStep::Idle);
    }

    #[test]
    fn test_confirm_needs_a_question_first() {
        assert_eq!(DeleteStep::Idle.confirm(), DeleteStep::Idle);
        // a second click while the request runs changes nothing
        assert_eq!(DeleteStep::Deleting.confirm(), DeleteStep::Deleting);
        assert_eq!(DeleteStep::Deleting.ask(), DeleteStep::Deleting);
    }
}
