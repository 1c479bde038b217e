//! Priority Selector Component
//!
//! Priority buttons for the todo form, and the badge used in lists.

use leptos::prelude::*;

use crate::models::Priority;

/// Priority selector buttons
#[component]
pub fn PrioritySelector(
    #[prop(into)] current: Signal<u8>,
    on_change: impl Fn(u8) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="priority-selector">
            {Priority::ALL.iter().map(|priority| {
                let value = priority.as_u8();
                let is_selected = move || current.get() == value;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "priority-btn active" } else { "priority-btn" }
                        on:click=move |_| on_change(value)
                    >
                        {priority.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Coloured priority label
#[component]
pub fn PriorityBadge(priority: Priority) -> impl IntoView {
    view! {
        <span class=format!("priority-badge {}", priority.severity())>
            {priority.label()}
        </span>
    }
}
