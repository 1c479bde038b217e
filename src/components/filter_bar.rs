//! Filter Bar Component
//!
//! Search box plus status, priority and sort selects for the list page.

use leptos::prelude::*;

use crate::gateway::{TodoOrdering, TodoQuery};
use crate::models::Priority;

fn status_value(completed: Option<bool>) -> &'static str {
    match completed {
        None => "all",
        Some(false) => "active",
        Some(true) => "completed",
    }
}

fn parse_status(value: &str) -> Option<bool> {
    match value {
        "active" => Some(false),
        "completed" => Some(true),
        _ => None,
    }
}

fn parse_ordering(value: &str) -> Option<TodoOrdering> {
    match value {
        "priority" => Some(TodoOrdering::Priority),
        "-priority" => Some(TodoOrdering::PriorityDesc),
        "created_at" => Some(TodoOrdering::Oldest),
        "-created_at" => Some(TodoOrdering::Newest),
        _ => None,
    }
}

/// Filter controls bound to a query signal
#[component]
pub fn FilterBar(query: RwSignal<TodoQuery>) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <input
                type="search"
                placeholder="Search tasks..."
                prop:value=move || query.with(|q| q.search.clone().unwrap_or_default())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    query.update(|q| q.search = if term.trim().is_empty() { None } else { Some(term) });
                }
            />

            <select
                prop:value=move || query.with(|q| status_value(q.completed).to_string())
                on:change=move |ev| query.update(|q| q.completed = parse_status(&event_target_value(&ev)))
            >
                <option value="all">"All"</option>
                <option value="active">"Active"</option>
                <option value="completed">"Completed"</option>
            </select>

            <select
                prop:value=move || query.with(|q| q.priority.map(|p| p.as_u8().to_string()).unwrap_or_default())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    query.update(|q| q.priority = value.parse::<u8>().ok().and_then(|v| Priority::try_from(v).ok()));
                }
            >
                <option value="">"Any priority"</option>
                {Priority::ALL.iter().map(|priority| view! {
                    <option value=priority.as_u8().to_string()>{priority.label()}</option>
                }).collect_view()}
            </select>

            <select on:change=move |ev| query.update(|q| q.ordering = parse_ordering(&event_target_value(&ev)))>
                <option value="">"Default order"</option>
                <option value="priority">"Highest priority first"</option>
                <option value="-priority">"Lowest priority first"</option>
                <option value="-created_at">"Newest first"</option>
                <option value="created_at">"Oldest first"</option>
            </select>

            <Show when=move || query.with(|q| !q.is_empty())>
                <button class="btn small" on:click=move |_| query.set(TodoQuery::default())>"Clear filters"</button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for completed in [None, Some(false), Some(true)] {
            assert_eq!(parse_status(status_value(completed)), completed);
        }
    }

    #[test]
    fn test_parse_ordering() {
        assert_eq!(parse_ordering("-priority"), Some(TodoOrdering::PriorityDesc));
        assert_eq!(parse_ordering(""), None);
    }
}
