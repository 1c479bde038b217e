//! Todo List Page
//!
//! Loads todos on entry, then renders the store through the filter bar.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FilterBar, TodoTable};
use crate::context::use_app_context;
use crate::controller::{self, PageState};
use crate::gateway::TodoQuery;
use crate::routing::Route;
use crate::store::use_todo_store;

#[component]
pub fn TodoListPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();
    let (state, set_state) = signal(PageState::<usize>::Loading);
    let query = RwSignal::new(TodoQuery::default());

    let reload = move || {
        set_state.set(PageState::Loading);
        spawn_local(async move {
            let gateway = ctx.gateway();
            let loaded = controller::load_list(&*gateway, store).await;
            ctx.report_load(&loaded);
            set_state.set(loaded);
        });
    };

    // Load on mount
    Effect::new(move |_| reload());

    let clear_completed = move |_| {
        spawn_local(async move {
            let gateway = ctx.gateway();
            match controller::clear_completed(&*gateway, store).await {
                Ok(removed) => {
                    ctx.toasts.success(format!("Removed {} completed task(s)", removed));
                }
                Err(err) => ctx.report(&err),
            }
        });
    };

    let visible = Signal::derive(move || query.with(|q| q.apply(store.list())));

    view! {
        <section class="page todo-list-page">
            <header class="page-header">
                <h1>"My Tasks"</h1>
                <div class="page-actions">
                    <button class="btn" on:click=move |_| reload()>"Reload"</button>
                    <button class="btn primary" on:click=move |_| ctx.navigator.navigate(Route::Create)>
                        "New task"
                    </button>
                </div>
            </header>

            <FilterBar query=query />

            {move || match state.get() {
                PageState::Loading => view! { <p class="loading">"Loading tasks..."</p> }.into_any(),
                PageState::Error(err) => view! { <p class="error">{err.user_message()}</p> }.into_any(),
                PageState::NotFound | PageState::Ready(_) => view! { <TodoTable todos=visible /> }.into_any(),
            }}

            <footer class="list-footer">
                <p class="item-count">
                    {move || format!("{} of {} completed", store.completed_count(), store.total_count())}
                    <span class="pending-count">{move || format!(" ({} pending)", store.pending_count())}</span>
                </p>
                <Show when=move || { store.completed_count() > 0 }>
                    <button class="btn small" on:click=clear_completed>"Clear completed"</button>
                </Show>
            </footer>
        </section>
    }
}
