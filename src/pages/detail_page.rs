//! Todo Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::PriorityBadge;
use crate::context::use_app_context;
use crate::controller::{self, PageState};
use crate::models::Todo;
use crate::pages::NotFoundNotice;
use crate::routing::Route;

fn format_timestamp(todo: &Todo) -> Option<String> {
    todo.created_at
        .map(|created| created.format("%Y-%m-%d %H:%M").to_string())
}

#[component]
pub fn TodoDetailPage(id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(PageState::<Todo>::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            let gateway = ctx.gateway();
            let loaded = controller::load_todo(&*gateway, id).await;
            ctx.report_load(&loaded);
            set_state.set(loaded);
        });
    });

    view! {
        <section class="page todo-detail-page">
            <button class="btn link" on:click=move |_| ctx.navigator.navigate(Route::List)>"← Back"</button>
            {move || match state.get() {
                PageState::Loading => view! { <p class="loading">"Loading task..."</p> }.into_any(),
                PageState::NotFound => view! { <NotFoundNotice /> }.into_any(),
                PageState::Error(err) => view! { <p class="error">{err.user_message()}</p> }.into_any(),
                PageState::Ready(todo) => {
                    let created = format_timestamp(&todo);
                    view! {
                        <article class="todo-detail">
                            <h1 class=if todo.completed { "completed" } else { "" }>{todo.title.clone()}</h1>
                            <dl>
                                <dt>"Priority"</dt>
                                <dd><PriorityBadge priority=todo.priority /></dd>
                                <dt>"Status"</dt>
                                <dd>{if todo.completed { "Completed" } else { "Pending" }}</dd>
                                {created.map(|created| view! {
                                    <dt>"Created"</dt>
                                    <dd>{created}</dd>
                                })}
                            </dl>
                            <button class="btn primary" on:click=move |_| ctx.navigator.navigate(Route::Edit(id))>
                                "Edit"
                            </button>
                        </article>
                    }.into_any()
                }
            }}
        </section>
    }
}
