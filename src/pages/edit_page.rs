//! Todo Edit Page
//!
//! Loads the todo into the form, saves, then returns to the list after a
//! short pause so the success toast is readable.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TodoFormView;
use crate::context::use_app_context;
use crate::controller::{self, PageState, TodoForm};
use crate::pages::NotFoundNotice;
use crate::routing::Route;

const RETURN_DELAY_MS: u32 = 1_000;

#[component]
pub fn TodoEditPage(id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(TodoForm::default());
    let (state, set_state) = signal(PageState::<()>::Loading);
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            let gateway = ctx.gateway();
            let loaded = controller::load_todo(&*gateway, id).await;
            let next = match loaded {
                PageState::Ready(todo) => {
                    form.set(TodoForm::from_todo(&todo));
                    PageState::Ready(())
                }
                PageState::Error(err) => {
                    ctx.report(&err);
                    PageState::Error(err)
                }
                PageState::NotFound => PageState::NotFound,
                PageState::Loading => PageState::Loading,
            };
            set_state.set(next);
        });
    });

    let on_submit = Callback::new(move |_| {
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        let current = form.get_untracked();
        spawn_local(async move {
            let gateway = ctx.gateway();
            match controller::update_todo(&*gateway, ctx.store, id, &current).await {
                Ok(updated) => {
                    ctx.toasts.success(format!("Saved \"{}\"", updated.title));
                    gloo_timers::future::TimeoutFuture::new(RETURN_DELAY_MS).await;
                    ctx.navigator.navigate(Route::List);
                }
                Err(err) => {
                    ctx.report(&err);
                    set_submitting.set(false);
                }
            }
        });
    });

    view! {
        <section class="page todo-edit-page">
            <h1>"Edit task"</h1>
            {move || match state.get() {
                PageState::Loading => view! { <p class="loading">"Loading task..."</p> }.into_any(),
                PageState::NotFound => view! { <NotFoundNotice /> }.into_any(),
                PageState::Error(err) => view! { <p class="error">{err.user_message()}</p> }.into_any(),
                PageState::Ready(()) => view! {
                    <TodoFormView
                        form=form
                        submitting=submitting
                        submit_label="Save"
                        on_submit=on_submit
                        on_cancel=move |_| ctx.navigator.navigate(Route::Detail(id))
                    />
                }.into_any(),
            }}
        </section>
    }
}
