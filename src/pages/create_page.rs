//! Todo Create Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TodoFormView;
use crate::context::use_app_context;
use crate::controller::{self, TodoForm};
use crate::routing::Route;

#[component]
pub fn TodoCreatePage() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(TodoForm::default());
    let (submitting, set_submitting) = signal(false);

    let on_submit = Callback::new(move |_| {
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        let current = form.get_untracked();
        spawn_local(async move {
            let gateway = ctx.gateway();
            match controller::create_todo(&*gateway, ctx.store, &current).await {
                Ok(created) => {
                    ctx.toasts.success(format!("Created \"{}\"", created.title));
                    ctx.navigator.navigate(Route::List);
                }
                // Form keeps its contents so the user can retry
                Err(err) => ctx.report(&err),
            }
            set_submitting.set(false);
        });
    });

    view! {
        <section class="page todo-create-page">
            <h1>"New task"</h1>
            <TodoFormView
                form=form
                submitting=submitting
                submit_label="Create"
                on_submit=on_submit
                on_cancel=move |_| ctx.navigator.navigate(Route::List)
            />
        </section>
    }
}
