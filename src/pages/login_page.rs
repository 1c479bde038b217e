//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::controller::{self, LoginForm};
use crate::routing::Route;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(LoginForm::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        if let Err(err) = current.validate() {
            set_error.set(Some(err.user_message()));
            return;
        }
        set_error.set(None);
        set_loading.set(true);
        spawn_local(async move {
            let auth = ctx.auth();
            match controller::submit_login(&auth, &current).await {
                Ok(user) => {
                    ctx.toasts.success(format!("Welcome, {}", user.display_name()));
                    ctx.navigator.navigate(Route::List);
                }
                Err(err) => {
                    form.update(|f| f.password.clear());
                    set_error.set(Some(err.user_message()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <section class="page login-page">
            <h1>"Sign in"</h1>
            <form class="login-form" on:submit=submit>
                <label for="login-username">"Username"</label>
                <input
                    id="login-username"
                    type="text"
                    autocomplete="username"
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />

                <label for="login-password">"Password"</label>
                <input
                    id="login-password"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <button type="submit" class="btn primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </section>
    }
}
