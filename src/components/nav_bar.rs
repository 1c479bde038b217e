//! Navigation Bar Component
//!
//! App title, link back to the list, and the session controls.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routing::Route;

/// Top bar with the signed-in user and logout
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.session();

    let user_label = move || {
        session
            .current_user
            .with(|user| user.as_ref().map(|u| u.display_name()))
            .unwrap_or_else(|| "Signed in".to_string())
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-title" href=Route::List.href()>"To-Do List"</a>
            <Show when=move || ctx.requires_login() && session.is_authenticated()>
                <div class="nav-session">
                    <span class="nav-user">{user_label}</span>
                    <button class="btn small" on:click=move |_| ctx.logout()>"Log out"</button>
                </div>
            </Show>
        </nav>
    }
}
