//! To-Do List App
//!
//! Root component: wires services into context and renders the page for
//! the current route.

use leptos::prelude::*;
use tracing::debug;

use crate::components::NavBar;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{LoginPage, NotFoundNotice, TodoCreatePage, TodoDetailPage, TodoEditPage, TodoListPage};
use crate::routing::{Navigator, Route};
use crate::toast::ToastHost;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    #[cfg(target_arch = "wasm32")]
    let navigator = Navigator::from_location();
    #[cfg(not(target_arch = "wasm32"))]
    let navigator = Navigator::new(Route::List);

    let ctx = AppContext::from_config(&config, navigator);

    // Provide context to all children
    provide_context(ctx);
    provide_context(ctx.store);
    provide_context(ctx.toasts);

    // Back/forward and typed URLs
    #[cfg(target_arch = "wasm32")]
    {
        let handle = window_event_listener(leptos::ev::hashchange, move |_| navigator.sync_from_location());
        on_cleanup(move || handle.remove());
    }

    let page = move || {
        let route = ctx.current_route();
        debug!(?route, "rendering route");
        match route {
            Route::List => view! { <TodoListPage /> }.into_any(),
            Route::Create => view! { <TodoCreatePage /> }.into_any(),
            Route::Detail(id) => view! { <TodoDetailPage id=id /> }.into_any(),
            Route::Edit(id) => view! { <TodoEditPage id=id /> }.into_any(),
            Route::Login => view! { <LoginPage /> }.into_any(),
            Route::MissingTodo => view! { <NotFoundNotice /> }.into_any(),
        }
    };

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {page}
            </main>
            <ToastHost />
        </div>
    }
}
