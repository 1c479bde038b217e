//! Pages
//!
//! One component per route. Each loads what it needs on entry through the
//! controllers and turns failures into toasts.

mod create_page;
mod detail_page;
mod edit_page;
mod list_page;
mod login_page;

pub use create_page::TodoCreatePage;
pub use detail_page::TodoDetailPage;
pub use edit_page::TodoEditPage;
pub use list_page::TodoListPage;
pub use login_page::LoginPage;

use leptos::prelude::*;

use crate::routing::Route;

/// Shown for ids the backend does not know
#[component]
pub fn NotFoundNotice() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Task not found"</h2>
            <p>"It may have been deleted."</p>
            <a class="btn" href=Route::List.href()>"Back to the list"</a>
        </div>
    }
}
