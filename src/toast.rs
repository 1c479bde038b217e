//! Toast Notifications
//!
//! Short messages for the outcome of a page action. In the browser each
//! toast dismisses itself after a few seconds.

use leptos::prelude::*;

use crate::error::AppError;

#[cfg(target_arch = "wasm32")]
const TOAST_TTL_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    pub fn summary(self) -> &'static str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Info => "Info",
            ToastKind::Error => "Error",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Info => "toast info",
            ToastKind::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub detail: String,
}

/// Visible toasts, provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    /// Last id handed out; ids are never reused
    last_id: StoredValue<u32>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            last_id: StoredValue::new(0),
        }
    }

    /// Tracked
    pub fn items(&self) -> Vec<Toast> {
        self.items.get()
    }

    pub fn push(&self, kind: ToastKind, detail: impl Into<String>) -> u32 {
        let id = self.last_id.with_value(|last| last.wrapping_add(1));
        self.last_id.set_value(id);
        self.items.update(|items| {
            items.push(Toast {
                id,
                kind,
                detail: detail.into(),
            });
        });

        #[cfg(target_arch = "wasm32")]
        {
            let toasts = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                toasts.dismiss(id);
            });
        }

        id
    }

    pub fn success(&self, detail: impl Into<String>) -> u32 {
        self.push(ToastKind::Success, detail)
    }

    pub fn info(&self, detail: impl Into<String>) -> u32 {
        self.push(ToastKind::Info, detail)
    }

    pub fn error(&self, detail: impl Into<String>) -> u32 {
        self.push(ToastKind::Error, detail)
    }

    pub fn error_from(&self, err: &AppError) -> u32 {
        self.error(err.user_message())
    }

    pub fn dismiss(&self, id: u32) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }
}

/// Stack of toasts in the corner of the screen
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.items()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <strong class="toast-summary">{toast.kind.summary()}</strong>
                            <span class="toast-detail">{toast.detail}</span>
                            <button class="toast-close" on:click=move |_| toasts.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let toasts = Toasts::new();

        let first = toasts.success("Saved");
        let second = toasts.error_from(&AppError::NotFound(9));

        let items = toasts.items.get_untracked();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].kind, ToastKind::Error);
        assert_eq!(items[1].detail, "Todo not found");
        assert!(second > first);

        toasts.dismiss(first);
        assert_eq!(toasts.items.get_untracked().len(), 1);
        assert_eq!(toasts.items.get_untracked()[0].id, second);
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let toasts = Toasts::new();

        let first = toasts.info("first");
        toasts.dismiss(first);
        let second = toasts.info("second");

        assert_ne!(first, second);
        // the first toast's timer firing late must leave the new one alone
        toasts.dismiss(first);
        assert_eq!(toasts.items.get_untracked().len(), 1);
        assert_eq!(toasts.items.get_untracked()[0].detail, "second");
    }
}
