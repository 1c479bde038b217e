//! Application Context
//!
//! Services and shared state provided via Leptos Context API. Every field is
//! `Copy`, so handlers can capture the whole context freely.

use std::sync::Arc;

use leptos::prelude::*;
use tracing::warn;

use crate::auth::{AuthGateway, Session};
use crate::config::{AppConfig, DataSource};
use crate::controller::PageState;
use crate::error::AppError;
use crate::gateway::{HttpTodoGateway, LocalTodoGateway, TodoGateway};
use crate::routing::{guard, Navigator, Route};
use crate::storage::{BrowserStorage, KeyValueStorage};
use crate::store::TodoStore;
use crate::toast::Toasts;

/// App-wide services and signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Where todo CRUD goes (REST or in-memory)
    gateway: StoredValue<Arc<dyn TodoGateway>>,
    auth: StoredValue<Arc<AuthGateway>>,
    /// Current todos for the views
    pub store: TodoStore,
    pub navigator: Navigator,
    pub toasts: Toasts,
    /// Whether protected routes need a session
    requires_login: bool,
}

impl AppContext {
    pub fn new(
        gateway: Arc<dyn TodoGateway>,
        auth: Arc<AuthGateway>,
        store: TodoStore,
        navigator: Navigator,
        requires_login: bool,
    ) -> Self {
        Self {
            gateway: StoredValue::new(gateway),
            auth: StoredValue::new(auth),
            store,
            navigator,
            toasts: Toasts::new(),
            requires_login,
        }
    }

    /// Wire up browser services for the configured data source
    pub fn from_config(config: &AppConfig, navigator: Navigator) -> Self {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(BrowserStorage);
        let store = TodoStore::new();
        let gateway: Arc<dyn TodoGateway> = match config.data_source {
            DataSource::Remote => Arc::new(HttpTodoGateway::new(&config.api_base_url, storage.clone())),
            DataSource::Local => Arc::new(LocalTodoGateway::seeded(store)),
        };
        let auth = Arc::new(AuthGateway::new(&config.api_base_url, storage));
        Self::new(gateway, auth, store, navigator, config.requires_login())
    }

    pub fn gateway(&self) -> Arc<dyn TodoGateway> {
        self.gateway.get_value()
    }

    pub fn auth(&self) -> Arc<AuthGateway> {
        self.auth.get_value()
    }

    pub fn session(&self) -> Session {
        self.auth.with_value(|auth| auth.session())
    }

    pub fn requires_login(&self) -> bool {
        self.requires_login
    }

    /// Route to render after the login guard. Tracked.
    pub fn current_route(&self) -> Route {
        let route = self.navigator.route();
        if self.requires_login {
            guard(route, self.session().is_authenticated())
        } else {
            route
        }
    }

    /// Show an error to the user; an expired session also goes back to login
    pub fn report(&self, err: &AppError) {
        warn!(%err, "action failed");
        self.toasts.error_from(err);
        if matches!(err, AppError::Unauthorized) && self.requires_login {
            self.auth.with_value(|auth| auth.logout());
            self.navigator.navigate(Route::Login);
        }
    }

    /// Report a failed page load the same way as a failed action
    pub fn report_load<T>(&self, state: &PageState<T>) {
        if let PageState::Error(err) = state {
            self.report(err);
        }
    }

    pub fn logout(&self) {
        self.auth.with_value(|auth| auth.logout());
        self.store.replace_all(Vec::new());
        self.toasts.info("Signed out");
        self.navigator.navigate(Route::Login);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
