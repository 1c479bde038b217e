//! Auth Gateway
//!
//! Exchanges credentials for tokens, keeps them in durable storage and
//! mirrors the session into signals for the views.

use std::sync::Arc;

use leptos::prelude::*;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::gateway::http::check_status;
use crate::models::{LoginRequest, LoginResponse, User};
use crate::storage::{KeyValueStorage, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

const DEFAULT_LOGIN_ERROR: &str = "Login failed. Check your credentials.";

/// Reactive view of the current session
#[derive(Clone, Copy)]
pub struct Session {
    pub token: RwSignal<Option<String>>,
    pub current_user: RwSignal<Option<User>>,
}

impl Session {
    fn new(token: Option<String>) -> Self {
        Self {
            token: RwSignal::new(token),
            current_user: RwSignal::new(None),
        }
    }

    /// Tracked: views re-render when the token changes
    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }
}

#[derive(Debug, Deserialize)]
struct LoginErrorBody {
    #[serde(default)]
    error: Option<String>,
}

pub struct AuthGateway {
    client: Client,
    login_url: String,
    storage: Arc<dyn KeyValueStorage>,
    session: Session,
}

impl AuthGateway {
    /// Restores the token left in storage by a previous visit
    pub fn new(api_base_url: &str, storage: Arc<dyn KeyValueStorage>) -> Self {
        let token = storage.get(ACCESS_TOKEN_KEY);
        Self {
            client: Client::new(),
            login_url: format!("{}/auth/login/", api_base_url.trim_end_matches('/')),
            session: Session::new(token),
            storage,
        }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginResponse> {
        let response = self
            .client
            .post(&self.login_url)
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::BAD_REQUEST {
            let body = response.json::<LoginErrorBody>().await.ok();
            let message = body
                .and_then(|body| body.error)
                .unwrap_or_else(|| DEFAULT_LOGIN_ERROR.to_string());
            warn!(username, "login rejected");
            return Err(AppError::InvalidCredentials(message));
        }

        let login: LoginResponse = check_status(response, None)
            .await?
            .json()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))?;

        self.storage.set(ACCESS_TOKEN_KEY, &login.access)?;
        if let Err(err) = self.storage.set(REFRESH_TOKEN_KEY, &login.refresh) {
            // never leave a lone access token behind
            self.storage.remove(ACCESS_TOKEN_KEY);
            return Err(err);
        }
        self.session.token.set(Some(login.access.clone()));
        self.session.current_user.set(Some(login.user.clone()));
        info!(username = %login.user.username, "logged in");
        Ok(login)
    }

    pub fn logout(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.session.token.set(None);
        self.session.current_user.set(None);
        info!("logged out");
    }
}
