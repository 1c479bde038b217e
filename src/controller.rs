//! Page Controllers
//!
//! What the pages do, without the markup: call a gateway, apply the result
//! to the store, report the outcome. Views in `pages` drive these from
//! `spawn_local`; tests drive them with tokio.

use tracing::{debug, info, warn};

use crate::auth::AuthGateway;
use crate::error::{AppError, AppResult};
use crate::gateway::{TodoGateway, TodoQuery};
use crate::models::{NewTodo, Priority, Todo, User};
use crate::store::TodoStore;

/// Matches the backend's `max_length`
pub const MAX_TITLE_LEN: usize = 255;

/// Load state of a page
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    NotFound,
    /// Kept typed so the page can hand it to `AppContext::report`
    Error(AppError),
}

impl<T> PageState<T> {
    pub fn from_result(result: AppResult<T>) -> Self {
        match result {
            Ok(value) => PageState::Ready(value),
            Err(err) if err.is_not_found() => PageState::NotFound,
            Err(err) => PageState::Error(err),
        }
    }
}

/// Create/edit form contents
#[derive(Debug, Clone, PartialEq)]
pub struct TodoForm {
    pub title: String,
    /// Raw 1..=3 value from the form control
    pub priority: u8,
    pub completed: bool,
}

impl Default for TodoForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            priority: Priority::High.as_u8(),
            completed: false,
        }
    }
}

impl TodoForm {
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            priority: todo.priority.as_u8(),
            completed: todo.completed,
        }
    }

    /// Checked input, with the title trimmed
    pub fn validate(&self) -> AppResult<NewTodo> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Title is required".into()));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(AppError::Validation(format!(
                "Title must be at most {} characters",
                MAX_TITLE_LEN
            )));
        }
        let priority = Priority::try_from(self.priority)
            .map_err(|_| AppError::Validation("Priority must be between 1 and 3".into()))?;

        Ok(NewTodo {
            title: title.to_string(),
            priority,
            completed: self.completed,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Login form contents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> AppResult<()> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(AppError::Validation("Please fill in all fields.".into()));
        }
        Ok(())
    }
}

/// Refresh the store from the gateway; `Ready` carries the number of todos
pub async fn load_list(gateway: &dyn TodoGateway, store: TodoStore) -> PageState<usize> {
    let result = gateway.list(&TodoQuery::default()).await.map(|todos| {
        let count = todos.len();
        store.replace_all(todos);
        count
    });
    match &result {
        Ok(count) => debug!(count, "todos loaded"),
        Err(err) => warn!(%err, "loading todos failed"),
    }
    PageState::from_result(result)
}

pub async fn load_todo(gateway: &dyn TodoGateway, id: u32) -> PageState<Todo> {
    let result = gateway.get_by_id(id).await;
    if let Err(err) = &result {
        warn!(id, %err, "loading todo failed");
    }
    PageState::from_result(result)
}

pub async fn create_todo(gateway: &dyn TodoGateway, store: TodoStore, form: &TodoForm) -> AppResult<Todo> {
    let new = form.validate()?;
    let created = gateway.create(&new).await?;
    store.upsert(created.clone());
    info!(id = created.id, "todo created");
    Ok(created)
}

pub async fn update_todo(gateway: &dyn TodoGateway, store: TodoStore, id: u32, form: &TodoForm) -> AppResult<Todo> {
    let checked = form.validate()?;
    let mut todo = Todo::from_new(id, checked);
    // keep server timestamps the store already knows about
    if let Some(existing) = store.get_by_id(id) {
        todo.created_at = existing.created_at;
        todo.updated_at = existing.updated_at;
    }
    let updated = gateway.update(&todo).await?;
    store.upsert(updated.clone());
    info!(id, "todo updated");
    Ok(updated)
}

pub async fn toggle_todo(gateway: &dyn TodoGateway, store: TodoStore, id: u32) -> AppResult<Todo> {
    let toggled = gateway.toggle(id).await?;
    store.upsert(toggled.clone());
    Ok(toggled)
}

pub async fn delete_todo(gateway: &dyn TodoGateway, store: TodoStore, id: u32) -> AppResult<()> {
    gateway.delete(id).await?;
    store.delete(id);
    info!(id, "todo deleted");
    Ok(())
}

pub async fn clear_completed(gateway: &dyn TodoGateway, store: TodoStore) -> AppResult<usize> {
    let removed = gateway.clear_completed().await?;
    store.remove_completed();
    info!(removed, "completed todos cleared");
    Ok(removed)
}

pub async fn submit_login(auth: &AuthGateway, form: &LoginForm) -> AppResult<User> {
    form.validate()?;
    let login = auth.login(form.username.trim(), &form.password).await?;
    Ok(login.user)
}
