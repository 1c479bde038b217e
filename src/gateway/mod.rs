//! Todo Gateways
//!
//! The boundary between pages and wherever todos live. `http` talks to the
//! REST backend; `local` serves the same contract from the in-memory store.

pub(crate) mod http;
mod local;

pub use http::HttpTodoGateway;
pub use local::LocalTodoGateway;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::AppResult;
use crate::models::{NewTodo, Priority, Todo};

/// CRUD operations on todos
///
/// Futures are `?Send`: in the browser they run on the single wasm event
/// loop via `spawn_local`.
#[async_trait(?Send)]
pub trait TodoGateway: Send + Sync {
    /// List todos matching the query
    async fn list(&self, query: &TodoQuery) -> AppResult<Vec<Todo>>;

    /// Fetch one todo; `AppError::NotFound` when absent
    async fn get_by_id(&self, id: u32) -> AppResult<Todo>;

    /// Create a todo, returning it with its assigned id
    async fn create(&self, todo: &NewTodo) -> AppResult<Todo>;

    /// Replace a todo
    async fn update(&self, todo: &Todo) -> AppResult<Todo>;

    async fn delete(&self, id: u32) -> AppResult<()>;

    /// Flip `completed`, returning the updated todo
    async fn toggle(&self, id: u32) -> AppResult<Todo>;

    /// Delete every completed todo, returning how many went away
    async fn clear_completed(&self) -> AppResult<usize>;
}

/// Sort orders the backend accepts in `?ordering=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TodoOrdering {
    #[serde(rename = "priority")]
    Priority,
    #[serde(rename = "-priority")]
    PriorityDesc,
    #[serde(rename = "created_at")]
    Oldest,
    #[serde(rename = "-created_at")]
    Newest,
}

/// Optional list filters, sent as query parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<TodoOrdering>,
}

impl TodoQuery {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        if self.completed.is_some_and(|completed| todo.completed != completed) {
            return false;
        }
        if self.priority.is_some_and(|priority| todo.priority != priority) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                todo.title.to_lowercase().contains(&term.to_lowercase())
            }
            _ => true,
        }
    }

    /// Filter and sort a list the way the backend would
    ///
    /// Todos created locally carry no timestamps; their ids stand in for
    /// creation order.
    pub fn apply(&self, todos: Vec<Todo>) -> Vec<Todo> {
        let mut matching: Vec<Todo> = todos.into_iter().filter(|todo| self.matches(todo)).collect();
        match self.ordering {
            Some(TodoOrdering::Priority) => matching.sort_by_key(|todo| todo.priority.as_u8()),
            Some(TodoOrdering::PriorityDesc) => {
                matching.sort_by_key(|todo| std::cmp::Reverse(todo.priority.as_u8()))
            }
            Some(TodoOrdering::Oldest) => matching.sort_by_key(|todo| (todo.created_at, todo.id)),
            Some(TodoOrdering::Newest) => {
                matching.sort_by_key(|todo| std::cmp::Reverse((todo.created_at, todo.id)))
            }
            None => {}
        }
        matching
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn todo(id: u32, title: &str, priority: Priority, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            priority,
            completed,
            created_at: None,
            updated_at: None,
        }
    }

    fn sample() -> Vec<Todo> {
        vec![
            todo(1, "Write report", Priority::Low, false),
            todo(2, "Call the bank", Priority::High, true),
            todo(3, "Report expenses", Priority::Medium, false),
        ]
    }

    #[test]
    fn test_query_serializes_only_set_filters() {
        let query = TodoQuery {
            completed: Some(false),
            priority: Some(Priority::High),
            ordering: Some(TodoOrdering::Newest),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({ "completed": false, "priority": 1, "ordering": "-created_at" })
        );
        assert!(TodoQuery::default().is_empty());
        assert!(!query.is_empty());
    }

    #[test]
    fn test_apply_filters() {
        let query = TodoQuery {
            completed: Some(false),
            search: Some("REPORT".into()),
            ..Default::default()
        };
        let ids: Vec<u32> = query.apply(sample()).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let blank_search = TodoQuery { search: Some("  ".into()), ..Default::default() };
        assert_eq!(blank_search.apply(sample()).len(), 3);
    }

    #[test]
    fn test_apply_orders() {
        let by_priority = TodoQuery { ordering: Some(TodoOrdering::Priority), ..Default::default() };
        let ids: Vec<u32> = by_priority.apply(sample()).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        let newest = TodoQuery { ordering: Some(TodoOrdering::Newest), ..Default::default() };
        let ids: Vec<u32> = newest.apply(sample()).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
