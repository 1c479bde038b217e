//! Frontend Models
//!
//! Data structures matching the REST backend's JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Todo priority, serialized as the backend's integer choice (1, 2, 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    High,
    /// Backend default
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_u8(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Badge colour class
    pub fn severity(self) -> &'static str {
        match self {
            Priority::High => "red",
            Priority::Medium => "yellow",
            Priority::Low => "green",
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            other => Err(format!("priority must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.as_u8()
    }
}

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub priority: Priority,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Todo {
    pub fn from_new(id: u32, new: NewTodo) -> Self {
        Self {
            id,
            title: new.title,
            priority: new.priority,
            completed: new.completed,
            created_at: None,
            updated_at: None,
        }
    }
}

/// A todo that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    pub priority: Priority,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            title: title.into(),
            priority,
            completed: false,
        }
    }
}

/// Authenticated user (matches backend `UserSerializer`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// "First Last", falling back to the username
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of a successful `POST /api/auth/login/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_priority_wire_format() {
        assert_eq!(serde_json::to_value(Priority::High).unwrap(), json!(1));
        assert_eq!(serde_json::from_value::<Priority>(json!(3)).unwrap(), Priority::Low);
        assert!(serde_json::from_value::<Priority>(json!(4)).is_err());
        assert!(serde_json::from_value::<Priority>(json!(0)).is_err());
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::High.label(), "High");
        assert_eq!(Priority::Medium.severity(), "yellow");
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_todo_from_backend_json() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 7,
            "title": "Buy milk",
            "priority": 2,
            "completed": false,
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:30:00Z"
        }))
        .unwrap();

        assert_eq!(todo.id, 7);
        assert_eq!(todo.priority, Priority::Medium);
        assert!(todo.created_at.is_some());
    }

    #[test]
    fn test_todo_without_timestamps() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 1, "title": "x", "priority": 1, "completed": true
        }))
        .unwrap();
        assert_eq!(todo.created_at, None);

        let value = serde_json::to_value(&todo).unwrap();
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_user_display_name() {
        let mut user = User {
            id: 1,
            username: "ana".into(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
        };
        assert_eq!(user.display_name(), "ana");

        user.first_name = "Ana".into();
        user.last_name = "Silva".into();
        assert_eq!(user.display_name(), "Ana Silva");
    }
}
