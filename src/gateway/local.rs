//! Local Todo Gateway
//!
//! Serves the gateway contract straight from the reactive store, for running
//! without a backend. Nothing is persisted.

use async_trait::async_trait;

use super::{TodoGateway, TodoQuery};
use crate::error::{AppError, AppResult};
use crate::models::{NewTodo, Priority, Todo};
use crate::store::TodoStore;

pub struct LocalTodoGateway {
    store: TodoStore,
}

impl LocalTodoGateway {
    fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// Gateway over a store pre-filled with a few sample todos
    pub fn seeded(store: TodoStore) -> Self {
        if store.total_count() == 0 {
            store.add(NewTodo::new("Plan the week", Priority::High));
            store.add(NewTodo {
                completed: true,
                ..NewTodo::new("Review open pull requests", Priority::Medium)
            });
            store.add(NewTodo::new("Water the plants", Priority::Low));
        }
        Self::new(store)
    }
}

#[async_trait(?Send)]
impl TodoGateway for LocalTodoGateway {
    async fn list(&self, query: &TodoQuery) -> AppResult<Vec<Todo>> {
        Ok(query.apply(self.store.list()))
    }

    async fn get_by_id(&self, id: u32) -> AppResult<Todo> {
        self.store.get_by_id(id).ok_or(AppError::NotFound(id))
    }

    async fn create(&self, todo: &NewTodo) -> AppResult<Todo> {
        Ok(self.store.add(todo.clone()))
    }

    async fn update(&self, todo: &Todo) -> AppResult<Todo> {
        if self.store.update(todo.clone()) {
            Ok(todo.clone())
        } else {
            Err(AppError::NotFound(todo.id))
        }
    }

    async fn delete(&self, id: u32) -> AppResult<()> {
        if self.store.delete(id) {
            Ok(())
        } else {
            Err(AppError::NotFound(id))
        }
    }

    async fn toggle(&self, id: u32) -> AppResult<Todo> {
        if !self.store.toggle_completed(id) {
            return Err(AppError::NotFound(id));
        }
        self.store.get_by_id(id).ok_or(AppError::NotFound(id))
    }

    async fn clear_completed(&self) -> AppResult<usize> {
        Ok(self.store.remove_completed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_store() {
        let store = TodoStore::new();
        let gateway = LocalTodoGateway::seeded(store);

        let todos = gateway.list(&TodoQuery::default()).await.unwrap();
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(store.completed_count(), 1);

        // seeding an already populated store is a no-op
        LocalTodoGateway::seeded(store);
        assert_eq!(store.total_count(), 3);
    }

    #[tokio::test]
    async fn test_crud_goes_through_store() {
        let store = TodoStore::new();
        let gateway = LocalTodoGateway::new(store);

        let created = gateway.create(&NewTodo::new("a", Priority::Low)).await.unwrap();
        assert_eq!(store.get_by_id(created.id), Some(created.clone()));

        let toggled = gateway.toggle(created.id).await.unwrap();
        assert!(toggled.completed);

        let mut renamed = toggled.clone();
        renamed.title = "b".into();
        assert_eq!(gateway.update(&renamed).await.unwrap().title, "b");

        gateway.delete(created.id).await.unwrap();
        assert_eq!(store.total_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let gateway = LocalTodoGateway::seeded(TodoStore::new());
        let ghost = Todo::from_new(999, NewTodo::new("ghost", Priority::Low));

        assert_eq!(gateway.get_by_id(999).await, Err(AppError::NotFound(999)));
        assert_eq!(gateway.update(&ghost).await, Err(AppError::NotFound(999)));
        assert_eq!(gateway.delete(999).await, Err(AppError::NotFound(999)));
        assert_eq!(gateway.toggle(999).await, Err(AppError::NotFound(999)));
    }

    #[tokio::test]
    async fn test_clear_completed() {
        let store = TodoStore::new();
        let gateway = LocalTodoGateway::seeded(store);

        assert_eq!(gateway.clear_completed().await, Ok(1));
        assert_eq!(store.total_count(), 2);
    }
}
