//! Todo Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation
//! goes through a write guard, so views and memos reading the list are
//! notified as soon as the guard drops.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{NewTodo, Todo};

/// Todo list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Current todos, in insertion order
    pub todos: Vec<Todo>,
}

/// Copyable handle to the todo list
#[derive(Clone, Copy)]
pub struct TodoStore {
    state: Store<TodoState>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self::with_todos(Vec::new())
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            state: Store::new(TodoState { todos }),
        }
    }

    /// Snapshot of every todo
    pub fn list(&self) -> Vec<Todo> {
        self.state.todos().get()
    }

    pub fn get_by_id(&self, id: u32) -> Option<Todo> {
        self.state
            .todos()
            .with(|todos| todos.iter().find(|todo| todo.id == id).cloned())
    }

    /// Append a todo with the next free id (`max + 1`, starting at 1)
    pub fn add(&self, new: NewTodo) -> Todo {
        let field = self.state.todos();
        let mut todos = field.write();
        let id = next_id(&todos);
        let todo = Todo::from_new(id, new);
        todos.push(todo.clone());
        todo
    }

    /// Replace the todo with the same id. Never inserts.
    pub fn update(&self, updated: Todo) -> bool {
        let Some(index) = self.position(updated.id) else {
            return false;
        };
        self.state.todos().write()[index] = updated;
        true
    }

    pub fn delete(&self, id: u32) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.state.todos().write().remove(index);
        true
    }

    pub fn toggle_completed(&self, id: u32) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let field = self.state.todos();
        let mut todos = field.write();
        todos[index].completed = !todos[index].completed;
        true
    }

    pub fn completed_count(&self) -> usize {
        self.state
            .todos()
            .with(|todos| todos.iter().filter(|todo| todo.completed).count())
    }

    pub fn total_count(&self) -> usize {
        self.state.todos().with(|todos| todos.len())
    }

    pub fn pending_count(&self) -> usize {
        self.total_count() - self.completed_count()
    }

    /// Swap in a list fetched from the backend
    pub fn replace_all(&self, todos: Vec<Todo>) {
        *self.state.todos().write() = todos;
    }

    /// Apply a todo returned by a gateway: replace it if present, append otherwise
    pub fn upsert(&self, todo: Todo) {
        match self.position(todo.id) {
            Some(index) => self.state.todos().write()[index] = todo,
            None => self.state.todos().write().push(todo),
        }
    }

    /// Drop every completed todo, returning how many were removed
    pub fn remove_completed(&self) -> usize {
        let completed = self
            .state
            .todos()
            .with_untracked(|todos| todos.iter().filter(|todo| todo.completed).count());
        if completed > 0 {
            self.state.todos().write().retain(|todo| !todo.completed);
        }
        completed
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.state
            .todos()
            .with_untracked(|todos| todos.iter().position(|todo| todo.id == id))
    }
}

/// `max + 1`; once the server has handed out `u32::MAX`, the lowest unused id
fn next_id(todos: &[Todo]) -> u32 {
    let max = todos.iter().map(|todo| todo.id).max().unwrap_or(0);
    max.checked_add(1).unwrap_or_else(|| {
        (1..u32::MAX)
            .find(|id| !todos.iter().any(|todo| todo.id == *id))
            .unwrap_or(u32::MAX)
    })
}

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn todo(id: u32, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            priority: Priority::Medium,
            completed,
            created_at: None,
            updated_at: None,
        }
    }

    fn seeded() -> TodoStore {
        TodoStore::with_todos(vec![
            todo(1, "Plan the week", false),
            todo(2, "Review pull requests", true),
            todo(3, "Water the plants", false),
        ])
    }

    #[test]
    fn test_add_assigns_next_id() {
        let store = seeded();

        let created = store.add(NewTodo::new("x", Priority::High));

        assert_eq!(created.id, 4);
        assert_eq!(created.title, "x");
        assert_eq!(store.total_count(), 4);
        assert_eq!(store.list().last(), Some(&created));
    }

    #[test]
    fn test_add_ids_exceed_every_existing_id() {
        let store = TodoStore::with_todos(vec![todo(10, "a", false), todo(3, "b", false)]);

        let first = store.add(NewTodo::new("c", Priority::Low));
        let second = store.add(NewTodo::new("d", Priority::Low));

        assert_eq!(first.id, 11);
        assert_eq!(second.id, 12);
        assert_eq!(store.total_count(), 4);
    }

    #[test]
    fn test_add_after_max_id_reuses_lowest_gap() {
        let store = TodoStore::with_todos(vec![todo(u32::MAX, "server", false), todo(1, "a", false)]);

        let created = store.add(NewTodo::new("b", Priority::Low));

        assert_eq!(created.id, 2);
        assert_eq!(store.total_count(), 3);
    }

    #[test]
    fn test_add_to_empty_store_starts_at_one() {
        let store = TodoStore::new();
        assert_eq!(store.add(NewTodo::new("first", Priority::Medium)).id, 1);
    }

    #[test]
    fn test_get_by_id() {
        let store = seeded();
        assert_eq!(store.get_by_id(2).map(|t| t.title), Some("Review pull requests".to_string()));
        assert_eq!(store.get_by_id(42), None);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let store = seeded();

        let mut changed = todo(2, "Review two pull requests", false);
        changed.priority = Priority::High;
        assert!(store.update(changed.clone()));

        assert_eq!(store.get_by_id(2), Some(changed));
        assert_eq!(store.list()[1].id, 2);
    }

    #[test]
    fn test_update_absent_does_not_insert() {
        let store = seeded();

        assert!(!store.update(todo(99, "ghost", false)));
        assert_eq!(store.total_count(), 3);
        assert_eq!(store.get_by_id(99), None);
    }

    #[test]
    fn test_delete() {
        let store = seeded();

        assert!(store.delete(1));
        assert_eq!(store.total_count(), 2);
        assert_eq!(store.get_by_id(1), None);
    }

    #[test]
    fn test_delete_absent_leaves_list_unchanged() {
        let store = seeded();
        let before = store.list();

        assert!(!store.delete(99));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_toggle_completed() {
        let store = seeded();

        assert!(store.toggle_completed(2));
        assert!(!store.get_by_id(2).unwrap().completed);

        assert!(store.toggle_completed(2));
        assert!(store.get_by_id(2).unwrap().completed);

        assert!(!store.toggle_completed(99));
    }

    #[test]
    fn test_counts() {
        let store = seeded();
        assert_eq!(store.completed_count(), 1);
        assert_eq!(store.total_count(), 3);
        assert_eq!(store.pending_count(), 2);
    }

    #[test]
    fn test_upsert_never_duplicates() {
        let store = seeded();

        store.upsert(todo(3, "Water the garden", true));
        store.upsert(todo(3, "Water the garden", true));
        store.upsert(todo(8, "New from server", false));

        assert_eq!(store.total_count(), 4);
        assert_eq!(store.get_by_id(3).unwrap().title, "Water the garden");
        assert_eq!(store.list().last().unwrap().id, 8);
    }

    #[test]
    fn test_replace_all() {
        let store = seeded();
        store.replace_all(vec![todo(5, "only", false)]);
        assert_eq!(store.list(), vec![todo(5, "only", false)]);
    }

    #[test]
    fn test_remove_completed() {
        let store = seeded();
        assert_eq!(store.remove_completed(), 1);
        assert_eq!(store.completed_count(), 0);
        assert_eq!(store.remove_completed(), 0);
        assert_eq!(store.total_count(), 2);
    }

    #[test]
    fn test_memo_sees_mutations() {
        let store = seeded();
        let total = Memo::new(move |_| store.total_count());
        let done = Memo::new(move |_| store.completed_count());
        assert_eq!(total.get_untracked(), 3);
        assert_eq!(done.get_untracked(), 1);

        store.add(NewTodo::new("x", Priority::High));
        store.toggle_completed(1);

        assert_eq!(total.get_untracked(), 4);
        assert_eq!(done.get_untracked(), 2);
    }
}
