/// In-memory store for users and tasks
///
/// The store holds two tables keyed by UUID. Each table remembers insertion
/// order so listings come back in the order records were created. Nothing is
/// persisted; a store lives as long as its owner (the API server's state or a
/// test).
///
/// The store itself is not synchronized. The API server wraps it in a lock
/// and holds that lock for the duration of a single store call.
///
/// # Example
///
/// ```
/// use taskdeck_shared::models::{CreateTask, CreateUser};
/// use taskdeck_shared::store::Store;
///
/// let mut store = Store::new();
/// let alice = store.insert_user(CreateUser { name: "Alice".to_string() });
/// let task = store
///     .insert_task(alice.id, CreateTask { title: "Buy milk".to_string(), description: None })
///     .unwrap();
///
/// let (_, removed) = store.remove_user(alice.id).unwrap();
/// assert_eq!(removed[0].id, task.id);
/// assert_eq!(store.task_count(), 0);
/// ```

use crate::models::{CreateTask, CreateUser, Task, UpdateTask, User};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

/// Store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No user with this ID
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    /// No task with this ID
    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Primary-key table that iterates in insertion order
#[derive(Debug, Clone)]
struct Table<T> {
    rows: HashMap<Uuid, T>,
    order: Vec<Uuid>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    fn insert(&mut self, id: Uuid, row: T) {
        if self.rows.insert(id, row).is_none() {
            self.order.push(id);
        }
    }

    fn get(&self, id: &Uuid) -> Option<&T> {
        self.rows.get(id)
    }

    fn get_mut(&mut self, id: &Uuid) -> Option<&mut T> {
        self.rows.get_mut(id)
    }

    fn contains(&self, id: &Uuid) -> bool {
        self.rows.contains_key(id)
    }

    fn remove(&mut self, id: &Uuid) -> Option<T> {
        let row = self.rows.remove(id)?;
        self.order.retain(|key| key != id);
        Some(row)
    }

    /// Removes every row matching `predicate`, returning them in insertion order
    fn remove_where<F>(&mut self, mut predicate: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        let rows = &mut self.rows;
        let mut removed = Vec::new();

        self.order.retain(|id| {
            if !rows.get(id).is_some_and(|row| predicate(row)) {
                return true;
            }
            removed.extend(rows.remove(id));
            false
        });

        removed
    }

    fn iter(&self) -> impl Iterator<Item = (&Uuid, &T)> {
        self.order
            .iter()
            .filter_map(move |id| self.rows.get(id).map(|row| (id, row)))
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.order.clear();
    }
}

/// Users and tasks held in process memory
#[derive(Debug, Clone, Default)]
pub struct Store {
    users: Table<User>,
    tasks: Table<Task>,
}

impl Store {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a user with a generated ID and returns it
    pub fn insert_user(&mut self, data: CreateUser) -> User {
        let user = User::new(data);
        self.users.insert(user.id, user.clone());
        tracing::debug!(user_id = %user.id, "Inserted user");
        user
    }

    /// Looks up a user by ID
    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.get(&id)
    }

    /// Iterates over all users in creation order
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter().map(|(_, user)| user)
    }

    /// Returns users whose name contains `filter`, ignoring case
    ///
    /// `None` or an empty filter returns every user.
    pub fn search_users(&self, filter: Option<&str>) -> Vec<User> {
        match filter {
            Some(needle) if !needle.is_empty() => self
                .users()
                .filter(|user| user.name_contains(needle))
                .cloned()
                .collect(),
            _ => self.users().cloned().collect(),
        }
    }

    /// Removes a user and every task it owns
    ///
    /// Returns the removed user together with the cascaded tasks.
    pub fn remove_user(&mut self, id: Uuid) -> StoreResult<(User, Vec<Task>)> {
        let user = self.users.remove(&id).ok_or(StoreError::UserNotFound(id))?;
        let tasks = self.tasks.remove_where(|task| task.user_id == id);

        tracing::debug!(
            user_id = %id,
            cascaded = tasks.len(),
            "Removed user and owned tasks"
        );

        Ok((user, tasks))
    }

    /// Creates a task under an existing user
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserNotFound` if `user_id` is unknown.
    pub fn insert_task(&mut self, user_id: Uuid, data: CreateTask) -> StoreResult<Task> {
        if !self.users.contains(&user_id) {
            return Err(StoreError::UserNotFound(user_id));
        }

        let task = Task::new(user_id, data);
        self.tasks.insert(task.id, task.clone());
        tracing::debug!(task_id = %task.id, user_id = %user_id, "Inserted task");
        Ok(task)
    }

    /// Looks up a task by ID
    pub fn task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Iterates over all tasks in creation order, regardless of owner
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().map(|(_, task)| task)
    }

    /// Returns the tasks owned by a user
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserNotFound` if `user_id` is unknown, so callers
    /// can tell "no tasks" apart from "no such user".
    pub fn tasks_for_user(&self, user_id: Uuid) -> StoreResult<Vec<Task>> {
        if !self.users.contains(&user_id) {
            return Err(StoreError::UserNotFound(user_id));
        }

        Ok(self
            .tasks()
            .filter(|task| task.user_id == user_id)
            .cloned()
            .collect())
    }

    /// Applies a partial update to a task and returns the result
    pub fn update_task(&mut self, id: Uuid, data: UpdateTask) -> StoreResult<Task> {
        let task = self.tasks.get_mut(&id).ok_or(StoreError::TaskNotFound(id))?;
        task.apply(data);
        Ok(task.clone())
    }

    /// Removes a single task
    pub fn remove_task(&mut self, id: Uuid) -> StoreResult<Task> {
        self.tasks.remove(&id).ok_or(StoreError::TaskNotFound(id))
    }

    /// Number of stored users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of stored tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Drops every user and task
    pub fn clear(&mut self) {
        self.users.clear();
        self.tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(store: &mut Store, name: &str) -> User {
        store.insert_user(CreateUser {
            name: name.to_string(),
        })
    }

    fn task(store: &mut Store, owner: Uuid, title: &str) -> Task {
        store
            .insert_task(
                owner,
                CreateTask {
                    title: title.to_string(),
                    description: None,
                },
            )
            .unwrap()
    }

    #[test]
    fn test_insert_and_lookup_user() {
        let mut store = Store::new();
        let alice = user(&mut store, "Alice");

        assert_eq!(store.user(alice.id).map(|u| u.name.as_str()), Some("Alice"));
        assert!(store.user(Uuid::new_v4()).is_none());
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn test_users_keep_insertion_order() {
        let mut store = Store::new();
        let names = ["Carol", "Alice", "Bob", "Dave"];
        for name in names {
            user(&mut store, name);
        }

        let listed: Vec<&str> = store.users().map(|u| u.name.as_str()).collect();
        assert_eq!(listed, names);
    }

    #[test]
    fn test_order_survives_removal() {
        let mut store = Store::new();
        let a = user(&mut store, "A");
        user(&mut store, "B");
        user(&mut store, "C");

        store.remove_user(a.id).unwrap();
        user(&mut store, "D");

        let listed: Vec<&str> = store.users().map(|u| u.name.as_str()).collect();
        assert_eq!(listed, ["B", "C", "D"]);
    }

    #[test]
    fn test_cascade_keeps_task_order() {
        let mut store = Store::new();
        let alice = user(&mut store, "Alice");
        let bob = user(&mut store, "Bob");

        for (owner, title) in [(&alice, "a1"), (&bob, "b1"), (&alice, "a2"), (&bob, "b2")] {
            store
                .insert_task(
                    owner.id,
                    CreateTask {
                        title: title.to_string(),
                        description: None,
                    },
                )
                .unwrap();
        }

        let (_, removed) = store.remove_user(alice.id).unwrap();
        let removed: Vec<&str> = removed.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(removed, ["a1", "a2"]);

        let left: Vec<&str> = store.tasks().map(|t| t.title.as_str()).collect();
        assert_eq!(left, ["b1", "b2"]);
        assert_eq!(store.task_count(), 2);
    }

    #[test]
    fn test_search_users_case_insensitive() {
        let mut store = Store::new();
        user(&mut store, "Alice");
        user(&mut store, "Bob");
        user(&mut store, "Malik");

        let hits: Vec<String> = store
            .search_users(Some("ali"))
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(hits, ["Alice", "Malik"]);

        assert_eq!(store.search_users(Some("BOB")).len(), 1);
        assert!(store.search_users(Some("zed")).is_empty());
        assert_eq!(store.search_users(None).len(), 3);
        assert_eq!(store.search_users(Some("")).len(), 3);
    }

    #[test]
    fn test_insert_task_requires_user() {
        let mut store = Store::new();
        let ghost = Uuid::new_v4();

        let err = store
            .insert_task(
                ghost,
                CreateTask {
                    title: "Orphan".to_string(),
                    description: None,
                },
            )
            .unwrap_err();

        assert_eq!(err, StoreError::UserNotFound(ghost));
        assert_eq!(store.task_count(), 0);
    }

    #[test]
    fn test_tasks_for_user_filters_by_owner() {
        let mut store = Store::new();
        let alice = user(&mut store, "Alice");
        let bob = user(&mut store, "Bob");
        task(&mut store, alice.id, "a1");
        task(&mut store, bob.id, "b1");
        task(&mut store, alice.id, "a2");

        let titles: Vec<String> = store
            .tasks_for_user(alice.id)
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["a1", "a2"]);

        assert_eq!(store.tasks().count(), 3);
    }

    #[test]
    fn test_tasks_for_unknown_user_fails() {
        let store = Store::new();
        let id = Uuid::new_v4();

        assert_eq!(store.tasks_for_user(id), Err(StoreError::UserNotFound(id)));
    }

    #[test]
    fn test_remove_user_cascades() {
        let mut store = Store::new();
        let alice = user(&mut store, "Alice");
        let bob = user(&mut store, "Bob");
        let t1 = task(&mut store, alice.id, "Buy milk");
        task(&mut store, alice.id, "Walk dog");
        let kept = task(&mut store, bob.id, "Fix bike");

        let (removed, cascaded) = store.remove_user(alice.id).unwrap();
        assert_eq!(removed.id, alice.id);
        assert_eq!(cascaded.len(), 2);
        assert_eq!(cascaded[0].id, t1.id);

        assert!(store.task(t1.id).is_none());
        assert!(store.tasks().all(|t| t.user_id != alice.id));
        assert_eq!(store.tasks().map(|t| t.id).collect::<Vec<_>>(), [kept.id]);
        assert_eq!(
            store.tasks_for_user(alice.id),
            Err(StoreError::UserNotFound(alice.id))
        );
    }

    #[test]
    fn test_remove_user_twice_fails() {
        let mut store = Store::new();
        let alice = user(&mut store, "Alice");

        assert!(store.remove_user(alice.id).is_ok());
        assert_eq!(
            store.remove_user(alice.id).unwrap_err(),
            StoreError::UserNotFound(alice.id)
        );
    }

    #[test]
    fn test_update_task_is_partial() {
        let mut store = Store::new();
        let alice = user(&mut store, "Alice");
        let t = task(&mut store, alice.id, "Buy milk");

        let updated = store
            .update_task(
                t.id,
                UpdateTask {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, "Buy milk");
        assert_eq!(store.task(t.id), Some(&updated));
    }

    #[test]
    fn test_update_missing_task_fails() {
        let mut store = Store::new();
        let id = Uuid::new_v4();

        assert_eq!(
            store.update_task(id, UpdateTask::default()),
            Err(StoreError::TaskNotFound(id))
        );
    }

    #[test]
    fn test_remove_task() {
        let mut store = Store::new();
        let alice = user(&mut store, "Alice");
        let t = task(&mut store, alice.id, "Buy milk");

        assert_eq!(store.remove_task(t.id).unwrap().id, t.id);
        assert_eq!(store.remove_task(t.id), Err(StoreError::TaskNotFound(t.id)));
        assert_eq!(store.tasks_for_user(alice.id).unwrap(), Vec::new());
    }

    #[test]
    fn test_clear() {
        let mut store = Store::new();
        let alice = user(&mut store, "Alice");
        task(&mut store, alice.id, "Buy milk");

        store.clear();

        assert_eq!(store.user_count(), 0);
        assert_eq!(store.task_count(), 0);
        assert_eq!(store.users().count(), 0);
    }

    #[test]
    fn test_error_display() {
        let id = Uuid::nil();
        assert_eq!(
            StoreError::UserNotFound(id).to_string(),
            format!("User not found: {}", id)
        );
        assert_eq!(
            StoreError::TaskNotFound(id).to_string(),
            format!("Task not found: {}", id)
        );
    }
}
