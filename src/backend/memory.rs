//! In-process backend holding task lists in memory.
//!
//! Stands in for the remote service: it assigns identifiers, owns the
//! authoritative copy of every list and can be seeded from a JSON file.
//! Tests use its failure injection and call counters.

use super::{BackendError, BackendOperation, TodoBackend};
use crate::entities::{NewTodo, Todo, TodoList};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Store {
    /// Lists in creation order
    lists: Vec<TodoList>,
    /// list id -> owning user id
    owners: HashMap<String, String>,
}

impl Store {
    fn list_mut(&mut self, list_id: &str) -> Result<&mut TodoList, BackendError> {
        self.lists
            .iter_mut()
            .find(|l| l.id == list_id)
            .ok_or_else(|| BackendError::NotFound(format!("list {}", list_id)))
    }

    fn todo_location(&self, todo_id: &str) -> Option<(usize, usize)> {
        self.lists.iter().enumerate().find_map(|(li, list)| {
            list.tasks
                .iter()
                .position(|t| t.id == todo_id)
                .map(|ti| (li, ti))
        })
    }
}

/// Backend keeping every list in process memory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    store: RwLock<Store>,
    failures: Mutex<HashSet<BackendOperation>>,
    calls: Mutex<HashMap<BackendOperation, usize>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that already holds `lists`, all owned by `user_id`.
    pub fn with_lists(user_id: &str, lists: Vec<TodoList>) -> Self {
        let owners = lists
            .iter()
            .map(|l| (l.id.clone(), user_id.to_string()))
            .collect();
        Self {
            store: RwLock::new(Store { lists, owners }),
            ..Self::default()
        }
    }

    /// Seed from a JSON file containing an array of lists in wire form.
    pub fn from_json_file<P: AsRef<Path>>(path: P, user_id: &str) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read seed file: {}", path.as_ref().display()))?;
        let lists: Vec<TodoList> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse seed file: {}", path.as_ref().display()))?;
        log::info!("Seeded memory backend with {} lists", lists.len());
        Ok(Self::with_lists(user_id, lists))
    }

    /// Make every subsequent call of `operation` fail with [`BackendError::Rejected`].
    pub fn fail_on(&self, operation: BackendOperation) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.insert(operation);
        }
    }

    /// Stop failing `operation`.
    pub fn recover(&self, operation: BackendOperation) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.remove(&operation);
        }
    }

    /// Number of times `operation` was called, failed calls included.
    pub fn calls(&self, operation: BackendOperation) -> usize {
        self.calls
            .lock()
            .map(|calls| calls.get(&operation).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Snapshot of every stored list regardless of owner.
    pub async fn snapshot(&self) -> Vec<TodoList> {
        self.store.read().await.lists.clone()
    }

    fn enter(&self, operation: BackendOperation) -> Result<(), BackendError> {
        if let Ok(mut calls) = self.calls.lock() {
            *calls.entry(operation).or_insert(0) += 1;
        }
        let failing = self
            .failures
            .lock()
            .map(|failures| failures.contains(&operation))
            .unwrap_or(false);
        if failing {
            return Err(BackendError::Rejected(format!("{} refused", operation)));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoBackend for MemoryBackend {
    fn backend_type(&self) -> &str {
        "memory"
    }

    async fn fetch_todo_lists(&self, user_id: &str) -> Result<Vec<TodoList>, BackendError> {
        self.enter(BackendOperation::FetchLists)?;
        let store = self.store.read().await;
        Ok(store
            .lists
            .iter()
            .filter(|l| store.owners.get(&l.id).map(String::as_str) == Some(user_id))
            .cloned()
            .collect())
    }

    async fn create_todo_list(&self, user_id: &str, name: &str, description: &str) -> Result<TodoList, BackendError> {
        self.enter(BackendOperation::CreateList)?;
        if user_id.is_empty() {
            return Err(BackendError::InvalidData("user id is empty".to_string()));
        }
        let list = TodoList {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            tasks: Vec::new(),
        };
        let mut store = self.store.write().await;
        store.owners.insert(list.id.clone(), user_id.to_string());
        store.lists.push(list.clone());
        Ok(list)
    }

    async fn update_todo_list(&self, list_id: &str, list: TodoList) -> Result<TodoList, BackendError> {
        self.enter(BackendOperation::UpdateList)?;
        let mut store = self.store.write().await;
        let stored = store.list_mut(list_id)?;
        // Tasks are owned by the task endpoints; a list update only touches its own fields.
        stored.name = list.name;
        stored.description = list.description;
        Ok(stored.clone())
    }

    async fn delete_todo_list(&self, list_id: &str) -> Result<(), BackendError> {
        self.enter(BackendOperation::DeleteList)?;
        let mut store = self.store.write().await;
        let before = store.lists.len();
        store.lists.retain(|l| l.id != list_id);
        if store.lists.len() == before {
            return Err(BackendError::NotFound(format!("list {}", list_id)));
        }
        store.owners.remove(list_id);
        Ok(())
    }

    async fn create_todo(&self, todo: NewTodo) -> Result<Todo, BackendError> {
        self.enter(BackendOperation::CreateTodo)?;
        let mut store = self.store.write().await;
        let list = store.list_mut(&todo.list_id)?;
        let created = Todo::from_new(Uuid::new_v4().to_string(), todo);
        list.tasks.push(created.clone());
        Ok(created)
    }

    async fn update_todo(&self, todo_id: &str, todo: NewTodo) -> Result<Todo, BackendError> {
        self.enter(BackendOperation::UpdateTodo)?;
        let mut store = self.store.write().await;
        let (li, ti) = store
            .todo_location(todo_id)
            .ok_or_else(|| BackendError::NotFound(format!("task {}", todo_id)))?;
        let updated = Todo::from_new(todo_id, todo);

        if store.lists[li].id == updated.list_id {
            store.lists[li].tasks[ti] = updated.clone();
        } else {
            // Moved to another list
            store.list_mut(&updated.list_id)?;
            store.lists[li].tasks.remove(ti);
            store.list_mut(&updated.list_id)?.tasks.push(updated.clone());
        }
        Ok(updated)
    }

    async fn delete_todo(&self, todo_id: &str) -> Result<(), BackendError> {
        self.enter(BackendOperation::DeleteTodo)?;
        let mut store = self.store.write().await;
        let (li, ti) = store
            .todo_location(todo_id)
            .ok_or_else(|| BackendError::NotFound(format!("task {}", todo_id)))?;
        store.lists[li].tasks.remove(ti);
        Ok(())
    }
}
