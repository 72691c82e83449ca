//! Backend abstraction layer.
//!
//! The client never owns durable state: every list and task mutation goes
//! through a [`TodoBackend`], and the lists shown on screen are re-read from
//! it after each successful change.

use crate::entities::{NewTodo, Todo, TodoList};
use async_trait::async_trait;
use std::fmt;

pub mod factory;
pub mod memory;

pub use factory::create_backend;
pub use memory::MemoryBackend;

/// Common error types for backend operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Backend error: {0}")]
    Other(String),
}

/// The calls a backend accepts, used to label results, failures and counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendOperation {
    FetchLists,
    CreateList,
    UpdateList,
    DeleteList,
    CreateTodo,
    UpdateTodo,
    DeleteTodo,
}

impl fmt::Display for BackendOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FetchLists => "fetch lists",
            Self::CreateList => "create list",
            Self::UpdateList => "update list",
            Self::DeleteList => "delete list",
            Self::CreateTodo => "create task",
            Self::UpdateTodo => "update task",
            Self::DeleteTodo => "delete task",
        };
        f.write_str(name)
    }
}

/// Backend trait that every task-list store must implement.
#[async_trait]
pub trait TodoBackend: Send + Sync {
    /// Returns the backend type identifier (e.g., "memory").
    fn backend_type(&self) -> &str;

    /// Re-read the authoritative set of lists owned by `user_id`.
    async fn fetch_todo_lists(&self, user_id: &str) -> Result<Vec<TodoList>, BackendError>;

    // Task lists
    async fn create_todo_list(&self, user_id: &str, name: &str, description: &str) -> Result<TodoList, BackendError>;
    async fn update_todo_list(&self, list_id: &str, list: TodoList) -> Result<TodoList, BackendError>;
    async fn delete_todo_list(&self, list_id: &str) -> Result<(), BackendError>;

    // Tasks
    async fn create_todo(&self, todo: NewTodo) -> Result<Todo, BackendError>;
    async fn update_todo(&self, todo_id: &str, todo: NewTodo) -> Result<Todo, BackendError>;
    async fn delete_todo(&self, todo_id: &str) -> Result<(), BackendError>;
}
