use crate::constants::{STATE_COMPLETED, STATE_TODO};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unit of work inside a task list.
///
/// `state` is free text. Only [`STATE_COMPLETED`] carries meaning: it is the
/// value whose first appearance at save time stamps `completed_date`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub list_id: String,
    pub name: String,
    pub description: String,
    pub state: String,
    pub due_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
}

/// A task without its identifier: the working draft of the task dialog and
/// the payload handed to the backend on save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub list_id: String,
    pub name: String,
    pub description: String,
    pub state: String,
    pub due_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
}

impl Todo {
    pub fn is_completed(&self) -> bool {
        self.state == STATE_COMPLETED
    }

    /// Attach an identifier to a draft
    pub fn from_new(id: impl Into<String>, new: NewTodo) -> Self {
        Self {
            id: id.into(),
            list_id: new.list_id,
            name: new.name,
            description: new.description,
            state: new.state,
            due_date: new.due_date,
            completed_date: new.completed_date,
        }
    }
}

impl NewTodo {
    /// Empty draft belonging to `list_id`, in the "To Do" state
    pub fn blank(list_id: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            name: String::new(),
            description: String::new(),
            state: STATE_TODO.to_string(),
            due_date: String::new(),
            completed_date: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state == STATE_COMPLETED
    }
}

impl Default for NewTodo {
    fn default() -> Self {
        Self::blank("")
    }
}

impl From<Todo> for NewTodo {
    fn from(todo: Todo) -> Self {
        Self {
            list_id: todo.list_id,
            name: todo.name,
            description: todo.description,
            state: todo.state,
            due_date: todo.due_date,
            completed_date: todo.completed_date,
        }
    }
}
