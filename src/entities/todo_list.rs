use super::todo::Todo;
use serde::{Deserialize, Serialize};

/// A named, described container of tasks owned by a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tasks: Vec<Todo>,
}

impl TodoList {
    /// Number of tasks whose state is "Completed"
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }
}
