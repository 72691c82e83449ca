use serde::{Deserialize, Serialize};

/// The signed-in user. Supplied by the session, never modified by the client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name_user: String,
    pub email: String,
    /// Identifiers of the task lists this user owns
    #[serde(default)]
    pub todo_lists: Vec<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name_user: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name_user: name_user.into(),
            email: email.into(),
            todo_lists: Vec::new(),
        }
    }
}
