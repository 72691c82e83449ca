//! Data model shared by the backend and the UI.
//!
//! Field names follow the external API's camelCase wire form when serialized.

pub mod todo;
pub mod todo_list;
pub mod user;

pub use todo::{NewTodo, Todo};
pub use todo_list::TodoList;
pub use user::User;
