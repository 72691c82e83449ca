//! Core UI functionality for the listerm application.
//!
//! - [`actions`] - Commands and results exchanged between views and the controller
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background backend operations
//!
//! Views implement [`Component`] and turn input into [`Action`]s. The
//! controller executes commands through the [`TaskManager`], whose results
//! come back as actions on a channel and flow through the views again.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
