//! listerm - a terminal client for named task lists
//!
//! A collapsible sidebar manages the user's task lists; the main pane shows
//! the tasks of the selected list and a dialog creates or edits them. All
//! persistence goes through a [`backend::TodoBackend`].
//!
//! # Modules
//!
//! * [`backend`] - Backend trait, in-memory implementation and factory
//! * [`config`] - Application configuration management
//! * [`entities`] - Users, task lists and tasks
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Backend abstraction layer
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Domain records exchanged with the backend
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

pub use entities::{NewTodo, Todo, TodoList, User};
