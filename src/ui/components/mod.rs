//! Reusable UI components

// Component architecture
pub mod dialogs;
pub mod sidebar_component;
pub mod status_bar;
pub mod task_list_component;
pub mod todo_modal;

// Component exports
pub use sidebar_component::{SidebarComponent, SidebarHit, SidebarMode};
pub use status_bar::{StatusBar, StatusInfo};
pub use task_list_component::TaskListComponent;
pub use todo_modal::{TodoField, TodoModal};
