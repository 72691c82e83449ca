//! Dialog building blocks

pub mod common;
pub mod list_dialogs;
pub mod logs_dialog;

pub use list_dialogs::{render_list_dialog, ListDialogKind, ListField, ListForm};
pub use logs_dialog::render_logs_dialog;
