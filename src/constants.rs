//! Constants used throughout the application
//!
//! This module centralizes UI text, task states and layout values.

// Task states
/// Initial state of a new task
pub const STATE_TODO: &str = "To Do";
/// The only state with special handling: reaching it stamps the completion date
pub const STATE_COMPLETED: &str = "Completed";
/// Values offered when cycling the state field. The field stays free text.
pub const KNOWN_STATES: [&str; 2] = [STATE_TODO, STATE_COMPLETED];

// Sidebar text
pub const SIDEBAR_TITLE: &str = "Listas";
pub const SIDEBAR_NEW_LIST: &str = "Nueva lista";
pub const SIDEBAR_EMPTY: &str = "No hay listas disponibles";
pub const SIDEBAR_LOGOUT: &str = "Cerrar sesión";

// List dialogs
pub const DIALOG_CREATE_LIST_TITLE: &str = "Crear nueva lista";
pub const DIALOG_UPDATE_LIST_TITLE: &str = "Actualizar lista";
pub const FIELD_NAME: &str = "Nombre";
pub const FIELD_DESCRIPTION: &str = "Descripción";
pub const FIELD_NEW_NAME: &str = "Nuevo nombre";
pub const FIELD_NEW_DESCRIPTION: &str = "Nueva descripción";
pub const ACTION_CREATE: &str = " Crear";
pub const ACTION_UPDATE: &str = " Actualizar";
pub const ACTION_CANCEL: &str = " Cancelar";

// Task dialog
pub const DIALOG_NEW_TODO_TITLE: &str = "Nueva Tarea";
pub const DIALOG_EDIT_TODO_TITLE: &str = "Editar Tarea";
pub const FIELD_TODO_NAME: &str = "Nombre de la tarea";
pub const FIELD_STATE: &str = "Estado";
pub const FIELD_DUE_DATE: &str = "Fecha límite";
pub const ACTION_SAVE: &str = " Guardar";

// Task pane
pub const TASKS_TITLE: &str = "Tareas";
pub const TASKS_NO_LIST: &str = "Selecciona una lista";
pub const TASKS_EMPTY: &str = "Esta lista no tiene tareas";

// Log viewer
pub const DIALOG_TITLE_LOGS: &str = "Registro - 'Esc' o 'G' para cerrar";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 30;
/// Default width of the collapsed sidebar
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 7;
/// Minimum collapsed width: borders plus one icon
pub const SIDEBAR_COLLAPSED_MIN_WIDTH: u16 = 5;
/// Columns reserved at the right of a list row for the edit and delete icons
pub const SIDEBAR_ACTION_ICONS_WIDTH: u16 = 4;
