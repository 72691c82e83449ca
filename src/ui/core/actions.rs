use crate::backend::BackendOperation;
use crate::entities::{NewTodo, Todo, TodoList};

/// Messages exchanged between the views and the [`AppComponent`] controller.
///
/// Views return commands (create, update, delete, select, ...). The
/// controller runs the backend call in the background and feeds the outcome
/// back as a result action, which travels through the views again.
///
/// [`AppComponent`]: crate::ui::app_component::AppComponent
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Sidebar commands
    SelectList(TodoList),
    CreateList {
        user_id: String,
        name: String,
        description: String,
    },
    UpdateList(TodoList),
    DeleteList(String),
    Logout,

    // Task commands
    OpenTodoModal(Option<Todo>),
    CloseTodoModal,
    SaveTodo(NewTodo),
    DeleteTodo(String),

    // Results of background operations
    RefreshLists,
    ListsLoaded(Vec<TodoList>),
    ListCreated(TodoList),
    ListUpdated(TodoList),
    ListDeleted(String),
    TodoSaved(Todo),
    TodoDeleted(String),
    OperationFailed {
        operation: BackendOperation,
        error: String,
    },

    // UI operations
    ShowLogs(bool),

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
