use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use listerm::backend::{BackendError, BackendOperation, MemoryBackend, TodoBackend};
use listerm::config::Config;
use listerm::logger::Logger;
use listerm::ui::components::SidebarMode;
use listerm::ui::core::{Action, Component, EventType};
use listerm::ui::AppComponent;
use listerm::{NewTodo, Todo, TodoList, User};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;

fn list(id: &str, name: &str, description: &str) -> TodoList {
    TodoList {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        tasks: Vec::new(),
    }
}

fn seeded_backend() -> Arc<MemoryBackend> {
    Arc::new(MemoryBackend::with_lists(
        "u1",
        vec![list("L1", "Casa", "tareas de casa"), list("L2", "Trabajo", "")],
    ))
}

async fn loaded_app(backend: Arc<dyn TodoBackend>) -> AppComponent {
    let user = User::new("u1", "Ana", "ana@example.com");
    let mut app = AppComponent::new(backend, user, &Config::default(), Logger::new());
    app.trigger_initial_load();
    app.wait_for_pending().await;
    app
}

async fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .await
        .unwrap();
}

async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c)).await;
    }
}

async fn select(app: &mut AppComponent, id: &str) {
    let target = app
        .state()
        .todo_lists
        .iter()
        .find(|l| l.id == id)
        .cloned()
        .unwrap();
    app.dispatch(Action::SelectList(target)).await;
}

/// Returns names in upper case, the way a normalizing server might.
struct ShoutingBackend {
    inner: MemoryBackend,
}

#[async_trait]
impl TodoBackend for ShoutingBackend {
    fn backend_type(&self) -> &str {
        "shouting"
    }

    async fn fetch_todo_lists(&self, user_id: &str) -> Result<Vec<TodoList>, BackendError> {
        self.inner.fetch_todo_lists(user_id).await
    }

    async fn create_todo_list(&self, user_id: &str, name: &str, description: &str) -> Result<TodoList, BackendError> {
        self.inner.create_todo_list(user_id, name, description).await
    }

    async fn update_todo_list(&self, list_id: &str, mut list: TodoList) -> Result<TodoList, BackendError> {
        list.name = list.name.to_uppercase();
        self.inner.update_todo_list(list_id, list).await
    }

    async fn delete_todo_list(&self, list_id: &str) -> Result<(), BackendError> {
        self.inner.delete_todo_list(list_id).await
    }

    async fn create_todo(&self, todo: NewTodo) -> Result<Todo, BackendError> {
        self.inner.create_todo(todo).await
    }

    async fn update_todo(&self, todo_id: &str, todo: NewTodo) -> Result<Todo, BackendError> {
        self.inner.update_todo(todo_id, todo).await
    }

    async fn delete_todo(&self, todo_id: &str) -> Result<(), BackendError> {
        self.inner.delete_todo(todo_id).await
    }
}

#[tokio::test]
async fn test_initial_load() {
    let backend = seeded_backend();
    let app = loaded_app(backend.clone()).await;

    assert!(!app.state().loading);
    assert_eq!(app.state().todo_lists.len(), 2);
    assert!(app.state().selected_list.is_none());
    assert_eq!(app.sidebar().todo_lists.len(), 2);
    assert_eq!(backend.calls(BackendOperation::FetchLists), 1);
    assert_eq!(app.active_task_count(), 0);
}

#[tokio::test]
async fn test_create_list_calls_backend_once_and_refreshes() {
    let backend = seeded_backend();
    let mut app = loaded_app(backend.clone()).await;

    press(&mut app, KeyCode::Char('A')).await;
    type_text(&mut app, "Compras").await;
    press(&mut app, KeyCode::Tab).await;
    type_text(&mut app, "semana").await;
    press(&mut app, KeyCode::Enter).await;
    app.wait_for_pending().await;

    assert_eq!(backend.calls(BackendOperation::CreateList), 1);
    assert_eq!(backend.calls(BackendOperation::FetchLists), 2);
    assert_eq!(app.sidebar().mode(), &SidebarMode::Closed);

    let created = app.state().todo_lists.iter().find(|l| l.name == "Compras").unwrap();
    assert_eq!(created.description, "semana");
}

#[tokio::test]
async fn test_double_confirm_creates_twice() {
    let backend = seeded_backend();
    let mut app = loaded_app(backend.clone()).await;

    press(&mut app, KeyCode::Char('A')).await;
    type_text(&mut app, "Compras").await;
    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::Enter).await;
    app.wait_for_pending().await;

    assert_eq!(backend.calls(BackendOperation::CreateList), 2);
    let copies = app.state().todo_lists.iter().filter(|l| l.name == "Compras").count();
    assert_eq!(copies, 2);
    assert_eq!(app.sidebar().mode(), &SidebarMode::Closed);
}

#[tokio::test]
async fn test_blank_create_makes_no_call() {
    let backend = seeded_backend();
    let mut app = loaded_app(backend.clone()).await;

    press(&mut app, KeyCode::Char('A')).await;
    type_text(&mut app, "  ").await;
    press(&mut app, KeyCode::Enter).await;
    app.wait_for_pending().await;

    assert_eq!(backend.calls(BackendOperation::CreateList), 0);
    assert!(app.sidebar().is_dialog_open());
}

#[tokio::test]
async fn test_failed_create_keeps_dialog_and_skips_refresh() {
    let backend = seeded_backend();
    backend.fail_on(BackendOperation::CreateList);
    let mut app = loaded_app(backend.clone()).await;

    press(&mut app, KeyCode::Char('A')).await;
    type_text(&mut app, "Compras").await;
    press(&mut app, KeyCode::Enter).await;
    app.wait_for_pending().await;

    assert_eq!(backend.calls(BackendOperation::CreateList), 1);
    assert_eq!(backend.calls(BackendOperation::FetchLists), 1);
    assert!(matches!(app.sidebar().mode(), SidebarMode::Creating(form) if form.name == "Compras"));
    let error = app.state().last_error.as_deref().unwrap();
    assert!(error.contains("create list"));

    // Retrying by hand after recovery succeeds and clears the error
    backend.recover(BackendOperation::CreateList);
    press(&mut app, KeyCode::Enter).await;
    app.wait_for_pending().await;
    assert!(app.state().last_error.is_none());
    assert_eq!(app.state().todo_lists.len(), 3);
}

#[tokio::test]
async fn test_update_with_empty_name_preserves_original() {
    let backend = seeded_backend();
    let mut app = loaded_app(backend.clone()).await;

    press(&mut app, KeyCode::Char('E')).await;
    for _ in 0.."Casa".len() {
        press(&mut app, KeyCode::Backspace).await;
    }
    press(&mut app, KeyCode::Enter).await;
    app.wait_for_pending().await;

    let snapshot = backend.snapshot().await;
    let stored = &snapshot[0];
    assert_eq!(stored.name, "Casa");
    assert_eq!(stored.description, "tareas de casa");
    assert_eq!(app.sidebar().mode(), &SidebarMode::Closed);
}

#[tokio::test]
async fn test_update_selects_server_record() {
    let backend = Arc::new(ShoutingBackend {
        inner: MemoryBackend::with_lists("u1", vec![list("L1", "Casa", "")]),
    });
    let mut app = loaded_app(backend).await;

    press(&mut app, KeyCode::Char('E')).await;
    type_text(&mut app, " nueva").await;
    press(&mut app, KeyCode::Enter).await;
    app.wait_for_pending().await;

    let selected = app.state().selected_list.as_ref().unwrap();
    assert_eq!(selected.id, "L1");
    assert_eq!(selected.name, "CASA NUEVA");
    assert_eq!(app.sidebar().selected_list_id.as_deref(), Some("L1"));
}

#[tokio::test]
async fn test_delete_selected_list_clears_selection() {
    let backend = seeded_backend();
    let mut app = loaded_app(backend.clone()).await;
    select(&mut app, "L1").await;

    press(&mut app, KeyCode::Char('D')).await;
    app.wait_for_pending().await;

    assert_eq!(backend.calls(BackendOperation::DeleteList), 1);
    assert_eq!(app.state().todo_lists.len(), 1);
    assert!(app.state().selected_list.is_none());
}

#[tokio::test]
async fn test_task_dialog_needs_a_selected_list() {
    let backend = seeded_backend();
    let mut app = loaded_app(backend).await;

    app.dispatch(Action::OpenTodoModal(None)).await;
    assert!(!app.is_todo_modal_open());
}

#[tokio::test]
async fn test_create_then_complete_a_task() {
    let backend = seeded_backend();
    let mut app = loaded_app(backend.clone()).await;
    select(&mut app, "L1").await;

    // Create
    press(&mut app, KeyCode::Char('a')).await;
    assert!(app.is_todo_modal_open());
    assert!(app.todo_modal().is_open());
    type_text(&mut app, "Pan").await;
    press(&mut app, KeyCode::Enter).await;
    assert!(!app.is_todo_modal_open());
    app.wait_for_pending().await;

    assert_eq!(backend.calls(BackendOperation::CreateTodo), 1);
    let tasks = &app.state().selected_list.as_ref().unwrap().tasks;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].name, "Pan");
    assert_eq!(tasks[0].state, "To Do");

    // Edit: move to the state field and complete it
    press(&mut app, KeyCode::Char('e')).await;
    assert_eq!(app.editing_todo().map(|t| t.name.as_str()), Some("Pan"));
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Enter).await;
    app.wait_for_pending().await;

    assert_eq!(backend.calls(BackendOperation::UpdateTodo), 1);
    assert!(app.editing_todo().is_none());
    let task = &app.state().selected_list.as_ref().unwrap().tasks[0];
    assert!(task.is_completed());
    assert!(task.completed_date.is_some());
}

#[tokio::test]
async fn test_failed_save_still_closes_the_modal() {
    let backend = seeded_backend();
    backend.fail_on(BackendOperation::CreateTodo);
    let mut app = loaded_app(backend.clone()).await;
    select(&mut app, "L1").await;

    press(&mut app, KeyCode::Char('a')).await;
    press(&mut app, KeyCode::Enter).await;
    app.wait_for_pending().await;

    assert!(!app.is_todo_modal_open());
    assert!(app.state().last_error.is_some());
    assert_eq!(backend.calls(BackendOperation::FetchLists), 1);
}

#[tokio::test]
async fn test_delete_task() {
    let backend = seeded_backend();
    let mut draft = NewTodo::blank("L2");
    draft.name = "Informe".to_string();
    backend.create_todo(draft).await.unwrap();

    let mut app = loaded_app(backend.clone()).await;
    select(&mut app, "L2").await;
    assert_eq!(app.task_list().get_selected_task().map(|t| t.name.as_str()), Some("Informe"));

    press(&mut app, KeyCode::Char('d')).await;
    app.wait_for_pending().await;

    assert_eq!(backend.calls(BackendOperation::DeleteTodo), 1);
    assert!(app.state().selected_list.as_ref().unwrap().tasks.is_empty());
}

#[tokio::test]
async fn test_escape_closes_task_dialog_without_saving() {
    let backend = seeded_backend();
    let mut app = loaded_app(backend.clone()).await;
    select(&mut app, "L1").await;

    press(&mut app, KeyCode::Char('a')).await;
    type_text(&mut app, "q").await;
    press(&mut app, KeyCode::Esc).await;
    app.wait_for_pending().await;

    assert!(!app.is_todo_modal_open());
    assert!(!app.should_quit());
    assert_eq!(backend.calls(BackendOperation::CreateTodo), 0);
}

#[tokio::test]
async fn test_refresh_key_refetches() {
    let backend = seeded_backend();
    let mut app = loaded_app(backend.clone()).await;

    backend.create_todo_list("u1", "Externa", "").await.unwrap();
    press(&mut app, KeyCode::Char('r')).await;
    app.wait_for_pending().await;

    assert_eq!(backend.calls(BackendOperation::FetchLists), 2);
    assert_eq!(app.state().todo_lists.len(), 3);
}

#[tokio::test]
async fn test_logs_viewer_toggles() {
    let backend = seeded_backend();
    let mut app = loaded_app(backend).await;

    press(&mut app, KeyCode::Char('G')).await;
    assert!(app.state().show_logs);
    // Keys go to the viewer while it is open
    press(&mut app, KeyCode::Char('q')).await;
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Esc).await;
    assert!(!app.state().show_logs);
}

#[tokio::test]
async fn test_quit_and_logout() {
    let backend = seeded_backend();
    let mut app = loaded_app(backend.clone()).await;
    press(&mut app, KeyCode::Char('q')).await;
    assert!(app.should_quit());

    let mut app = loaded_app(backend).await;
    press(&mut app, KeyCode::Char('L')).await;
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_render_and_click_delete_icon() {
    let backend = seeded_backend();
    let mut app = loaded_app(backend.clone()).await;

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();

    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(screen.contains("Listas"));
    assert!(screen.contains("Casa"));
    assert!(screen.contains("Trabajo"));
    assert!(screen.contains("Selecciona una lista"));

    // Sidebar is 30 columns wide: the second list sits on row 5, its delete icon in column 28
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 28,
        row: 5,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_event(EventType::Mouse(click)).await.unwrap();
    app.wait_for_pending().await;

    assert_eq!(backend.calls(BackendOperation::DeleteList), 1);
    assert_eq!(app.state().todo_lists.len(), 1);
    assert_eq!(app.state().todo_lists[0].id, "L1");
    assert!(app.state().selected_list.is_none());
}
