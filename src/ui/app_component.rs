use crate::backend::{BackendOperation, TodoBackend};
use crate::config::Config;
use crate::entities::{Todo, TodoList, User};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::render_logs_dialog;
use crate::ui::components::{SidebarComponent, StatusBar, StatusInfo, TaskListComponent, TodoModal};
use crate::ui::core::{actions::Action, event_handler::EventType, task_manager::TaskManager, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub user: User,
    pub todo_lists: Vec<TodoList>,
    pub selected_list: Option<TodoList>,
    pub last_error: Option<String>,
    pub loading: bool,
    pub show_logs: bool,
    pub logs_scroll: usize,
}

impl AppState {
    pub fn selected_list_id(&self) -> Option<&str> {
        self.selected_list.as_ref().map(|l| l.id.as_str())
    }

    /// Replace the lists, keeping the selection if a list with the same id is still there
    pub fn replace_lists(&mut self, lists: Vec<TodoList>) {
        self.selected_list = self
            .selected_list
            .as_ref()
            .and_then(|selected| lists.iter().find(|l| l.id == selected.id).cloned());
        self.todo_lists = lists;
    }
}

/// Owns the read model and turns view commands into backend calls.
///
/// Every backend call runs on the [`TaskManager`]; its outcome comes back as an
/// action through [`AppComponent::process_background_actions`]. The lists are
/// re-fetched only after a call succeeds.
pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    task_list: TaskListComponent,
    todo_modal: TodoModal,

    // Application state
    state: AppState,
    todo_modal_open: bool,
    editing_todo: Option<Todo>,

    // Services
    backend: Arc<dyn TodoBackend>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    icons: IconService,

    mouse_enabled: bool,
    last_frame: Rect,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(backend: Arc<dyn TodoBackend>, user: User, config: &Config, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let icons = IconService::new(config.ui.icon_theme);

        let mut task_list = TaskListComponent::new();
        task_list.icons = icons.clone();

        Self {
            sidebar: SidebarComponent::new(user.clone(), &config.ui),
            task_list,
            todo_modal: TodoModal::new(),
            state: AppState {
                user,
                ..Default::default()
            },
            todo_modal_open: false,
            editing_todo: None,
            backend,
            task_manager,
            background_action_rx,
            logger,
            icons,
            mouse_enabled: config.ui.mouse_enabled,
            last_frame: Rect::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn sidebar(&self) -> &SidebarComponent {
        &self.sidebar
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn todo_modal(&self) -> &TodoModal {
        &self.todo_modal
    }

    pub fn is_todo_modal_open(&self) -> bool {
        self.todo_modal_open
    }

    pub fn editing_todo(&self) -> Option<&Todo> {
        self.editing_todo.as_ref()
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        self.task_manager.task_count() > 0
    }

    /// Fetch the lists once on startup
    pub fn trigger_initial_load(&mut self) {
        log::info!("App: loading lists for user '{}'", self.state.user.id);
        self.state.loading = true;
        self.schedule_fetch();
    }

    /// Push the read model down to the views
    fn sync_component_data(&mut self) {
        let selected_id = self.state.selected_list_id().map(str::to_string);

        self.sidebar
            .update_data(self.state.user.clone(), self.state.todo_lists.clone(), selected_id.clone());
        self.task_list.update_data(self.state.selected_list.clone());
        self.todo_modal.set_props(
            self.todo_modal_open,
            self.editing_todo.clone(),
            selected_id.as_deref().unwrap_or_default(),
        );
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                log::debug!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::debug!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Char('G') => Action::ShowLogs(true),
            KeyCode::Char('r') => {
                log::debug!("Global key: 'r' - refreshing lists");
                Action::RefreshLists
            }
            _ => Action::None,
        }
    }

    fn handle_logs_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('G') => Action::ShowLogs(false),
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.logs_scroll = self.state.logs_scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.logger.get_logs().len().saturating_sub(1);
                self.state.logs_scroll = (self.state.logs_scroll + 1).min(last);
                Action::None
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            _ => Action::None,
        }
    }

    /// Route a key press: overlays first, then sidebar, task list and global keys
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.state.show_logs {
            return self.handle_logs_key(key);
        }
        if self.todo_modal_open {
            return self.todo_modal.handle_key_events(key);
        }
        if self.sidebar.is_dialog_open() {
            return self.sidebar.handle_key_events(key);
        }

        let sidebar_action = self.sidebar.handle_key_events(key);
        if !sidebar_action.is_none() {
            return sidebar_action;
        }
        let task_list_action = self.task_list.handle_key_events(key);
        if !task_list_action.is_none() {
            return task_list_action;
        }
        self.handle_global_key(key)
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled || self.todo_modal_open || self.state.show_logs {
            return Action::None;
        }

        let (content, _) = LayoutManager::main_layout(self.last_frame);
        let (sidebar_area, main_area) = LayoutManager::content_layout(content, self.sidebar.width());

        if LayoutManager::contains(sidebar_area, mouse.column, mouse.row) {
            self.sidebar.handle_mouse(mouse, sidebar_area)
        } else if LayoutManager::contains(main_area, mouse.column, mouse.row) && !self.sidebar.is_dialog_open() {
            self.task_list.handle_mouse(mouse, main_area)
        } else {
            Action::None
        }
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action).await;
        Ok(())
    }

    /// Run an action through the views and the controller until nothing follows from it
    pub async fn dispatch(&mut self, action: Action) {
        let mut action = action;
        while !action.is_none() {
            let action_for_app = self.update(action);
            action = self.handle_app_action(action_for_app).await;
        }
        self.sync_component_data();
    }

    /// Handle app-level actions. Returns a follow-up action, if any.
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::Logout => {
                log::info!("Session: user '{}' logged out", self.state.user.id);
                self.should_quit = true;
                Action::None
            }
            Action::RefreshLists => {
                self.schedule_fetch();
                Action::None
            }
            Action::SelectList(list) => {
                log::info!("Navigation: selected list '{}' (ID: {})", list.name, list.id);
                self.state.selected_list = Some(list);
                Action::None
            }

            // List commands
            Action::CreateList {
                user_id,
                name,
                description,
            } => {
                log::info!("List: creating '{}'", name);
                let backend = self.backend.clone();
                self.task_manager.spawn_operation(
                    BackendOperation::CreateList,
                    format!("Create list '{}'", name),
                    move || async move {
                        backend
                            .create_todo_list(&user_id, &name, &description)
                            .await
                            .map(Action::ListCreated)
                    },
                );
                Action::None
            }
            Action::UpdateList(list) => {
                log::info!("List: updating ID {} to '{}'", list.id, list.name);
                let backend = self.backend.clone();
                self.task_manager.spawn_operation(
                    BackendOperation::UpdateList,
                    format!("Update list {}", list.id),
                    move || async move {
                        let list_id = list.id.clone();
                        backend.update_todo_list(&list_id, list).await.map(Action::ListUpdated)
                    },
                );
                Action::None
            }
            Action::DeleteList(list_id) => {
                log::info!("List: deleting ID {}", list_id);
                let backend = self.backend.clone();
                self.task_manager.spawn_operation(
                    BackendOperation::DeleteList,
                    format!("Delete list {}", list_id),
                    move || async move {
                        let result = backend.delete_todo_list(&list_id).await;
                        result.map(|()| Action::ListDeleted(list_id))
                    },
                );
                Action::None
            }

            // Task commands
            Action::OpenTodoModal(todo) => {
                if self.state.selected_list.is_none() {
                    log::warn!("Task: no list selected, not opening the task dialog");
                    return Action::None;
                }
                self.todo_modal_open = true;
                self.editing_todo = todo;
                Action::None
            }
            Action::CloseTodoModal => {
                self.todo_modal_open = false;
                self.editing_todo = None;
                Action::None
            }
            Action::SaveTodo(record) => {
                let backend = self.backend.clone();
                match self.editing_todo.take() {
                    Some(existing) => {
                        log::info!("Task: updating ID {} ('{}')", existing.id, record.name);
                        self.task_manager.spawn_operation(
                            BackendOperation::UpdateTodo,
                            format!("Update task {}", existing.id),
                            move || async move { backend.update_todo(&existing.id, record).await.map(Action::TodoSaved) },
                        );
                    }
                    None => {
                        log::info!("Task: creating '{}' in list {}", record.name, record.list_id);
                        self.task_manager.spawn_operation(
                            BackendOperation::CreateTodo,
                            format!("Create task '{}'", record.name),
                            move || async move { backend.create_todo(record).await.map(Action::TodoSaved) },
                        );
                    }
                }
                self.todo_modal_open = false;
                Action::None
            }
            Action::DeleteTodo(todo_id) => {
                log::info!("Task: deleting ID {}", todo_id);
                let backend = self.backend.clone();
                self.task_manager.spawn_operation(
                    BackendOperation::DeleteTodo,
                    format!("Delete task {}", todo_id),
                    move || async move {
                        let result = backend.delete_todo(&todo_id).await;
                        result.map(|()| Action::TodoDeleted(todo_id))
                    },
                );
                Action::None
            }

            // Results
            Action::ListsLoaded(lists) => {
                log::info!("Data: loaded {} lists", lists.len());
                self.state.loading = false;
                self.state.replace_lists(lists);
                Action::None
            }
            Action::ListCreated(list) => {
                log::info!("List: created '{}' (ID: {})", list.name, list.id);
                self.state.last_error = None;
                Action::RefreshLists
            }
            Action::ListUpdated(list) => {
                log::info!("List: updated '{}' (ID: {})", list.name, list.id);
                self.state.last_error = None;
                self.schedule_fetch();
                Action::SelectList(list)
            }
            Action::ListDeleted(list_id) => {
                log::info!("List: deleted ID {}", list_id);
                self.state.last_error = None;
                Action::RefreshLists
            }
            Action::TodoSaved(todo) => {
                log::info!("Task: saved '{}' (ID: {})", todo.name, todo.id);
                self.state.last_error = None;
                Action::RefreshLists
            }
            Action::TodoDeleted(todo_id) => {
                log::info!("Task: deleted ID {}", todo_id);
                self.state.last_error = None;
                Action::RefreshLists
            }
            Action::OperationFailed { operation, error } => {
                log::error!("{} failed: {}", operation, error);
                if operation == BackendOperation::FetchLists {
                    self.state.loading = false;
                }
                self.state.last_error = Some(format!("{}: {}", operation, error));
                Action::None
            }

            Action::ShowLogs(show) => {
                self.state.show_logs = show;
                self.state.logs_scroll = 0;
                Action::None
            }
            Action::None => Action::None,
        }
    }

    fn schedule_fetch(&mut self) {
        let backend = self.backend.clone();
        let user_id = self.state.user.id.clone();
        self.task_manager.spawn_operation(
            BackendOperation::FetchLists,
            format!("Fetch lists for {}", user_id),
            move || async move { backend.fetch_todo_lists(&user_id).await.map(Action::ListsLoaded) },
        );
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received {:?}", action);
            actions.push(action);
        }

        let cleaned = self.task_manager.cleanup_finished_tasks();
        if cleaned > 0 {
            log::debug!("Background: cleaned up {} finished tasks", cleaned);
        }

        actions
    }

    /// Wait for in-flight operations and apply their results, including the
    /// refreshes those results schedule.
    pub async fn wait_for_pending(&mut self) {
        loop {
            self.task_manager.wait_for_all().await;
            let actions = self.process_background_actions();
            if actions.is_empty() {
                break;
            }
            for action in actions {
                self.dispatch(action).await;
            }
        }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Use handle_event for the full routing
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.sidebar.update(action);
        let action = self.task_list.update(action);
        self.todo_modal.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.last_frame = rect;

        let (content, status_area) = LayoutManager::main_layout(rect);
        let (sidebar_area, main_area) = LayoutManager::content_layout(content, self.sidebar.width());

        self.sidebar.render(f, sidebar_area);
        self.task_list.render(f, main_area);

        let info = StatusInfo {
            loading: self.state.loading,
            pending_operations: self.task_manager.task_count(),
            oldest_operation: self.task_manager.oldest_task().map(|task| task.description.as_str()),
            last_error: self.state.last_error.as_deref(),
        };
        StatusBar::render(f, status_area, &info, &self.icons);

        // Overlays on top
        self.sidebar.render_dialog(f, rect);
        self.todo_modal.render(f, rect);
        if self.state.show_logs {
            render_logs_dialog(f, rect, &self.logger.get_logs(), self.state.logs_scroll);
        }
    }
}
