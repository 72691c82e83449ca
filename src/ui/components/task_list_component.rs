use crate::constants::{TASKS_EMPTY, TASKS_NO_LIST, TASKS_TITLE};
use crate::entities::{Todo, TodoList};
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crate::utils::datetime;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct TaskListComponent {
    pub list: Option<TodoList>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub icons: IconService,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            list: None,
            selected_index: 0,
            list_state: ListState::default(),
            icons: IconService::default(),
        }
    }

    /// Show the tasks of `list`, or the empty state when no list is selected
    pub fn update_data(&mut self, list: Option<TodoList>) {
        let switched = self.list.as_ref().map(|l| &l.id) != list.as_ref().map(|l| &l.id);
        self.list = list;
        if switched {
            self.selected_index = 0;
        }
        self.update_list_state();
    }

    fn tasks(&self) -> &[Todo] {
        self.list.as_ref().map(|l| l.tasks.as_slice()).unwrap_or(&[])
    }

    fn update_list_state(&mut self) {
        let len = self.tasks().len();
        if len == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= len {
                self.selected_index = len - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_task(&self) -> Option<&Todo> {
        self.tasks().get(self.selected_index)
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.tasks().len();
        if len == 0 {
            return;
        }
        self.selected_index = if forward {
            (self.selected_index + 1) % len
        } else if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
        self.update_list_state();
    }

    /// Select the clicked row. Rows map to tasks through the list's scroll offset.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return Action::None;
        };
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let inside = mouse.column >= inner.x
            && mouse.column < inner.x + inner.width
            && mouse.row >= inner.y
            && mouse.row < inner.y + inner.height;
        if !inside {
            return Action::None;
        }

        let index = self.list_state.offset() + (mouse.row - inner.y) as usize;
        if index < self.tasks().len() {
            self.selected_index = index;
            self.update_list_state();
        }
        Action::None
    }

    fn create_task_item(&self, task: &Todo) -> ListItem<'static> {
        let mut line_spans = Vec::new();

        let (status_icon, status_style) = if task.is_completed() {
            (self.icons.task_completed(), Style::default().fg(Color::Green))
        } else {
            (self.icons.task_pending(), Style::default().fg(Color::White))
        };
        line_spans.push(Span::styled(format!("{} ", status_icon), status_style));

        let content_style = if task.is_completed() {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::White)
        };
        line_spans.push(Span::styled(task.name.clone(), content_style));

        line_spans.push(Span::raw(" "));
        line_spans.push(Span::styled(format!("[{}]", task.state), Style::default().fg(Color::Cyan)));

        let due = datetime::format_due_date(&task.due_date);
        if !due.is_empty() {
            let due_color = if !task.is_completed() && datetime::is_overdue(&task.due_date, Local::now().date_naive()) {
                Color::Red
            } else {
                Color::Rgb(255, 165, 0) // Orange color
            };
            line_spans.push(Span::raw(" "));
            line_spans.push(Span::styled(
                format!("{} {}", self.icons.due_date(), due),
                Style::default().fg(due_color),
            ));
        }

        if let Some(completed) = task.completed_date.as_ref().filter(|_| task.is_completed()) {
            line_spans.push(Span::raw(" "));
            line_spans.push(Span::styled(
                format!("✓ {}", datetime::format_completed(completed)),
                Style::default().fg(Color::DarkGray),
            ));
        }

        ListItem::new(Line::from(line_spans))
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Char('a') => {
                if self.list.is_some() {
                    Action::OpenTodoModal(None)
                } else {
                    Action::None
                }
            }
            KeyCode::Char('e') | KeyCode::Enter => match self.get_selected_task() {
                Some(task) => Action::OpenTodoModal(Some(task.clone())),
                None => Action::None,
            },
            KeyCode::Char('d') => match self.get_selected_task() {
                Some(task) => Action::DeleteTodo(task.id.clone()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (title, message) = match &self.list {
            None => (TASKS_TITLE.to_string(), Some(TASKS_NO_LIST)),
            Some(list) => {
                let title = format!("{} - {} ({}/{})", TASKS_TITLE, list.name, list.completed_count(), list.tasks.len());
                let message = if list.tasks.is_empty() { Some(TASKS_EMPTY) } else { None };
                (title, message)
            }
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray));

        if let Some(message) = message {
            let paragraph = Paragraph::new(message)
                .block(block)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, rect);
            return;
        }

        let items: Vec<ListItem<'static>> = self.tasks().iter().map(|task| self.create_task_item(task)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
