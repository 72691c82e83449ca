//! Sidebar navigation component for the listerm application.
//!
//! Lists the user's task lists and lets them create, rename, delete and select
//! one. The sidebar never talks to the backend: every change is returned as an
//! [`Action`] for the controller, and the refreshed lists are pushed back in
//! through [`SidebarComponent::update_data`].

use crate::config::UiConfig;
use crate::constants::{SIDEBAR_ACTION_ICONS_WIDTH, SIDEBAR_EMPTY, SIDEBAR_LOGOUT, SIDEBAR_NEW_LIST, SIDEBAR_TITLE};
use crate::entities::{TodoList, User};
use crate::icons::IconService;
use crate::ui::components::dialogs::{self, ListDialogKind, ListForm};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// The sidebar's dialog state. At most one list dialog exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SidebarMode {
    #[default]
    Closed,
    Creating(ListForm),
    Editing { list: TodoList, form: ListForm },
}

/// What a mouse click on the sidebar landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarHit {
    Toggle,
    NewList,
    Select(usize),
    Edit(usize),
    Delete(usize),
    Logout,
    Nothing,
}

/// Rows drawn above the list entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderRow {
    Toggle,
    User,
    NewList,
}

/// Collapsible panel listing the user's task lists.
///
/// Keys (while no dialog is open):
/// - `B` collapse/expand
/// - `A` new list, `E` edit the list under the cursor, `D` delete it
/// - `J`/`K` or Shift+Down/Up move the cursor and select
/// - `L` log out
///
/// Clicking a row selects it; clicking its edit or delete icon runs that
/// action only.
pub struct SidebarComponent {
    pub user: User,
    pub todo_lists: Vec<TodoList>,
    pub selected_list_id: Option<String>,
    pub icons: IconService,
    collapsed: bool,
    open_width: u16,
    collapsed_width: u16,
    mode: SidebarMode,
    /// Name sent by the last create confirm of the open dialog
    submitted_name: Option<String>,
    cursor: usize,
    scroll_offset: usize,
    /// List rows that fit on screen, measured at the last render
    visible_slots: usize,
}

impl SidebarComponent {
    pub fn new(user: User, ui: &UiConfig) -> Self {
        Self {
            user,
            todo_lists: Vec::new(),
            selected_list_id: None,
            icons: IconService::new(ui.icon_theme),
            collapsed: ui.start_collapsed,
            open_width: ui.sidebar_width,
            collapsed_width: ui.collapsed_width,
            mode: SidebarMode::Closed,
            submitted_name: None,
            cursor: 0,
            scroll_offset: 0,
            visible_slots: 0,
        }
    }

    /// Replace the read model shown by the sidebar
    pub fn update_data(&mut self, user: User, todo_lists: Vec<TodoList>, selected_list_id: Option<String>) {
        let selection_changed = selected_list_id != self.selected_list_id;
        self.user = user;
        self.todo_lists = todo_lists;
        self.selected_list_id = selected_list_id;

        if selection_changed {
            if let Some(index) = self.selected_index() {
                self.cursor = index;
            }
        }
        self.cursor = self.cursor.min(self.todo_lists.len().saturating_sub(1));
        self.ensure_cursor_visible();
    }

    pub fn mode(&self) -> &SidebarMode {
        &self.mode
    }

    pub fn is_dialog_open(&self) -> bool {
        self.mode != SidebarMode::Closed
    }

    /// The open dialog's working draft
    pub fn form(&self) -> Option<&ListForm> {
        match &self.mode {
            SidebarMode::Closed => None,
            SidebarMode::Creating(form) | SidebarMode::Editing { form, .. } => Some(form),
        }
    }

    fn form_mut(&mut self) -> Option<&mut ListForm> {
        match &mut self.mode {
            SidebarMode::Closed => None,
            SidebarMode::Creating(form) | SidebarMode::Editing { form, .. } => Some(form),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Current width in columns
    pub fn width(&self) -> u16 {
        if self.collapsed {
            self.collapsed_width
        } else {
            self.open_width
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn toggle_collapse(&mut self) {
        self.collapsed = !self.collapsed;
        log::debug!("Sidebar: {}", if self.collapsed { "collapsed" } else { "expanded" });
    }

    /// Open the create dialog with an empty form
    pub fn open_create(&mut self) {
        self.mode = SidebarMode::Creating(ListForm::default());
        self.submitted_name = None;
    }

    /// Open the update dialog pre-filled from the list at `index`
    pub fn open_edit(&mut self, index: usize) {
        if let Some(list) = self.todo_lists.get(index) {
            self.mode = SidebarMode::Editing {
                form: ListForm::new(list.name.clone(), list.description.clone()),
                list: list.clone(),
            };
        }
    }

    /// Close any dialog, discarding its draft
    pub fn close_dialog(&mut self) {
        self.mode = SidebarMode::Closed;
        self.submitted_name = None;
    }

    /// Confirm the open dialog.
    ///
    /// Creating: a blank (whitespace-only) name yields no command. Editing: an
    /// empty field keeps the list's current value. The dialog stays open until
    /// the matching result action arrives.
    pub fn confirm(&mut self) -> Action {
        match &self.mode {
            SidebarMode::Closed => Action::None,
            SidebarMode::Creating(form) => {
                if form.name.trim().is_empty() {
                    Action::None
                } else {
                    self.submitted_name = Some(form.name.clone());
                    Action::CreateList {
                        user_id: self.user.id.clone(),
                        name: form.name.clone(),
                        description: form.description.clone(),
                    }
                }
            }
            SidebarMode::Editing { list, form } => {
                let updated = TodoList {
                    name: if form.name.is_empty() {
                        list.name.clone()
                    } else {
                        form.name.clone()
                    },
                    description: if form.description.is_empty() {
                        list.description.clone()
                    } else {
                        form.description.clone()
                    },
                    ..list.clone()
                };
                Action::UpdateList(updated)
            }
        }
    }

    /// Select the list at `index`
    pub fn select(&mut self, index: usize) -> Action {
        match self.todo_lists.get(index).cloned() {
            Some(list) => {
                self.cursor = index;
                self.ensure_cursor_visible();
                Action::SelectList(list)
            }
            None => Action::None,
        }
    }

    /// Delete the list at `index`, without confirmation
    pub fn delete(&self, index: usize) -> Action {
        self.todo_lists
            .get(index)
            .map(|list| Action::DeleteList(list.id.clone()))
            .unwrap_or(Action::None)
    }

    fn selected_index(&self) -> Option<usize> {
        let id = self.selected_list_id.as_deref()?;
        self.todo_lists.iter().position(|l| l.id == id)
    }

    fn move_cursor(&mut self, forward: bool) -> Action {
        if self.todo_lists.is_empty() {
            return Action::None;
        }
        let len = self.todo_lists.len();
        let next = if forward {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
        self.select(next)
    }

    fn ensure_cursor_visible(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.visible_slots > 0 && self.cursor >= self.scroll_offset.saturating_add(self.visible_slots) {
            self.scroll_offset = self.cursor + 1 - self.visible_slots;
        }
    }

    fn header_rows(&self) -> &'static [HeaderRow] {
        if self.collapsed {
            &[HeaderRow::Toggle, HeaderRow::NewList]
        } else {
            &[HeaderRow::Toggle, HeaderRow::User, HeaderRow::NewList]
        }
    }

    /// Work out what the cell at (`column`, `row`) of a sidebar drawn in `area` shows.
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> SidebarHit {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        if inner.width == 0 || inner.height == 0 {
            return SidebarHit::Nothing;
        }
        let inside = column >= inner.x && column < inner.x + inner.width && row >= inner.y && row < inner.y + inner.height;
        if !inside {
            return SidebarHit::Nothing;
        }

        let local_row = (row - inner.y) as usize;
        if local_row == inner.height as usize - 1 {
            return SidebarHit::Logout;
        }

        let headers = self.header_rows();
        if let Some(header) = headers.get(local_row) {
            return match header {
                HeaderRow::Toggle => SidebarHit::Toggle,
                HeaderRow::NewList => SidebarHit::NewList,
                HeaderRow::User => SidebarHit::Nothing,
            };
        }

        if self.collapsed {
            return SidebarHit::Nothing;
        }

        let index = self.scroll_offset + (local_row - headers.len());
        if index >= self.todo_lists.len() {
            return SidebarHit::Nothing;
        }

        let icons_start = (inner.x + inner.width).saturating_sub(SIDEBAR_ACTION_ICONS_WIDTH);
        if column >= icons_start {
            // " e x": the first half of the icon area edits, the second half deletes
            if column < icons_start + SIDEBAR_ACTION_ICONS_WIDTH / 2 {
                SidebarHit::Edit(index)
            } else {
                SidebarHit::Delete(index)
            }
        } else {
            SidebarHit::Select(index)
        }
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        if self.is_dialog_open() {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match self.hit_test(area, mouse.column, mouse.row) {
                SidebarHit::Toggle => {
                    self.toggle_collapse();
                    Action::None
                }
                SidebarHit::NewList => {
                    self.open_create();
                    Action::None
                }
                SidebarHit::Select(index) => self.select(index),
                SidebarHit::Edit(index) => {
                    self.open_edit(index);
                    Action::None
                }
                SidebarHit::Delete(index) => self.delete(index),
                SidebarHit::Logout => Action::Logout,
                SidebarHit::Nothing => Action::None,
            },
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown if self.collapsed => Action::None,
            MouseEventKind::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            MouseEventKind::ScrollDown => {
                if self.scroll_offset + 1 < self.todo_lists.len() {
                    self.scroll_offset += 1;
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.close_dialog();
                Action::None
            }
            KeyCode::Enter => self.confirm(),
            _ => {
                if let Some(form) = self.form_mut() {
                    form.handle_key(key);
                }
                Action::None
            }
        }
    }

    /// Draw the open dialog, if any, centered on `area`
    pub fn render_dialog(&self, f: &mut Frame, area: Rect) {
        match &self.mode {
            SidebarMode::Closed => {}
            SidebarMode::Creating(form) => dialogs::render_list_dialog(f, area, ListDialogKind::Create, form),
            SidebarMode::Editing { form, .. } => dialogs::render_list_dialog(f, area, ListDialogKind::Update, form),
        }
    }

    fn header_line(&self, row: HeaderRow, width: usize) -> Line<'static> {
        match row {
            HeaderRow::Toggle => {
                let icon = if self.collapsed {
                    self.icons.menu()
                } else {
                    self.icons.close()
                };
                Line::from(Span::styled(icon.to_string(), Style::default().fg(Color::White)))
            }
            HeaderRow::User => Line::from(Span::styled(
                truncate(&format!("{} {}", self.icons.user(), self.user.name_user), width),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            HeaderRow::NewList => {
                let text = if self.collapsed {
                    self.icons.add().to_string()
                } else {
                    format!("{} {}", self.icons.add(), SIDEBAR_NEW_LIST)
                };
                Line::from(Span::styled(text, Style::default().fg(Color::Green)))
            }
        }
    }

    fn list_line(&self, index: usize, list: &TodoList, width: usize) -> Line<'static> {
        let is_selected = self.selected_list_id.as_deref() == Some(list.id.as_str());
        let prefix_style = if index == self.cursor {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let name_style = if is_selected {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let prefix = Span::styled(format!("{} ", self.icons.list()), prefix_style);
        let name_width = width
            .saturating_sub(SIDEBAR_ACTION_ICONS_WIDTH as usize)
            .saturating_sub(prefix.width());
        let name = truncate(&list.name, name_width);
        let padding = name_width.saturating_sub(Span::raw(name.as_str()).width());

        Line::from(vec![
            prefix,
            Span::styled(format!("{}{}", name, " ".repeat(padding)), name_style),
            Span::styled(format!(" {}", self.icons.edit()), Style::default().fg(Color::Gray)),
            Span::styled(format!(" {}", self.icons.delete()), Style::default().fg(Color::Red)),
        ])
    }
}

/// Shorten `text` to `max` characters, marking the cut with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.is_dialog_open() {
            return self.handle_dialog_key(key);
        }

        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('B') => {
                self.toggle_collapse();
                Action::None
            }
            KeyCode::Char('A') => {
                self.open_create();
                Action::None
            }
            KeyCode::Char('E') => {
                self.open_edit(self.cursor);
                Action::None
            }
            KeyCode::Char('D') => self.delete(self.cursor),
            KeyCode::Char('L') => Action::Logout,
            KeyCode::Char('J') => self.move_cursor(true),
            KeyCode::Down if shift => self.move_cursor(true),
            KeyCode::Char('K') => self.move_cursor(false),
            KeyCode::Up if shift => self.move_cursor(false),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match &action {
            Action::ListCreated(created) => {
                // Only the draft that produced this list is closed
                if matches!(self.mode, SidebarMode::Creating(_))
                    && self.submitted_name.as_deref() == Some(created.name.as_str())
                {
                    self.close_dialog();
                }
            }
            Action::ListUpdated(updated) => {
                if matches!(&self.mode, SidebarMode::Editing { list, .. } if list.id == updated.id) {
                    self.close_dialog();
                }
            }
            Action::SelectList(list) => {
                self.selected_list_id = Some(list.id.clone());
                if let Some(index) = self.selected_index() {
                    self.cursor = index;
                    self.ensure_cursor_visible();
                }
            }
            _ => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        if !self.collapsed {
            block = block
                .title(SIDEBAR_TITLE)
                .title_style(Style::default().fg(Color::White));
        }
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = inner.width as usize;
        let headers = self.header_rows();
        let top_height = inner.height.saturating_sub(1) as usize;

        let mut lines: Vec<Line> = headers
            .iter()
            .take(top_height)
            .map(|row| self.header_line(*row, width))
            .collect();

        if !self.collapsed {
            self.visible_slots = top_height.saturating_sub(headers.len());
            self.ensure_cursor_visible();

            if self.todo_lists.is_empty() {
                lines.push(Line::from(Span::styled(
                    truncate(SIDEBAR_EMPTY, width),
                    Style::default().fg(Color::Gray),
                )));
            } else {
                lines.extend(
                    self.todo_lists
                        .iter()
                        .enumerate()
                        .skip(self.scroll_offset)
                        .take(self.visible_slots)
                        .map(|(index, list)| self.list_line(index, list, width)),
                );
            }
        }

        let top_area = Rect::new(inner.x, inner.y, inner.width, top_height as u16);
        f.render_widget(Paragraph::new(lines), top_area);

        let logout_text = if self.collapsed {
            self.icons.logout().to_string()
        } else {
            format!("{} {}", self.icons.logout(), SIDEBAR_LOGOUT)
        };
        let logout_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        f.render_widget(
            Paragraph::new(Span::styled(logout_text, Style::default().fg(Color::Magenta))),
            logout_area,
        );
    }
}
