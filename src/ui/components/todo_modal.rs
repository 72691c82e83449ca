//! Task create/edit dialog.

use crate::constants::{
    ACTION_SAVE, DIALOG_EDIT_TODO_TITLE, DIALOG_NEW_TODO_TITLE, FIELD_DESCRIPTION, FIELD_DUE_DATE, FIELD_STATE,
    FIELD_TODO_NAME, KNOWN_STATES, STATE_COMPLETED,
};
use crate::entities::{NewTodo, Todo};
use crate::ui::components::dialogs::common::{self, shortcuts, InstructionShortcut};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

/// Field of the task dialog that receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoField {
    #[default]
    Name,
    Description,
    State,
    DueDate,
}

impl TodoField {
    const ORDER: [TodoField; 4] = [TodoField::Name, TodoField::Description, TodoField::State, TodoField::DueDate];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Props the controller hands to the dialog on every frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ModalProps {
    is_open: bool,
    initial_data: Option<Todo>,
    list_id: String,
}

/// Dialog for creating or editing a single task.
///
/// The working draft is rebuilt whenever the props change; in between, typed
/// edits persist.
#[derive(Debug, Default)]
pub struct TodoModal {
    props: ModalProps,
    draft: NewTodo,
    focus: TodoField,
}

impl TodoModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the controller's props, resetting the draft if any of them changed
    pub fn set_props(&mut self, is_open: bool, initial_data: Option<Todo>, list_id: &str) {
        let props = ModalProps {
            is_open,
            initial_data,
            list_id: list_id.to_string(),
        };
        if props == self.props {
            return;
        }

        self.draft = match &props.initial_data {
            Some(todo) => NewTodo::from(todo.clone()),
            None => NewTodo::blank(list_id),
        };
        self.focus = TodoField::Name;
        self.props = props;
    }

    pub fn is_open(&self) -> bool {
        self.props.is_open
    }

    pub fn is_editing(&self) -> bool {
        self.props.initial_data.is_some()
    }

    pub fn draft(&self) -> &NewTodo {
        &self.draft
    }

    pub fn focus(&self) -> TodoField {
        self.focus
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            TodoField::Name => &mut self.draft.name,
            TodoField::Description => &mut self.draft.description,
            TodoField::State => &mut self.draft.state,
            TodoField::DueDate => &mut self.draft.due_date,
        }
    }

    /// Step the state field through the known values. Custom text jumps to the first one.
    fn cycle_state(&mut self, forward: bool) {
        let len = KNOWN_STATES.len();
        let next = match KNOWN_STATES.iter().position(|s| *s == self.draft.state) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.draft.state = KNOWN_STATES[next].to_string();
    }

    /// Build the record to save, as of `now`.
    ///
    /// `completed_date` is stamped only on a transition into the completed
    /// state: a new task saved as completed, or an existing one that was not
    /// completed before.
    pub fn save_at(&self, now: DateTime<Utc>) -> Action {
        let mut record = self.draft.clone();
        record.list_id = self.props.list_id.clone();

        let was_completed = self
            .props
            .initial_data
            .as_ref()
            .is_some_and(|todo| todo.state == STATE_COMPLETED);
        if record.state == STATE_COMPLETED && !was_completed {
            record.completed_date = Some(now);
        }

        Action::SaveTodo(record)
    }

    pub fn save(&self) -> Action {
        self.save_at(Utc::now())
    }
}

impl Component for TodoModal {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.props.is_open {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => Action::CloseTodoModal,
            KeyCode::Enter => self.save(),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                Action::None
            }
            KeyCode::Up if self.focus == TodoField::State => {
                self.cycle_state(false);
                Action::None
            }
            KeyCode::Down if self.focus == TodoField::State => {
                self.cycle_state(true);
                Action::None
            }
            _ => {
                common::edit_text(self.focused_mut(), key);
                Action::None
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.props.is_open {
            return;
        }

        let dialog_area = LayoutManager::centered_rect_lines(60, 16, rect);
        f.render_widget(Clear, dialog_area);

        let title = if self.is_editing() {
            DIALOG_EDIT_TODO_TITLE
        } else {
            DIALOG_NEW_TODO_TITLE
        };
        let block = common::create_dialog_block(title, Color::Yellow);
        let inner_area = block.inner(dialog_area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Name
                Constraint::Length(3), // Description
                Constraint::Length(3), // State
                Constraint::Length(3), // Due date
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Instructions
            ])
            .split(inner_area);

        let fields = [
            (TodoField::Name, FIELD_TODO_NAME, &self.draft.name),
            (TodoField::Description, FIELD_DESCRIPTION, &self.draft.description),
            (TodoField::State, FIELD_STATE, &self.draft.state),
            (TodoField::DueDate, FIELD_DUE_DATE, &self.draft.due_date),
        ];

        f.render_widget(block, dialog_area);
        for (chunk, (field, title, value)) in chunks.iter().zip(fields) {
            f.render_widget(common::create_input_paragraph(value, title, self.focus == field), *chunk);
        }

        let instructions: [InstructionShortcut; 7] = [
            ("Enter", Color::Green, ACTION_SAVE),
            shortcuts::SEPARATOR,
            shortcuts::TAB_NEXT,
            shortcuts::SEPARATOR,
            ("↑↓", Color::Cyan, " Estado"),
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ];
        f.render_widget(common::create_instructions_paragraph(&instructions), chunks[5]);
    }
}
