//! Create and update dialogs for task lists.

use super::common::{self, shortcuts, InstructionShortcut};
use crate::constants::{
    ACTION_CREATE, ACTION_UPDATE, DIALOG_CREATE_LIST_TITLE, DIALOG_UPDATE_LIST_TITLE, FIELD_DESCRIPTION, FIELD_NAME,
    FIELD_NEW_DESCRIPTION, FIELD_NEW_NAME,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

/// Field of a list dialog that receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListField {
    #[default]
    Name,
    Description,
}

/// Working draft of a list dialog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListForm {
    pub name: String,
    pub description: String,
    pub focus: ListField,
}

impl ListForm {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            focus: ListField::Name,
        }
    }

    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ListField::Name => &mut self.name,
            ListField::Description => &mut self.description,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            ListField::Name => ListField::Description,
            ListField::Description => ListField::Name,
        };
    }

    /// Apply an editing key (Tab, BackTab, characters, Backspace). Returns whether it was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                true
            }
            _ => common::edit_text(self.focused_mut(), key),
        }
    }
}

/// Which list dialog is being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDialogKind {
    Create,
    Update,
}

pub fn render_list_dialog(f: &mut Frame, area: Rect, kind: ListDialogKind, form: &ListForm) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 12, area);
    f.render_widget(Clear, dialog_area);

    let (title, name_title, description_title, confirm, color) = match kind {
        ListDialogKind::Create => (
            DIALOG_CREATE_LIST_TITLE,
            FIELD_NAME,
            FIELD_DESCRIPTION,
            ACTION_CREATE,
            Color::Green,
        ),
        ListDialogKind::Update => (
            DIALOG_UPDATE_LIST_TITLE,
            FIELD_NEW_NAME,
            FIELD_NEW_DESCRIPTION,
            ACTION_UPDATE,
            Color::Cyan,
        ),
    };

    let main_block = common::create_dialog_block(title, color);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let name = common::create_input_paragraph(&form.name, name_title, form.focus == ListField::Name);
    let description = common::create_input_paragraph(
        &form.description,
        description_title,
        form.focus == ListField::Description,
    );

    let instructions: [InstructionShortcut; 5] = [
        ("Enter", Color::Green, confirm),
        shortcuts::SEPARATOR,
        shortcuts::TAB_NEXT,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ];

    f.render_widget(main_block, dialog_area);
    f.render_widget(name, chunks[0]);
    f.render_widget(description, chunks[1]);
    f.render_widget(common::create_instructions_paragraph(&instructions), chunks[3]);
}
