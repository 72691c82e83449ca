//! Status bar component

use crate::icons::IconService;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// What the status bar reports for the current frame
#[derive(Debug, Clone, Default)]
pub struct StatusInfo<'a> {
    pub loading: bool,
    pub pending_operations: usize,
    /// Description of the longest-running operation
    pub oldest_operation: Option<&'a str>,
    pub last_error: Option<&'a str>,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text and color shown for `info`. Errors win over progress, progress over the key hints.
    pub fn status_text(info: &StatusInfo, icons: &IconService) -> (String, Color) {
        if let Some(error) = info.last_error {
            (format!("{} {}", icons.error(), error), Color::Red)
        } else if info.loading {
            (format!("{} Cargando listas...", icons.info()), Color::Yellow)
        } else if info.pending_operations > 0 {
            let text = match info.oldest_operation {
                Some(oldest) => format!(
                    "{} {} operación(es) en curso: {}",
                    icons.info(),
                    info.pending_operations,
                    oldest
                ),
                None => format!("{} {} operación(es) en curso...", icons.info(), info.pending_operations),
            };
            (text, Color::Yellow)
        } else {
            (
                "A: nueva lista • a: nueva tarea • e: editar • d: borrar • B: barra • r: recargar • G: registro • q: salir"
                    .to_string(),
                Color::Gray,
            )
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, info: &StatusInfo, icons: &IconService) {
        let (status_text, status_color) = Self::status_text(info, icons);

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
