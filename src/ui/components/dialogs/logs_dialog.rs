//! Log viewer overlay

use crate::constants::DIALOG_TITLE_LOGS;
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Render the newest-first log buffer starting at `scroll_offset`
pub fn render_logs_dialog(frame: &mut Frame, area: Rect, logs: &[String], scroll_offset: usize) {
    // Take 80% of the screen
    let modal_width = area.width.saturating_mul(8) / 10;
    let modal_height = area.height.saturating_mul(8) / 10;
    let modal_area = Rect {
        x: area.x + (area.width.saturating_sub(modal_width)) / 2,
        y: area.y + (area.height.saturating_sub(modal_height)) / 2,
        width: modal_width,
        height: modal_height,
    };

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(DIALOG_TITLE_LOGS)
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black))
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, modal_area);

    let inner_area = modal_area.inner(Margin {
        vertical: 1,
        horizontal: 1,
    });

    if logs.is_empty() {
        let no_logs = Paragraph::new("Sin registros")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        frame.render_widget(no_logs, inner_area);
        return;
    }

    let start_index = scroll_offset.min(logs.len().saturating_sub(1));
    let items: Vec<ListItem> = logs
        .iter()
        .skip(start_index)
        .take(inner_area.height as usize)
        .map(|log| {
            let style = if log.contains("ERROR") {
                Style::default().fg(Color::Red)
            } else if log.contains("WARN") {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };

            match log.find("] ") {
                Some(bracket_end) => ListItem::new(Line::from(vec![
                    Span::styled(log[..bracket_end + 2].to_string(), Style::default().fg(Color::DarkGray)),
                    Span::styled(log[bracket_end + 2..].to_string(), style),
                ])),
                None => ListItem::new(Line::from(Span::styled(log.clone(), style))),
            }
        })
        .collect();

    frame.render_widget(List::new(items), inner_area);
}
