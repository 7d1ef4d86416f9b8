//! Bottom status line: key hints and transient notices

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::state::{AppState, PaneFocus};

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().fg(Color::DarkGray);
        let notice_style = Style::default().fg(Color::Yellow);

        let line = if let Some(notice) = &self.state.notice {
            Line::from(Span::styled(format!(" {}", notice), notice_style))
        } else {
            let hints = match self.state.focus {
                PaneFocus::Compose => " Enter generate · ↑↓ history · Tab preview · C-l lang · C-c quit",
                PaneFocus::Preview => " ←→ slides · Esc back · C-l lang · q quit",
            };
            Line::from(Span::styled(hints, dim))
        };

        Paragraph::new(line).render(area, buf);
    }
}
