//! Recent-exploration list with an optional cursor

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::state::AppState;
use crate::core::LoadingState;

pub struct HistoryList<'a> {
    state: &'a AppState,
}

impl<'a> HistoryList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for HistoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let t = state.t();
        let mut lines = Vec::new();

        // Generation errors land here, above the history
        if state.loading_state == LoadingState::Error {
            if let Some(message) = state.error_message {
                lines.push(Line::from(Span::styled(
                    format!(" ✖ {}", message),
                    Style::default().fg(Color::Red),
                )));
                lines.push(Line::raw(""));
            }
        }

        if state.history.is_empty() {
            Paragraph::new(lines).render(area, buf);
            return;
        }

        lines.push(Line::from(Span::styled(
            format!(" {}", t.recent_explore.to_uppercase()),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )));

        for (i, entry) in state.history.entries().iter().enumerate() {
            let selected = state.history_cursor == Some(i);
            let emoji = entry
                .cards
                .first()
                .map(|c| c.emoji.as_str())
                .unwrap_or("💡");
            let style = if selected {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if selected { "▸" } else { " " };

            lines.push(Line::from(vec![
                Span::styled(format!(" {} {} ", marker, emoji), style),
                Span::styled(entry.topic.clone(), style),
                Span::styled(
                    format!("  3{} · 1{}", t.knowledge_points, t.quiz),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
