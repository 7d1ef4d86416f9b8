//! Compose-pane widgets: header, hero text, topic input, tag shortcuts

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::state::{AppState, PaneFocus};

/// Header displaying the app name and the active language
pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);

        let content = Line::from(vec![
            Span::styled(format!(" ✦ {}", self.state.t().app_name), title),
            Span::raw("   "),
            Span::styled(format!("[{}]", self.state.language), dim),
        ]);

        Paragraph::new(content)
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}

/// Hero section: the two-line title and the tagline
pub struct Hero<'a> {
    state: &'a AppState,
}

impl<'a> Hero<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for Hero<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = self.state.t();
        let accent = Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::Gray);

        let lines = vec![
            Line::from(Span::styled(t.hero_title1, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(t.hero_title2, accent)),
            Line::raw(""),
            Line::from(Span::styled(t.hero_subtitle, dim)),
            Line::from(Span::styled(t.hero_tagline, Style::default().fg(Color::DarkGray))),
        ];

        Paragraph::new(lines).render(area, buf);
    }
}

/// Topic input box with a cursor marker while the compose pane has focus
pub struct TopicInput<'a> {
    state: &'a AppState,
}

impl<'a> TopicInput<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for TopicInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let focused = state.focus == PaneFocus::Compose && state.history_cursor.is_none();

        let border_style = if state.is_loading() {
            Style::default().fg(Color::DarkGray)
        } else if focused {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::Gray)
        };

        let content = if state.topic_input.is_empty() {
            Line::from(Span::styled(
                state.t().input_placeholder,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut spans = vec![Span::raw(state.topic_input.as_str())];
            if focused && !state.is_loading() {
                spans.push(Span::styled("▏", Style::default().fg(Color::Blue)));
            }
            Line::from(spans)
        };

        Paragraph::new(content)
            .block(Block::default().borders(Borders::ALL).border_style(border_style))
            .render(area, buf);
    }
}

/// Suggested topic tags with their Alt+n shortcuts
pub struct TagRow<'a> {
    state: &'a AppState,
}

impl<'a> TagRow<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for TagRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key = Style::default().fg(Color::Yellow);
        let dim = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::new();
        for (i, tag) in self.state.t().tags.iter().enumerate() {
            spans.push(Span::styled(format!(" M-{}", i + 1), key));
            spans.push(Span::styled(format!(" {}  ", tag), dim));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
