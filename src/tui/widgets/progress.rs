//! Staged progress display shown while a generation request is in flight
//!
//! Three labelled steps driven by the decorative stage counter: a step is
//! active at its own stage, completed once the counter moves past it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::state::AppState;

pub struct ProgressSteps<'a> {
    state: &'a AppState,
}

impl<'a> ProgressSteps<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for ProgressSteps<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let stage = self.state.progress_stage;
        let mut lines = vec![Line::raw("")];

        for (i, step) in self.state.t().loading_steps.iter().enumerate() {
            let step_stage = (i + 1) as u8;
            let (marker, style) = if stage > step_stage {
                ("●", Style::default().fg(Color::Green))
            } else if stage == step_stage {
                ("◐", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(Color::DarkGray))
            };

            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(marker, style),
                Span::raw(" "),
                Span::styled(*step, style),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
