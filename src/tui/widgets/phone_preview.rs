//! Phone-shaped preview pane: the current slide inside a device frame

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::app::state::AppState;
use crate::core::AugmentState;

pub struct PhonePreview<'a> {
    state: &'a AppState,
}

impl<'a> PhonePreview<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for PhonePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frame = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" ▂ ");
        let screen = frame.inner(area);
        frame.render(area, buf);

        match &self.state.course {
            Some(course) => {
                let card_count = course.cards.len();
                let chunks = Layout::vertical([
                    Constraint::Min(4),    // Slide content
                    Constraint::Length(1), // Page indicator dots
                    Constraint::Length(1), // Footer hints
                ])
                .split(screen);

                let index = self.state.navigator.index();
                if index < card_count {
                    render_card(self.state, index, chunks[0], buf);
                } else {
                    render_quiz(self.state, chunks[0], buf);
                }

                render_dots(self.state, chunks[1], buf);
                render_footer(self.state, chunks[2], buf);
            }
            None => render_empty(self.state, screen, buf),
        }
    }
}

fn render_empty(state: &AppState, area: Rect, buf: &mut Buffer) {
    let t = state.t();
    let lines = vec![
        Line::raw(""),
        Line::raw(""),
        Line::from(Span::raw("💡")).centered(),
        Line::raw(""),
        Line::from(Span::styled(
            t.empty_title,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::raw(""),
        Line::from(Span::styled(
            t.empty_subtitle1,
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
        Line::from(Span::styled(
            t.empty_subtitle2,
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ];
    Paragraph::new(lines).render(area, buf);
}

fn render_card(state: &AppState, index: usize, area: Rect, buf: &mut Buffer) {
    let course = state.course.as_ref().expect("card slide requires a course");
    let card = &course.cards[index];
    let t = state.t();

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!(" {}", t.chapter_label(index)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::raw(format!(" {} ", card.emoji)),
            Span::styled(
                card.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
        Line::from(Span::raw(format!(" {}", card.content))),
    ];

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn render_quiz(state: &AppState, area: Rect, buf: &mut Buffer) {
    let course = state.course.as_ref().expect("quiz slide requires a course");
    let quiz = &course.quiz;
    let t = state.t();

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!(" ★ {}", t.quiz_header),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format!(" {}", quiz.question),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];

    for (i, option) in quiz.options.iter().enumerate() {
        let picked = state.quiz_choice == Some(i);
        let revealed = state.quiz_choice.is_some();
        let style = if revealed && i == quiz.correct_index {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if picked {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        let marker = if picked { "▸" } else { " " };
        lines.push(Line::from(Span::styled(
            format!(" {} {}. {}", marker, i + 1, option),
            style,
        )));
    }

    if let Some(choice) = state.quiz_choice {
        lines.push(Line::raw(""));
        let verdict = if choice == quiz.correct_index {
            Span::styled(
                format!(" ✔ {}", t.correct_answer),
                Style::default().fg(Color::Green),
            )
        } else {
            Span::styled(
                format!(" ✖ {}", t.wrong_answer),
                Style::default().fg(Color::Red),
            )
        };
        lines.push(Line::from(verdict));
        lines.push(Line::from(Span::styled(
            format!(" {}: {}", t.explanation, quiz.explanation),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::raw(""));
    lines.push(mind_map_line(state));

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

/// Status line for the augmentation flow on the quiz slide
fn mind_map_line(state: &AppState) -> Line<'static> {
    let t = state.t();
    match state.augment {
        AugmentState::Pending => Line::from(Span::styled(
            format!(" ◌ {}", t.generating_mind_map),
            Style::default().fg(Color::Blue),
        )),
        AugmentState::Ready => Line::from(Span::styled(
            format!(" ❖ {} · [s] {}", t.knowledge_crystal, t.save_to_local),
            Style::default().fg(Color::Cyan),
        )),
        AugmentState::Idle | AugmentState::Failed => Line::from(Span::styled(
            format!(" [m] {}", t.generate_mind_map),
            Style::default().fg(Color::DarkGray),
        )),
    }
}

fn render_dots(state: &AppState, area: Rect, buf: &mut Buffer) {
    let count = state.slide_count();
    let current = state.navigator.index();
    let dots: Vec<Span> = (0..count)
        .map(|i| {
            if i == current {
                Span::styled("━ ", Style::default().fg(Color::White))
            } else {
                Span::styled("· ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    Paragraph::new(Line::from(dots).centered()).render(area, buf);
}

fn render_footer(state: &AppState, area: Rect, buf: &mut Buffer) {
    let t = state.t();
    let hint = if state.on_quiz_slide() {
        format!(" 1-4 answer · [r] {}", t.restart)
    } else {
        " ← → ".to_string()
    };
    Paragraph::new(
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))).centered(),
    )
    .render(area, buf);
}
