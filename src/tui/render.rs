//! Main render/view function (View in TEA pattern)

use ratatui::Frame;

use super::{layout, widgets};
use crate::app::state::AppState;
use crate::core::LoadingState;

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let areas = layout::create(frame.area(), state.show_preview);

    if let Some(compose_area) = areas.compose {
        render_compose(frame, state, compose_area);
    }

    if let Some(preview_area) = areas.preview {
        frame.render_widget(widgets::PhonePreview::new(state), preview_area);
    }
}

fn render_compose(frame: &mut Frame, state: &AppState, area: ratatui::layout::Rect) {
    let areas = layout::compose(area);

    frame.render_widget(widgets::Header::new(state), areas.header);
    frame.render_widget(widgets::Hero::new(state), areas.hero);
    frame.render_widget(widgets::TopicInput::new(state), areas.input);
    frame.render_widget(widgets::TagRow::new(state), areas.tags);

    match state.loading_state {
        LoadingState::Loading => {
            frame.render_widget(widgets::ProgressSteps::new(state), areas.body);
        }
        _ => {
            frame.render_widget(widgets::HistoryList::new(state), areas.body);
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
