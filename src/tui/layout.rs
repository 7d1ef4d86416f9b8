//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Minimum terminal width for showing both panes side by side
pub const MIN_SPLIT_WIDTH: u16 = 96;

/// Visible panes for the current frame
pub struct ScreenAreas {
    pub compose: Option<Rect>,
    pub preview: Option<Rect>,
}

/// Create the main screen layout.
///
/// Wide terminals show the compose pane and the phone-shaped preview side by
/// side; narrow ones show a single pane picked by `show_preview`, mirroring
/// the original's mobile view toggle.
pub fn create(area: Rect, show_preview: bool) -> ScreenAreas {
    if area.width < MIN_SPLIT_WIDTH {
        if show_preview {
            ScreenAreas {
                compose: None,
                preview: Some(area),
            }
        } else {
            ScreenAreas {
                compose: Some(area),
                preview: None,
            }
        }
    } else {
        let chunks = Layout::horizontal([
            Constraint::Percentage(45), // Control center
            Constraint::Percentage(55), // Phone preview
        ])
        .split(area);
        ScreenAreas {
            compose: Some(chunks[0]),
            preview: Some(chunks[1]),
        }
    }
}

/// Sections inside the compose pane
pub struct ComposeAreas {
    pub header: Rect,
    pub hero: Rect,
    pub input: Rect,
    pub tags: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub fn compose(area: Rect) -> ComposeAreas {
    let chunks = Layout::vertical([
        Constraint::Length(2), // Header
        Constraint::Length(5), // Hero
        Constraint::Length(3), // Input
        Constraint::Length(2), // Tags
        Constraint::Min(4),    // Progress / error / history
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ComposeAreas {
        header: chunks[0],
        hero: chunks[1],
        input: chunks[2],
        tags: chunks[3],
        body: chunks[4],
        status: chunks[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_terminal_shows_both_panes() {
        let areas = create(Rect::new(0, 0, 120, 40), false);
        assert!(areas.compose.is_some());
        assert!(areas.preview.is_some());
    }

    #[test]
    fn test_narrow_terminal_shows_one_pane() {
        let areas = create(Rect::new(0, 0, 60, 40), false);
        assert!(areas.compose.is_some());
        assert!(areas.preview.is_none());

        let areas = create(Rect::new(0, 0, 60, 40), true);
        assert!(areas.compose.is_none());
        assert!(areas.preview.is_some());
    }
}
