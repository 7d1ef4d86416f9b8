//! Index-based cursor over the slide sequence (cards, then the quiz)

/// Cursor over a linear sequence of heterogeneous slides.
///
/// The navigator never throws: `next`/`previous` saturate at the ends. The
/// quiz slide is the only terminal slide; `is_terminal` exposes that
/// boundary so the surrounding controls can swap "advance" for "restart".
#[derive(Debug, Default)]
pub struct SlideNavigator {
    index: usize,
}

impl SlideNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance by one slide, saturating at the last slide.
    pub fn next(&mut self, slide_count: usize) {
        if slide_count > 0 && self.index < slide_count - 1 {
            self.index += 1;
        }
    }

    /// Go back one slide, saturating at the first.
    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Jump back to the first slide. Called whenever a different course
    /// becomes active.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn is_terminal(&self, slide_count: usize) -> bool {
        slide_count > 0 && self.index == slide_count - 1
    }
}
