//! Bounded, deduplicated record of past generations
//!
//! Most-recent-first, capped at 8 entries, unique by exact topic string.
//! Entries are independent snapshots: augmenting the active course never
//! rewrites its history entry. The cache lives and dies with the session.

use crate::core::MicroCourse;

/// Maximum retained history entries
pub const HISTORY_CAPACITY: usize = 8;

#[derive(Debug, Default)]
pub struct HistoryCache {
    entries: Vec<MicroCourse>,
}

impl HistoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly generated course.
    ///
    /// Any existing entry with the same topic (exact, case-sensitive match)
    /// is removed first, then the course is prepended and the list truncated
    /// to capacity. Reading or selecting entries never reorders them.
    pub fn record(&mut self, course: MicroCourse) {
        self.entries.retain(|entry| entry.topic != course.topic);
        self.entries.insert(0, course);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn get(&self, index: usize) -> Option<&MicroCourse> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[MicroCourse] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
