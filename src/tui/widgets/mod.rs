//! UI widgets

mod compose;
mod history_list;
mod phone_preview;
mod progress;
mod status_bar;

pub use compose::{Header, Hero, TagRow, TopicInput};
pub use history_list::HistoryList;
pub use phone_preview::PhonePreview;
pub use progress::ProgressSteps;
pub use status_bar::StatusBar;
