//! Terminal UI layer

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod widgets;

pub use runner::run;
