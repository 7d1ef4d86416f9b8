//! Core domain types shared between the backend client and the app state

pub mod types;

pub use types::{
    AugmentState, CourseCard, LoadingState, MicroCourse, Quiz, CARDS_PER_COURSE, QUIZ_OPTIONS,
};
