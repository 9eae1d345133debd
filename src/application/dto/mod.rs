mod screen_view;

pub use screen_view::{ScreenView, Transition};
