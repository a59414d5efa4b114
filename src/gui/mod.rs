pub mod actions;
pub mod app;
pub mod message_overlay;
pub mod results;
pub mod steps;
pub mod theme;
pub mod top_bar;

pub use actions::{ActionQueue, UiAction};
