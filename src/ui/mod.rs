//! Interactive terminal UI for the word search.
//!
//! The [`builder`] module exposes the public-facing [`SearchUi`] builder. The
//! remaining submodules implement the event loop, key mapping, rendering and
//! the input widget. All search behaviour lives in [`crate::session`]; this
//! layer only translates terminal events and draws what the session reports.

mod actions;
mod builder;
pub mod input;
mod render;
mod runtime;
mod search;
mod state;
pub mod style;

pub use builder::{SearchUi, run};
pub use state::{App, DEFAULT_TITLE, SessionOutcome};
pub use style::Theme;
