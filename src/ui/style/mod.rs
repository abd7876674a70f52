//! Visual styling for the terminal UI.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, names};
