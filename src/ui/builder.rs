use std::sync::Arc;

use anyhow::Result;

use super::App;
use super::state::{DEFAULT_TITLE, SessionOutcome};
use super::style::Theme;
use crate::source::SuggestionSource;

/// A small builder for configuring the interactive word search before
/// running it.
pub struct SearchUi {
	source: Arc<dyn SuggestionSource>,
	title: String,
	description: String,
	theme: Option<Theme>,
	log_pane: bool,
}

impl SearchUi {
	pub fn new(source: Arc<dyn SuggestionSource>) -> Self {
		Self {
			source,
			title: DEFAULT_TITLE.to_string(),
			description: String::new(),
			theme: None,
			log_pane: false,
		}
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Select a built-in theme by name. Unknown names keep the current theme.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match super::style::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => log::warn!("unknown theme '{name}', using the default"),
		}
		self
	}

	#[must_use]
	pub fn with_log_pane(mut self, enabled: bool) -> Self {
		self.log_pane = enabled;
		self
	}

	/// Build the [`App`] without entering the terminal.
	pub fn into_app<'a>(self) -> App<'a> {
		let mut app = App::new(self.source);
		app.set_title(self.title);
		app.set_description(self.description);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_log_pane(self.log_pane);
		app
	}

	/// Run the interactive UI until the user quits.
	pub fn run(self) -> Result<SessionOutcome> {
		let mut app = self.into_app();
		app.run()
	}
}

/// Run the interactive UI with default presentation settings.
pub fn run(source: Arc<dyn SuggestionSource>) -> Result<SessionOutcome> {
	SearchUi::new(source).run()
}
