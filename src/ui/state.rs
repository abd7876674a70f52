//! State container for the terminal front-end.

use std::sync::Arc;

use serde::Serialize;
use throbber_widgets_tui::ThrobberState;

use super::input::SearchInput;
use super::style::Theme;
use crate::lexicon::WordMatch;
use crate::session::{LookupWorker, SearchSession};
use crate::source::SuggestionSource;

pub const DEFAULT_TITLE: &str = "Phoenician";

/// What the user ended the interaction with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
	pub query: String,
	/// Results of the last committed search, if one was made.
	pub results: Option<Vec<WordMatch>>,
}

/// Aggregate state for one interactive run.
///
/// The [`SearchSession`] is the only thing that decides what is shown; the
/// `App` forwards events into it, hands its lookup requests to the
/// background worker and keeps the input widget in sync with it.
pub struct App<'a> {
	pub(crate) session: SearchSession<Arc<dyn SuggestionSource>>,
	pub(crate) worker: LookupWorker,
	pub search_input: SearchInput<'a>,
	pub(crate) title: String,
	pub(crate) description: String,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) log_pane: bool,
}

impl<'a> App<'a> {
	pub fn new(source: Arc<dyn SuggestionSource>) -> Self {
		let worker = LookupWorker::spawn(Arc::clone(&source));
		let theme = Theme::default();
		Self {
			session: SearchSession::new(source),
			worker,
			search_input: SearchInput::new("").with_placeholder_style(theme.muted_style()),
			title: DEFAULT_TITLE.to_string(),
			description: String::new(),
			theme,
			throbber_state: ThrobberState::default(),
			log_pane: false,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		let text = self.search_input.text().to_string();
		self.search_input = SearchInput::new(text).with_placeholder_style(theme.muted_style());
	}

	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = title.into();
	}

	pub fn set_description(&mut self, description: impl Into<String>) {
		self.description = description.into();
	}

	pub fn set_log_pane(&mut self, enabled: bool) {
		self.log_pane = enabled;
	}

	#[must_use]
	pub fn session(&self) -> &SearchSession<Arc<dyn SuggestionSource>> {
		&self.session
	}

	/// Whether a suggestion lookup for the current input is outstanding.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.worker.pending_generation() == Some(self.session.generation())
	}

	#[must_use]
	pub fn outcome(&self) -> SessionOutcome {
		SessionOutcome {
			query: self.session.input().to_string(),
			results: self.session.committed().map(<[WordMatch]>::to_vec),
		}
	}
}
