//! The incremental search state machine.
//!
//! [`SearchSession`] consumes [`SessionEvent`]s and [`Completion`]s serially.
//! Text edits bump a generation counter and yield a [`LookupRequest`] for the
//! caller to run asynchronously; completions carrying an older generation are
//! dropped when they arrive, so late responses never overwrite newer input.

mod state;
mod worker;


pub use state::{Phase, SessionState};
pub use worker::{LookupCommand, LookupWorker};

use crate::lexicon::{LookupError, WordMatch};
use crate::source::{MIN_QUERY_CHARS, SuggestionSource};

/// Input delivered by the interaction loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
	/// The input widget's text changed to the given value.
	TextChanged(String),
	Up,
	Down,
	/// Autocomplete the selected suggestion.
	Tab,
	/// Commit the current input as a final search.
	Enter,
	/// Leave the result view and resume typing.
	Back,
	Quit,
	Resize,
}

/// A suggestion lookup the caller should resolve off the event thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupRequest {
	pub generation: u64,
	pub query: String,
}

/// Result of a [`LookupRequest`], tagged with the generation that issued it.
#[derive(Debug)]
pub struct Completion {
	pub generation: u64,
	pub outcome: Result<Vec<WordMatch>, LookupError>,
}

impl Completion {
	pub fn new(generation: u64, outcome: Result<Vec<WordMatch>, LookupError>) -> Self {
		Self {
			generation,
			outcome,
		}
	}
}

pub struct SearchSession<S> {
	state: SessionState,
	source: S,
}

impl<S: SuggestionSource> SearchSession<S> {
	pub fn new(source: S) -> Self {
		Self {
			state: SessionState::default(),
			source,
		}
	}

	#[must_use]
	pub fn state(&self) -> &SessionState {
		&self.state
	}

	#[must_use]
	pub fn source(&self) -> &S {
		&self.source
	}

	#[must_use]
	pub fn phase(&self) -> Phase {
		self.state.phase
	}

	#[must_use]
	pub fn input(&self) -> &str {
		&self.state.input
	}

	#[must_use]
	pub fn suggestions(&self) -> &[WordMatch] {
		&self.state.suggestions
	}

	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.state.selected
	}

	#[must_use]
	pub fn selected_word(&self) -> Option<&str> {
		self.state.selected_word()
	}

	#[must_use]
	pub fn committed(&self) -> Option<&[WordMatch]> {
		self.state.committed()
	}

	#[must_use]
	pub fn generation(&self) -> u64 {
		self.state.generation
	}

	#[must_use]
	pub fn is_quitting(&self) -> bool {
		self.state.phase == Phase::Quitting
	}

	/// Apply one input event. Returns the suggestion lookup to issue, if any.
	pub fn handle(&mut self, event: SessionEvent) -> Option<LookupRequest> {
		if self.is_quitting() {
			return None;
		}

		match event {
			SessionEvent::Quit => {
				self.state.phase = Phase::Quitting;
				None
			}
			SessionEvent::TextChanged(text) => match self.state.phase {
				Phase::Typing | Phase::ShowingSuggestions => self.set_input(text),
				Phase::ShowingResults | Phase::Quitting => None,
			},
			SessionEvent::Up => {
				self.move_selection_up();
				None
			}
			SessionEvent::Down => {
				self.move_selection_down();
				None
			}
			SessionEvent::Tab => self.autocomplete(),
			SessionEvent::Enter => {
				self.commit();
				None
			}
			SessionEvent::Back => self.back(),
			SessionEvent::Resize => None,
		}
	}

	/// Merge a finished lookup. Returns `false` when the completion was stale.
	pub fn apply(&mut self, completion: Completion) -> bool {
		if completion.generation != self.state.generation
			|| matches!(
				self.state.phase,
				Phase::ShowingResults | Phase::Quitting
			) {
			log::trace!(
				"dropping stale completion {} (current {})",
				completion.generation,
				self.state.generation
			);
			return false;
		}

		let words = completion.outcome.unwrap_or_else(|err| {
			log::debug!("suggestion lookup failed, showing none: {err}");
			Vec::new()
		});

		if words.is_empty() {
			self.state.clear_suggestions();
			self.state.phase = Phase::Typing;
		} else {
			self.state.suggestions = words;
			self.state.selected = Some(0);
			self.state.phase = Phase::ShowingSuggestions;
		}
		true
	}

	fn set_input(&mut self, text: String) -> Option<LookupRequest> {
		self.state.input = text;
		let generation = self.state.bump_generation();
		let query = self.state.input.trim();

		if query.chars().count() >= MIN_QUERY_CHARS {
			Some(LookupRequest {
				generation,
				query: query.to_string(),
			})
		} else {
			self.state.clear_suggestions();
			self.state.phase = Phase::Typing;
			None
		}
	}

	fn move_selection_up(&mut self) {
		if self.state.phase != Phase::ShowingSuggestions {
			return;
		}
		if let Some(selected) = self.state.selected {
			self.state.selected = Some(selected.saturating_sub(1));
		}
	}

	fn move_selection_down(&mut self) {
		if self.state.phase != Phase::ShowingSuggestions {
			return;
		}
		if let Some(selected) = self.state.selected {
			let last = self.state.suggestions.len().saturating_sub(1);
			self.state.selected = Some((selected + 1).min(last));
		}
	}

	fn autocomplete(&mut self) -> Option<LookupRequest> {
		if self.state.phase != Phase::ShowingSuggestions {
			return None;
		}
		let word = self.state.selected_word()?.to_string();
		self.set_input(word)
	}

	/// Run the final lookup synchronously.
	fn commit(&mut self) {
		if self.state.phase == Phase::ShowingSuggestions {
			if let Some(word) = self.state.selected_word().map(str::to_string) {
				self.state.input = word;
			}
		}

		let query = self.state.input.trim();
		if query.is_empty() {
			return;
		}

		match self.source.resolve(query) {
			Ok(results) => {
				log::info!("'{query}' matched {} words", results.len());
				self.state.committed = Some(results);
				self.state.phase = Phase::ShowingResults;
				// Outstanding suggestion lookups must not reopen the list.
				self.state.clear_suggestions();
				self.state.bump_generation();
			}
			Err(err) => log::warn!("search for '{query}' failed: {err}"),
		}
	}

	fn back(&mut self) -> Option<LookupRequest> {
		if self.state.phase != Phase::ShowingResults {
			return None;
		}
		self.state.committed = None;
		self.state.phase = Phase::Typing;
		self.state.clear_suggestions();
		let input = std::mem::take(&mut self.state.input);
		self.set_input(input)
	}
}
