use crate::lexicon::WordMatch;

/// Coarse view the interaction loop renders from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
	#[default]
	Typing,
	ShowingSuggestions,
	ShowingResults,
	Quitting,
}

/// Mutable state owned by a single [`SearchSession`](super::SearchSession).
///
/// `selected` always indexes `suggestions`, and `committed` is present
/// exactly when `phase` is [`Phase::ShowingResults`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
	pub(super) input: String,
	pub(super) suggestions: Vec<WordMatch>,
	pub(super) selected: Option<usize>,
	pub(super) generation: u64,
	pub(super) committed: Option<Vec<WordMatch>>,
	pub(super) phase: Phase,
}

impl SessionState {
	#[must_use]
	pub fn input(&self) -> &str {
		&self.input
	}

	#[must_use]
	pub fn suggestions(&self) -> &[WordMatch] {
		&self.suggestions
	}

	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	#[must_use]
	pub fn generation(&self) -> u64 {
		self.generation
	}

	#[must_use]
	pub fn committed(&self) -> Option<&[WordMatch]> {
		self.committed.as_deref()
	}

	#[must_use]
	pub fn phase(&self) -> Phase {
		self.phase
	}

	#[must_use]
	pub fn selected_word(&self) -> Option<&str> {
		self.selected
			.and_then(|index| self.suggestions.get(index))
			.map(|item| item.word.as_str())
	}

	pub(super) fn clear_suggestions(&mut self) {
		self.suggestions.clear();
		self.selected = None;
	}

	pub(super) fn bump_generation(&mut self) -> u64 {
		self.generation = self.generation.wrapping_add(1);
		self.generation
	}
}
