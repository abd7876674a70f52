//! Incremental word search against a Datamuse-style lookup service.
//!
//! The crate is layered bottom-up:
//!
//! - [`lexicon`] builds validated query constraints and decodes responses.
//! - [`transport`] performs the HTTP round-trip.
//! - [`source`] ties both into a [`SuggestionSource`] for one search mode.
//! - [`session`] is the generation-tagged search state machine.
//! - [`ui`] drives the session from a terminal.

pub mod app_dirs;
pub mod lexicon;
pub mod logging;
pub mod session;
pub mod source;
pub mod transport;
pub mod ui;

pub use lexicon::{
	ConstraintBuilder, ConstraintError, LookupError, QueryParams, Relation, SearchMode, WordMatch,
};
pub use session::{Completion, LookupRequest, Phase, SearchSession, SessionEvent};
pub use source::{SearchConfig, Suggester, SuggestionSource};
pub use transport::{HttpLookup, Lookup};
pub use ui::{SearchUi, SessionOutcome, Theme, run};
