use thiserror::Error;

use super::constraint::{MAX_LIMIT, MAX_TOPICS};

/// Rejected constraint parameters. Raised before any lookup is attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstraintError {
	/// `RelatesLike` was chosen without a concrete relation.
	#[error("a relation code is required when searching with the relates-like constraint")]
	RelationRequired,

	/// The requested result count is outside `1..=1000`.
	#[error("result limit {0} is out of range, expected 1 to {MAX_LIMIT}")]
	LimitOutOfRange(u32),

	/// More topics were supplied than the service accepts.
	#[error("{0} topics specified, the maximum is {MAX_TOPICS}")]
	TooManyTopics(usize),
}

/// Failures surfaced while resolving suggestions.
#[derive(Debug, Error)]
pub enum LookupError {
	#[error(transparent)]
	Validation(#[from] ConstraintError),

	/// The relation code does not name one of the known relations.
	#[error("invalid relation code '{0}'")]
	InvalidRelation(String),

	/// The transport failed to reach the service or got a failing status.
	#[error("lookup request failed: {0}")]
	Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

	/// The payload did not decode into word/score pairs.
	#[error("malformed lookup response: {0}")]
	MalformedResponse(#[from] serde_json::Error),
}

impl LookupError {
	pub fn transport<E>(err: E) -> Self
	where
		E: Into<Box<dyn std::error::Error + Send + Sync>>,
	{
		Self::Transport(err.into())
	}
}
