//! Constraint encoding and response decoding for the word lookup service.
//!
//! Everything in this module is pure: validation happens in the
//! [`ConstraintBuilder`] setters, [`ConstraintBuilder::encode`] produces the
//! request parameters and [`decode`] turns a payload into [`WordMatch`] values.

mod constraint;
mod error;
mod relation;
mod response;

pub use constraint::{
	ConstraintBuilder, DEFAULT_LIMIT, MAX_LIMIT, MAX_TOPICS, QueryParams, SearchMode, parse_topics,
};
pub use error::{ConstraintError, LookupError};
pub use relation::Relation;
pub use response::{WordMatch, decode};
