//! Transports that carry encoded [`QueryParams`] to the lookup service.

mod http;

pub use http::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, HttpLookup};

use crate::lexicon::{LookupError, QueryParams};

/// Executes one lookup and returns the raw response payload.
pub trait Lookup: Send + Sync {
	fn lookup(&self, params: &QueryParams) -> Result<String, LookupError>;
}

impl<L: Lookup + ?Sized> Lookup for std::sync::Arc<L> {
	fn lookup(&self, params: &QueryParams) -> Result<String, LookupError> {
		(**self).lookup(params)
	}
}
