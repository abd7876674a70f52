//! Suggestion sources: the asynchronous-facing `resolve` seam used by the
//! search session.

use crate::lexicon::{
	ConstraintBuilder, DEFAULT_LIMIT, LookupError, Relation, SearchMode, WordMatch, decode,
};
use crate::transport::Lookup;

/// Queries shorter than this many characters are never sent.
pub const MIN_QUERY_CHARS: usize = 3;

/// Resolves a query into an ordered list of scored words.
pub trait SuggestionSource: Send + Sync {
	fn resolve(&self, query: &str) -> Result<Vec<WordMatch>, LookupError>;
}

impl<S: SuggestionSource + ?Sized> SuggestionSource for std::sync::Arc<S> {
	fn resolve(&self, query: &str) -> Result<Vec<WordMatch>, LookupError> {
		(**self).resolve(query)
	}
}

/// Immutable search parameters fixed for the lifetime of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	pub mode: SearchMode,
	/// Raw relation code, only meaningful for [`SearchMode::RelatesLike`].
	pub relation: Option<String>,
	pub limit: u32,
	pub topics: Vec<String>,
}

impl SearchConfig {
	#[must_use]
	pub fn new(mode: SearchMode) -> Self {
		Self {
			mode,
			relation: None,
			limit: DEFAULT_LIMIT,
			topics: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_relation(mut self, code: impl Into<String>) -> Self {
		self.relation = Some(code.into());
		self
	}

	#[must_use]
	pub fn with_limit(mut self, limit: u32) -> Self {
		self.limit = limit;
		self
	}

	#[must_use]
	pub fn with_topics(mut self, topics: Vec<String>) -> Self {
		self.topics = topics;
		self
	}

	/// Resolve the relation code for relates-like searches.
	///
	/// Other modes ignore the relation entirely. An absent code is left for
	/// the builder to reject as `RelationRequired`.
	fn relation(&self) -> Result<Option<Relation>, LookupError> {
		if self.mode != SearchMode::RelatesLike {
			return Ok(None);
		}
		self.relation
			.as_deref()
			.map(str::parse::<Relation>)
			.transpose()
	}

	/// Validate every parameter and produce the builder used for lookups.
	pub fn build(&self) -> Result<ConstraintBuilder, LookupError> {
		let relation = self.relation()?;
		let mut builder = ConstraintBuilder::new();
		builder
			.constrain(self.mode, relation)?
			.limit(self.limit)?
			.topics(&self.topics)?;
		Ok(builder)
	}
}

/// A suggestion source for one search mode, bound to a transport.
#[derive(Debug)]
pub struct Suggester<L> {
	config: SearchConfig,
	builder: ConstraintBuilder,
	transport: L,
}

impl<L: Lookup> Suggester<L> {
	/// Validate `config` up front. Failures here are fatal to session setup.
	pub fn new(config: SearchConfig, transport: L) -> Result<Self, LookupError> {
		let builder = config.build()?;
		Ok(Self {
			config,
			builder,
			transport,
		})
	}

	#[must_use]
	pub fn constraints(&self) -> &ConstraintBuilder {
		&self.builder
	}

	#[must_use]
	pub fn transport(&self) -> &L {
		&self.transport
	}

	/// Header line shown above the input.
	#[must_use]
	pub fn description(&self) -> String {
		match self.config.mode {
			SearchMode::MeansLike => "Start typing to get words that mean like the input".into(),
			SearchMode::SoundsLike => "Start typing to get words that sound like the input".into(),
			SearchMode::SpellsLike => {
				"Start typing to get words that are spelled like the input".into()
			}
			SearchMode::RelatesLike => {
				let relation = self
					.config
					.relation
					.as_deref()
					.and_then(Relation::from_code)
					.map_or("Unknown relation", Relation::description);
				format!("Start typing to get words that are related by '{relation}'")
			}
		}
	}
}

impl<L: Lookup> SuggestionSource for Suggester<L> {
	fn resolve(&self, query: &str) -> Result<Vec<WordMatch>, LookupError> {
		if query.chars().count() < MIN_QUERY_CHARS {
			return Ok(Vec::new());
		}

		let query = query.to_lowercase();
		let params = self.builder.encode(&query);
		log::debug!("{} lookup for '{query}'", self.config.mode.id());
		let raw = self.transport.lookup(&params).inspect_err(|err| {
			log::warn!("lookup for '{query}' failed: {err}");
		})?;
		let words = decode(&raw).inspect_err(|err| {
			log::warn!("discarding malformed response for '{query}': {err}");
		})?;
		log::debug!("'{query}' resolved to {} words", words.len());
		Ok(words)
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use super::*;
	use crate::lexicon::{ConstraintError, QueryParams};

	/// Transport double that records every request and replies with a fixed body.
	#[derive(Default, Debug)]
	struct RecordingLookup {
		body: String,
		calls: Mutex<Vec<QueryParams>>,
	}

	impl RecordingLookup {
		fn replying(body: &str) -> Self {
			Self {
				body: body.to_string(),
				calls: Mutex::new(Vec::new()),
			}
		}

		fn calls(&self) -> Vec<QueryParams> {
			self.calls.lock().unwrap().clone()
		}
	}

	impl Lookup for RecordingLookup {
		fn lookup(&self, params: &QueryParams) -> Result<String, LookupError> {
			self.calls.lock().unwrap().push(params.clone());
			Ok(self.body.clone())
		}
	}

	#[derive(Debug)]
	struct FailingLookup;

	impl Lookup for FailingLookup {
		fn lookup(&self, _params: &QueryParams) -> Result<String, LookupError> {
			Err(LookupError::transport("connection refused"))
		}
	}

	#[test]
	fn short_queries_never_reach_the_transport() {
		let suggester = Suggester::new(
			SearchConfig::new(SearchMode::MeansLike),
			RecordingLookup::replying("[]"),
		)
		.unwrap();

		for query in ["", "o", "oc", "éa"] {
			assert!(suggester.resolve(query).unwrap().is_empty());
		}
		assert!(suggester.transport().calls().is_empty());
	}

	#[test]
	fn spells_like_scenario_decodes_in_order() {
		let suggester = Suggester::new(
			SearchConfig::new(SearchMode::SpellsLike).with_limit(10),
			RecordingLookup::replying(r#"[{"word":"hello","score":90},{"word":"help","score":80}]"#),
		)
		.unwrap();

		let words = suggester.resolve("hel").unwrap();
		assert_eq!(
			words,
			vec![WordMatch::new("hello", 90), WordMatch::new("help", 80)]
		);

		let calls = suggester.transport().calls();
		assert_eq!(calls.len(), 1);
		insta::assert_snapshot!(calls[0].to_query_string(), @"sp=hel&max=10");
	}

	#[test]
	fn queries_are_lowercased() {
		let suggester = Suggester::new(
			SearchConfig::new(SearchMode::SoundsLike),
			RecordingLookup::replying("[]"),
		)
		.unwrap();
		suggester.resolve("OCEan").unwrap();
		assert_eq!(suggester.transport().calls()[0].get("sl"), Some("ocean"));
	}

	#[test]
	fn relates_like_with_known_code() {
		let suggester = Suggester::new(
			SearchConfig::new(SearchMode::RelatesLike)
				.with_relation("syn")
				.with_limit(5),
			RecordingLookup::replying("[]"),
		)
		.unwrap();
		suggester.resolve("sea").unwrap();
		insta::assert_snapshot!(suggester.transport().calls()[0].to_query_string(), @"rel_syn=sea&max=5");
		assert_eq!(
			suggester.description(),
			"Start typing to get words that are related by 'Synonyms (ocean → sea)'"
		);
	}

	#[test]
	fn unknown_relation_fails_before_any_lookup() {
		let err = Suggester::new(
			SearchConfig::new(SearchMode::RelatesLike).with_relation("zzz"),
			RecordingLookup::default(),
		)
		.unwrap_err();
		assert!(matches!(err, LookupError::InvalidRelation(ref code) if code == "zzz"));
	}

	#[test]
	fn relates_like_without_code_is_relation_required() {
		let err = Suggester::new(
			SearchConfig::new(SearchMode::RelatesLike),
			RecordingLookup::default(),
		)
		.unwrap_err();
		assert!(matches!(
			err,
			LookupError::Validation(ConstraintError::RelationRequired)
		));
	}

	#[test]
	fn relation_is_ignored_outside_relates_like() {
		let suggester = Suggester::new(
			SearchConfig::new(SearchMode::MeansLike).with_relation("zzz"),
			RecordingLookup::replying("[]"),
		)
		.unwrap();
		assert_eq!(suggester.constraints().constraint_key(), "ml");
	}

	#[test]
	fn invalid_limit_and_topics_are_validation_errors() {
		let err = Suggester::new(
			SearchConfig::new(SearchMode::MeansLike).with_limit(0),
			RecordingLookup::default(),
		)
		.unwrap_err();
		assert!(matches!(
			err,
			LookupError::Validation(ConstraintError::LimitOutOfRange(0))
		));

		let topics = (0..1001).map(|i| i.to_string()).collect();
		let err = Suggester::new(
			SearchConfig::new(SearchMode::MeansLike).with_topics(topics),
			RecordingLookup::default(),
		)
		.unwrap_err();
		assert!(matches!(
			err,
			LookupError::Validation(ConstraintError::TooManyTopics(1001))
		));
	}

	#[test]
	fn transport_and_decode_failures_propagate() {
		let suggester =
			Suggester::new(SearchConfig::new(SearchMode::MeansLike), FailingLookup).unwrap();
		assert!(matches!(
			suggester.resolve("ocean"),
			Err(LookupError::Transport(_))
		));

		let suggester = Suggester::new(
			SearchConfig::new(SearchMode::MeansLike),
			RecordingLookup::replying("<html>"),
		)
		.unwrap();
		assert!(matches!(
			suggester.resolve("ocean"),
			Err(LookupError::MalformedResponse(_))
		));
	}
}
