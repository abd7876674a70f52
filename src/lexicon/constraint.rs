use std::fmt;

use url::form_urlencoded;

use super::error::ConstraintError;
use super::relation::Relation;

/// Largest result count the service will return.
pub const MAX_LIMIT: u32 = 1000;
/// Largest number of topic words accepted per request.
pub const MAX_TOPICS: usize = 1000;
/// Result count used when nothing else is configured.
pub const DEFAULT_LIMIT: u32 = 12;

/// The relationship a lookup asks the service for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchMode {
	MeansLike,
	SoundsLike,
	SpellsLike,
	RelatesLike,
}

impl SearchMode {
	/// Stable identifier used by configuration and log output.
	#[must_use]
	pub const fn id(self) -> &'static str {
		match self {
			SearchMode::MeansLike => "means",
			SearchMode::SoundsLike => "sounds",
			SearchMode::SpellsLike => "spell",
			SearchMode::RelatesLike => "relates",
		}
	}
}

/// A validated constraint, e.g. `ml` or `rel_syn` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Constraint {
	MeansLike,
	SoundsLike,
	SpellsLike,
	Related(Relation),
}

impl Constraint {
	fn key(self) -> String {
		match self {
			Constraint::MeansLike => "ml".to_string(),
			Constraint::SoundsLike => "sl".to_string(),
			Constraint::SpellsLike => "sp".to_string(),
			Constraint::Related(relation) => format!("rel_{}", relation.code()),
		}
	}
}

/// Ordered request parameters produced by [`ConstraintBuilder::encode`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
	pairs: Vec<(String, String)>,
}

impl QueryParams {
	fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.pairs.push((key.into(), value.into()));
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(candidate, _)| candidate == key)
			.map(|(_, value)| value.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs
			.iter()
			.map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Render as an `application/x-www-form-urlencoded` query string.
	#[must_use]
	pub fn to_query_string(&self) -> String {
		form_urlencoded::Serializer::new(String::new())
			.extend_pairs(self.iter())
			.finish()
	}
}

impl fmt::Display for QueryParams {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_query_string())
	}
}

/// Validates search parameters and encodes them into [`QueryParams`].
///
/// The builder never performs I/O. Every setter validates eagerly so that a
/// bad configuration is reported before the first lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstraintBuilder {
	constraint: Constraint,
	limit: u32,
	topics: Vec<String>,
}

impl Default for ConstraintBuilder {
	fn default() -> Self {
		Self {
			constraint: Constraint::SpellsLike,
			limit: DEFAULT_LIMIT,
			topics: Vec::new(),
		}
	}
}

impl ConstraintBuilder {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Select the search mode. `relation` is only consulted for
	/// [`SearchMode::RelatesLike`], where it is required.
	pub fn constrain(
		&mut self,
		mode: SearchMode,
		relation: Option<Relation>,
	) -> Result<&mut Self, ConstraintError> {
		self.constraint = match (mode, relation) {
			(SearchMode::MeansLike, _) => Constraint::MeansLike,
			(SearchMode::SoundsLike, _) => Constraint::SoundsLike,
			(SearchMode::SpellsLike, _) => Constraint::SpellsLike,
			(SearchMode::RelatesLike, Some(relation)) => Constraint::Related(relation),
			(SearchMode::RelatesLike, None) => return Err(ConstraintError::RelationRequired),
		};
		Ok(self)
	}

	pub fn limit(&mut self, max: u32) -> Result<&mut Self, ConstraintError> {
		if !(1..=MAX_LIMIT).contains(&max) {
			return Err(ConstraintError::LimitOutOfRange(max));
		}
		self.limit = max;
		Ok(self)
	}

	/// Restrict results to the given topics. Entries are trimmed and blank
	/// ones dropped before the count is checked.
	pub fn topics<I, S>(&mut self, topics: I) -> Result<&mut Self, ConstraintError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let topics = normalize_topics(topics);
		if topics.len() > MAX_TOPICS {
			return Err(ConstraintError::TooManyTopics(topics.len()));
		}
		self.topics = topics;
		Ok(self)
	}

	#[must_use]
	pub fn max_results(&self) -> u32 {
		self.limit
	}

	#[must_use]
	pub fn topic_list(&self) -> &[String] {
		&self.topics
	}

	/// Constraint key the query is attached to.
	#[must_use]
	pub fn constraint_key(&self) -> String {
		self.constraint.key()
	}

	/// Build request parameters for `query`.
	#[must_use]
	pub fn encode(&self, query: &str) -> QueryParams {
		let mut params = QueryParams::default();
		params.push(self.constraint.key(), query);
		params.push("max", self.limit.to_string());
		if !self.topics.is_empty() {
			params.push("topics", self.topics.join(","));
		}
		params
	}
}

/// Split a comma separated topic list, dropping blank entries.
#[must_use]
pub fn parse_topics(topics: &str) -> Vec<String> {
	normalize_topics(topics.split(','))
}

fn normalize_topics<I, S>(topics: I) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	topics
		.into_iter()
		.filter_map(|topic| {
			let topic = topic.as_ref().trim();
			(!topic.is_empty()).then(|| topic.to_string())
		})
		.collect()
}
