use std::time::Duration;

use log::LevelFilter;
use phoenician::{SearchConfig, SearchMode};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub mode: SearchMode,
	pub relation: Option<String>,
	pub endpoint: String,
	pub timeout_ms: u64,
	pub max: u32,
	pub topics: Vec<String>,
	pub theme: Option<String>,
	pub title: String,
	pub log_pane: bool,
	pub log_level: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}

	/// The validated log level. Falls back to `info` for unvalidated values.
	pub fn level(&self) -> LevelFilter {
		phoenician::logging::parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
	}

	/// Search parameters handed to the suggestion source.
	pub fn search_config(&self) -> SearchConfig {
		let mut config = SearchConfig::new(self.mode)
			.with_limit(self.max)
			.with_topics(self.topics.clone());
		if let Some(relation) = &self.relation {
			config = config.with_relation(relation.clone());
		}
		config
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
pub(super) fn sample() -> ResolvedConfig {
	ResolvedConfig {
		mode: SearchMode::SpellsLike,
		relation: None,
		endpoint: "https://api.datamuse.com/words".into(),
		timeout_ms: 10_000,
		max: 10,
		topics: Vec::new(),
		theme: None,
		title: "Phoenician".into(),
		log_pane: false,
		log_level: "info".into(),
	}
}
