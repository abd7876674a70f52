use std::env;

use anyhow::{Error, Result};
use phoenician::lexicon::parse_topics;
use phoenician::transport::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use phoenician::ui::DEFAULT_TITLE;
use phoenician::SearchMode;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

const DEFAULT_MAX: u32 = 10;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	lookup: LookupSection,
	search: SearchSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LookupSection {
	endpoint: Option<String>,
	timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	max: Option<u32>,
	topics: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	title: Option<String>,
	log_pane: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			self.lookup.endpoint = Some(endpoint);
		}
		if let Some(timeout) = cli.timeout_ms {
			self.lookup.timeout_ms = Some(timeout);
		}
		if let Some(max) = cli.max {
			self.search.max = Some(max);
		}
		if let Some(topics) = &cli.topics {
			self.search.topics = Some(parse_topics(topics));
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if cli.log_pane {
			self.ui.log_pane = Some(true);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			endpoint: detect_source(
				cli.endpoint.is_some(),
				self.lookup.endpoint.is_some(),
				"PHOENICIAN__LOOKUP__ENDPOINT",
				"--endpoint",
				"lookup.endpoint",
			),
			timeout_ms: detect_source(
				cli.timeout_ms.is_some(),
				self.lookup.timeout_ms.is_some(),
				"PHOENICIAN__LOOKUP__TIMEOUT_MS",
				"--timeout-ms",
				"lookup.timeout_ms",
			),
			max: detect_source(
				cli.max.is_some(),
				self.search.max.is_some(),
				"PHOENICIAN__SEARCH__MAX",
				"--max",
				"search.max",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"PHOENICIAN__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"PHOENICIAN__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let (mode, relation) = match &cli.mode {
			Some(command) => (command.mode(), command.relation().map(str::to_string)),
			None => (SearchMode::SpellsLike, None),
		};

		let config = ResolvedConfig {
			mode,
			relation,
			endpoint: self
				.lookup
				.endpoint
				.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
			timeout_ms: self
				.lookup
				.timeout_ms
				.unwrap_or(DEFAULT_TIMEOUT.as_millis() as u64),
			max: self.search.max.unwrap_or(DEFAULT_MAX),
			topics: self.search.topics.unwrap_or_default(),
			theme: self.ui.theme,
			title: self.ui.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
			log_pane: self.ui.log_pane.unwrap_or(false),
			log_level: self
				.logging
				.level
				.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
