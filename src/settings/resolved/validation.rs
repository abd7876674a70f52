use phoenician::lexicon::MAX_LIMIT;
use phoenician::logging::parse_level;
use phoenician::ui::style;
use url::Url;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if Url::parse(&config.endpoint).is_err() {
		return Err(ConfigError::invalid(
			"lookup.endpoint",
			config.endpoint.clone(),
			sources.origin("lookup.endpoint"),
			"must be an absolute URL",
		));
	}

	if config.timeout_ms == 0 {
		return Err(ConfigError::invalid(
			"lookup.timeout_ms",
			config.timeout_ms.to_string(),
			sources.origin("lookup.timeout_ms"),
			"must be greater than zero",
		));
	}

	if config.max == 0 || config.max > MAX_LIMIT {
		return Err(ConfigError::invalid(
			"search.max",
			config.max.to_string(),
			sources.origin("search.max"),
			format!("must be between 1 and {MAX_LIMIT}"),
		));
	}

	if let Some(theme) = &config.theme {
		if style::by_name(theme).is_none() {
			let known: Vec<_> = style::names().collect();
			return Err(ConfigError::invalid(
				"ui.theme",
				theme.clone(),
				sources.origin("ui.theme"),
				format!("unknown theme, expected one of: {}", known.join(", ")),
			));
		}
	}

	if parse_level(&config.log_level).is_none() {
		return Err(ConfigError::invalid(
			"logging.level",
			config.log_level.clone(),
			sources.origin("logging.level"),
			"expected off, error, warn, info, debug or trace",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::super::{SettingSource, sample};
	use super::*;

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&sample(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			timeout_ms: 0,
			..sample()
		};
		let sources = ConfigSources {
			timeout_ms: Some(SettingSource::CliFlag("--timeout-ms")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "lookup.timeout_ms");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_limit_outside_bounds() {
		for max in [0, 1001] {
			let config = ResolvedConfig { max, ..sample() };
			let sources = ConfigSources {
				max: Some(SettingSource::Environment("PHOENICIAN__SEARCH__MAX")),
				..ConfigSources::default()
			};

			let err = validate(&config, &sources).unwrap_err();
			assert_eq!(err.key, "search.max");
			assert!(err.to_string().contains("environment variable"));
		}

		for max in [1, 1000] {
			let config = ResolvedConfig { max, ..sample() };
			assert!(validate(&config, &ConfigSources::default()).is_ok());
		}
	}

	#[test]
	fn validation_rejects_unknown_theme_and_level() {
		let config = ResolvedConfig {
			theme: Some("sepia".into()),
			..sample()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		assert_eq!(err.origin, SettingSource::ConfigKey("ui.theme"));

		let config = ResolvedConfig {
			log_level: "loud".into(),
			..sample()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "logging.level");
	}

	#[test]
	fn validation_rejects_relative_endpoint() {
		let config = ResolvedConfig {
			endpoint: "api/words".into(),
			..sample()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "lookup.endpoint");
	}
}
