use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) endpoint: Option<SettingSource>,
	pub(crate) timeout_ms: Option<SettingSource>,
	pub(crate) max: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

impl ConfigSources {
	/// The recorded origin of `key`, or the config key itself for defaults.
	pub(crate) fn origin(&self, key: &'static str) -> SettingSource {
		let recorded = match key {
			"lookup.endpoint" => &self.endpoint,
			"lookup.timeout_ms" => &self.timeout_ms,
			"search.max" => &self.max,
			"ui.theme" => &self.theme,
			"logging.level" => &self.log_level,
			_ => &None,
		};
		recorded.clone().unwrap_or(SettingSource::ConfigKey(key))
	}
}
