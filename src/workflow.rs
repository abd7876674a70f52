use std::sync::Arc;

use anyhow::{Context, Result};
use phoenician::{HttpLookup, SearchUi, SessionOutcome, Suggester};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
	search_ui: SearchUi,
}

impl SearchWorkflow {
	/// Build the transport and suggestion source. Any failure here is a setup
	/// error and aborts before the terminal is touched.
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let transport = HttpLookup::new(&config.endpoint, config.timeout())
			.with_context(|| format!("failed to set up lookups against {}", config.endpoint))?;
		let suggester = Suggester::new(config.search_config(), transport)
			.context("invalid search configuration")?;

		log::info!(
			"{} search against {} (max {})",
			config.mode.id(),
			config.endpoint,
			config.max
		);

		let description = suggester.description();
		let mut search_ui = SearchUi::new(Arc::new(suggester))
			.with_title(config.title)
			.with_description(description)
			.with_log_pane(config.log_pane);
		if let Some(theme) = &config.theme {
			search_ui = search_ui.with_theme_name(theme);
		}

		Ok(Self { search_ui })
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		self.search_ui.run()
	}
}
