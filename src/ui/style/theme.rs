use ratatui::style::{Color, Modifier, Style};

/// Styles applied by the renderer. Passed in at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub title: Style,
	pub description: Style,
	pub prompt: Style,
	pub result: Style,
	pub score: Style,
	pub number: Style,
	pub no_results: Style,
	pub selected: Style,
	pub muted: Style,
}

impl Theme {
	#[must_use]
	pub fn title_style(&self) -> Style {
		self.title
	}

	#[must_use]
	pub fn description_style(&self) -> Style {
		self.description
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn result_style(&self) -> Style {
		self.result
	}

	#[must_use]
	pub fn score_style(&self) -> Style {
		self.score
	}

	#[must_use]
	pub fn number_style(&self) -> Style {
		self.number
	}

	#[must_use]
	pub fn no_results_style(&self) -> Style {
		self.no_results
	}

	#[must_use]
	pub fn selected_style(&self) -> Style {
		self.selected
	}

	#[must_use]
	pub fn muted_style(&self) -> Style {
		self.muted
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	fn matches(&self, name: &str) -> bool {
		let name = normalize_name(name);
		normalize_name(self.name) == name
			|| self
				.aliases
				.iter()
				.any(|alias| normalize_name(alias) == name)
	}
}

const GREY: Color = Color::Rgb(0x8B, 0x8B, 0x8B);

const DEFAULT: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(0x00, 0xD4, 0xFF))
		.add_modifier(Modifier::BOLD),
	description: Style::new().fg(Color::White),
	prompt: Style::new().fg(Color::Rgb(0x00, 0xD4, 0xFF)),
	result: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
	score: Style::new().fg(GREY),
	number: Style::new().fg(GREY),
	no_results: Style::new().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
	selected: Style::new()
		.fg(Color::Rgb(0xEE, 0x6F, 0xF8))
		.add_modifier(Modifier::BOLD),
	muted: Style::new().fg(GREY),
};

const MONO: Theme = Theme {
	title: Style::new().add_modifier(Modifier::BOLD),
	description: Style::new(),
	prompt: Style::new(),
	result: Style::new().add_modifier(Modifier::BOLD),
	score: Style::new().add_modifier(Modifier::DIM),
	number: Style::new().add_modifier(Modifier::DIM),
	no_results: Style::new().add_modifier(Modifier::ITALIC),
	selected: Style::new().add_modifier(Modifier::REVERSED),
	muted: Style::new().add_modifier(Modifier::DIM),
};

const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new("default", DEFAULT).with_aliases(&["phoenician", "dark"]),
	ThemeDefinition::new("mono", MONO).with_aliases(&["monochrome", "plain"]),
];

#[must_use]
pub fn default_theme() -> Theme {
	DEFAULT
}

/// Names of the built-in themes, in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILT_IN_DEFINITIONS.iter().map(|definition| definition.name)
}

/// Look up a built-in theme by name or alias, ignoring case and separators.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.matches(name))
		.map(|definition| definition.theme)
}

fn normalize_name(name: &str) -> String {
	name.chars()
		.filter(|ch| !matches!(ch, '-' | '_' | ' '))
		.flat_map(char::to_lowercase)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_is_case_and_separator_insensitive() {
		assert_eq!(by_name("Default"), Some(DEFAULT));
		assert_eq!(by_name("mono-chrome"), Some(MONO));
		assert_eq!(by_name("PLAIN"), Some(MONO));
		assert_eq!(by_name("solarized"), None);
	}

	#[test]
	fn names_lists_canonical_entries() {
		assert_eq!(names().collect::<Vec<_>>(), ["default", "mono"]);
	}
}
