use clap::{Subcommand, ValueEnum};
use phoenician::SearchMode;

use super::styles::relation_help;

/// Which kind of similarity drives suggestions.
#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub(crate) enum ModeCommand {
	/// Words with a similar meaning
	Means,
	/// Words that sound alike
	Sounds,
	/// Words with a similar spelling (the default)
	Spell,
	/// Words linked to the input by a lexical relation
	Relates {
		#[arg(value_name = "RELATION", long_help = relation_help())]
		relation: String,
	},
}

impl ModeCommand {
	pub(crate) fn mode(&self) -> SearchMode {
		match self {
			Self::Means => SearchMode::MeansLike,
			Self::Sounds => SearchMode::SoundsLike,
			Self::Spell => SearchMode::SpellsLike,
			Self::Relates { .. } => SearchMode::RelatesLike,
		}
	}

	pub(crate) fn relation(&self) -> Option<&str> {
		match self {
			Self::Relates { relation } => Some(relation),
			_ => None,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
