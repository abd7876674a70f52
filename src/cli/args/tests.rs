use clap::{CommandFactory, Parser};
use phoenician::SearchMode;

use super::{CliArgs, ModeCommand, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn defaults_to_spelling_mode_and_plain_output() {
	let parsed = CliArgs::parse_from(["phoenician"]);
	assert_eq!(parsed.mode, None);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(!parsed.log_pane);
}

#[test]
fn relates_takes_a_relation_code() {
	let parsed = CliArgs::parse_from(["phoenician", "-m", "5", "-t", "sea,sky", "relates", "syn"]);
	let mode = parsed.mode.expect("mode");
	assert_eq!(mode.mode(), SearchMode::RelatesLike);
	assert_eq!(mode.relation(), Some("syn"));
	assert_eq!(parsed.max, Some(5));
	assert_eq!(parsed.topics.as_deref(), Some("sea,sky"));
}

#[test]
fn relates_without_a_code_is_rejected() {
	assert!(CliArgs::try_parse_from(["phoenician", "relates"]).is_err());
}

#[test]
fn simple_modes_have_no_relation() {
	let parsed = CliArgs::parse_from(["phoenician", "-o", "json", "sounds"]);
	assert_eq!(parsed.mode, Some(ModeCommand::Sounds));
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(parsed.mode.and_then(|m| m.relation().map(str::to_string)), None);
}

#[test]
fn mode_subcommands_accept_max_and_topics() {
	let parsed = CliArgs::try_parse_from(["phoenician", "means", "-m", "20", "-t", "religion"])
		.expect("flags after the subcommand parse");
	assert_eq!(parsed.mode, Some(ModeCommand::Means));
	assert_eq!(parsed.max, Some(20));
	assert_eq!(parsed.topics.as_deref(), Some("religion"));

	let parsed = CliArgs::parse_from(["phoenician", "relates", "syn", "--max", "5"]);
	assert_eq!(parsed.max, Some(5));
	assert_eq!(parsed.mode.and_then(|m| m.relation().map(str::to_string)).as_deref(), Some("syn"));
}
