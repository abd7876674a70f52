use clap::Parser;
use phoenician::SearchMode;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"phoenician",
		"--endpoint",
		"http://localhost:9000/words",
		"--timeout-ms",
		"250",
		"-m",
		"7",
		"-t",
		" sea , ,sky",
		"--theme",
		"mono",
		"--title",
		"Words",
		"--log-pane",
		"--log-level",
		"debug",
	]);

	let mut config = RawConfig::default();
	config.search.max = Some(40);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.lookup.endpoint.as_deref(), Some("http://localhost:9000/words"));
	assert_eq!(config.lookup.timeout_ms, Some(250));
	assert_eq!(config.search.max, Some(7));
	assert_eq!(
		config.search.topics,
		Some(vec!["sea".to_string(), "sky".to_string()])
	);
	assert_eq!(config.ui.theme.as_deref(), Some("mono"));
	assert_eq!(config.ui.title.as_deref(), Some("Words"));
	assert_eq!(config.ui.log_pane, Some(true));
	assert_eq!(config.logging.level.as_deref(), Some("debug"));
}

#[test]
fn absent_flags_keep_file_values() {
	let cli = CliArgs::parse_from(["phoenician"]);
	let mut config = RawConfig::default();
	config.ui.log_pane = Some(true);
	config.search.max = Some(40);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.ui.log_pane, Some(true));
	assert_eq!(config.search.max, Some(40));
}

#[test]
fn resolve_fills_defaults() {
	let cli = CliArgs::parse_from(["phoenician"]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolve");

	assert_eq!(resolved.mode, SearchMode::SpellsLike);
	assert_eq!(resolved.relation, None);
	assert_eq!(resolved.endpoint, "https://api.datamuse.com/words");
	assert_eq!(resolved.timeout_ms, 10_000);
	assert_eq!(resolved.max, 10);
	assert!(resolved.topics.is_empty());
	assert_eq!(resolved.title, "Phoenician");
	assert_eq!(resolved.log_level, "info");
	assert!(!resolved.log_pane);
}

#[test]
fn resolve_carries_the_relation() {
	let cli = CliArgs::parse_from(["phoenician", "relates", "ant"]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolve");

	assert_eq!(resolved.mode, SearchMode::RelatesLike);
	assert_eq!(resolved.relation.as_deref(), Some("ant"));
}

#[test]
fn out_of_range_flag_is_reported_against_the_flag() {
	let cli = CliArgs::parse_from(["phoenician", "-m", "1001"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("search.max"), "{message}");
	assert!(message.contains("CLI flag `--max`"), "{message}");
	assert!(message.contains("value: 1001"), "{message}");
}
