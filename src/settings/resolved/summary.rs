use super::ResolvedConfig;

pub(super) fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec!["Effective configuration:".to_string()];
	lines.push(format!("  Mode: {}", config.mode.id()));
	if let Some(relation) = &config.relation {
		lines.push(format!("  Relation: {relation}"));
	}
	lines.push(format!("  Endpoint: {}", config.endpoint));
	lines.push(format!("  Timeout: {} ms", config.timeout_ms));
	lines.push(format!("  Max results: {}", config.max));
	if config.topics.is_empty() {
		lines.push("  Topics: (none)".to_string());
	} else {
		lines.push(format!("  Topics: {}", config.topics.join(", ")));
	}
	lines.push(format!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	));
	lines.push(format!("  Title: {}", config.title));
	lines.push(format!("  Log pane: {}", bool_to_word(config.log_pane)));
	lines.push(format!("  Log level: {}", config.log_level));
	lines
}

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
