use std::fmt::Write;

use anyhow::Result;
use phoenician::SessionOutcome;
use serde_json::json;

/// Render the committed words one per line, each followed by its score.
pub(crate) fn format_plain(outcome: &SessionOutcome) -> String {
	let Some(results) = &outcome.results else {
		return format!("No search committed (query: '{}')", outcome.query);
	};

	if results.is_empty() {
		return format!("No results found for '{}'", outcome.query);
	}

	let mut out = String::new();
	for (index, item) in results.iter().enumerate() {
		if index > 0 {
			out.push('\n');
		}
		let _ = write!(out, "{}\t{}", item.word, item.score);
	}
	out
}

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	println!("{}", format_plain(outcome));
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let payload = json!({
		"committed": outcome.results.is_some(),
		"query": outcome.query,
		"results": outcome.results,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use phoenician::WordMatch;
	use serde_json::Value;

	use super::*;

	fn committed() -> SessionOutcome {
		SessionOutcome {
			query: "sea".into(),
			results: Some(vec![WordMatch::new("ocean", 900), WordMatch::new("main", 400)]),
		}
	}

	#[test]
	fn plain_lists_words_with_scores() {
		assert_eq!(format_plain(&committed()), "ocean\t900\nmain\t400");
	}

	#[test]
	fn plain_reports_missing_commit() {
		let outcome = SessionOutcome {
			query: "se".into(),
			results: None,
		};
		assert_eq!(format_plain(&outcome), "No search committed (query: 'se')");
	}

	#[test]
	fn json_format_includes_results() {
		let json = format_outcome_json(&committed()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["committed"], true);
		assert_eq!(value["query"], "sea");
		assert_eq!(value["results"][0]["word"], "ocean");
		assert_eq!(value["results"][1]["score"], 400);
	}

	#[test]
	fn json_results_are_null_without_commit() {
		let outcome = SessionOutcome {
			query: String::new(),
			results: None,
		};
		let value: Value =
			serde_json::from_str(&format_outcome_json(&outcome).expect("json")).expect("parse");
		assert_eq!(value["committed"], false);
		assert!(value["results"].is_null());
	}
}
