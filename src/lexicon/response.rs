use serde::{Deserialize, Serialize};

use super::error::LookupError;

/// A single scored word returned by the lookup service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
	pub word: String,
	/// Service-defined relevance. Items without a score decode as `0`.
	#[serde(default)]
	pub score: i64,
}

impl WordMatch {
	pub fn new(word: impl Into<String>, score: i64) -> Self {
		Self {
			word: word.into(),
			score,
		}
	}
}

/// Decode a raw service payload, preserving the service's ordering.
pub fn decode(raw: &str) -> Result<Vec<WordMatch>, LookupError> {
	Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_in_service_order() {
		let raw = r#"[{"word":"hello","score":90},{"word":"help","score":80}]"#;
		let words = decode(raw).unwrap();
		assert_eq!(
			words,
			vec![WordMatch::new("hello", 90), WordMatch::new("help", 80)]
		);
	}

	#[test]
	fn missing_score_defaults_to_zero() {
		let raw = r#"[{"word":"sea"},{"word":"ocean","score":3}]"#;
		let words = decode(raw).unwrap();
		assert_eq!(words[0], WordMatch::new("sea", 0));
		assert_eq!(words[1].score, 3);
	}

	#[test]
	fn extra_fields_are_ignored() {
		let raw = r#"[{"word":"boat","score":1200,"tags":["n"],"numSyllables":1}]"#;
		assert_eq!(decode(raw).unwrap(), vec![WordMatch::new("boat", 1200)]);
	}

	#[test]
	fn empty_array_is_valid() {
		assert!(decode("[]").unwrap().is_empty());
	}

	#[test]
	fn wrong_shapes_are_malformed() {
		for raw in [
			r#"{"word":"hello"}"#,
			r#"[{"score":10}]"#,
			r#"[{"word":5,"score":1}]"#,
			r#"[{"word":"x","score":"high"}]"#,
			"not json",
			"",
		] {
			let err = decode(raw).unwrap_err();
			assert!(
				matches!(err, LookupError::MalformedResponse(_)),
				"expected malformed response for {raw:?}, got {err:?}"
			);
		}
	}
}
