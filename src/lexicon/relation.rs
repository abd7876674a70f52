use std::fmt;
use std::str::FromStr;

use super::error::LookupError;

/// Lexical relations understood by the `rel_<code>` constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
	NounByAdjective,
	AdjectiveByNoun,
	Synonym,
	Trigger,
	Antonym,
	KindOf,
	Comprises,
	PartOf,
	FrequentFollower,
	FrequentPredecessor,
	Homophone,
	ConsonantMatch,
}

impl Relation {
	/// Every relation in the order the service documents them.
	#[must_use]
	pub const fn all() -> [Relation; 12] {
		[
			Relation::NounByAdjective,
			Relation::AdjectiveByNoun,
			Relation::Synonym,
			Relation::Trigger,
			Relation::Antonym,
			Relation::KindOf,
			Relation::Comprises,
			Relation::PartOf,
			Relation::FrequentFollower,
			Relation::FrequentPredecessor,
			Relation::Homophone,
			Relation::ConsonantMatch,
		]
	}

	/// Three-letter code sent to the service.
	#[must_use]
	pub const fn code(self) -> &'static str {
		match self {
			Relation::NounByAdjective => "jja",
			Relation::AdjectiveByNoun => "jjb",
			Relation::Synonym => "syn",
			Relation::Trigger => "trg",
			Relation::Antonym => "ant",
			Relation::KindOf => "spc",
			Relation::Comprises => "com",
			Relation::PartOf => "par",
			Relation::FrequentFollower => "bga",
			Relation::FrequentPredecessor => "bgb",
			Relation::Homophone => "hom",
			Relation::ConsonantMatch => "cns",
		}
	}

	/// Resolve a three-letter code. Unknown codes yield `None`.
	#[must_use]
	pub fn from_code(code: &str) -> Option<Relation> {
		Relation::all()
			.into_iter()
			.find(|relation| relation.code() == code)
	}

	/// Human readable summary with an example pair.
	#[must_use]
	pub const fn description(self) -> &'static str {
		match self {
			Relation::NounByAdjective => "Popular nouns modified by adjective (gradual → increase)",
			Relation::AdjectiveByNoun => "Popular adjectives for noun (beach → sandy)",
			Relation::Synonym => "Synonyms (ocean → sea)",
			Relation::Trigger => "Trigger words (cow → milking)",
			Relation::Antonym => "Antonyms (late → early)",
			Relation::KindOf => "Kind of / hypernyms (gondola → boat)",
			Relation::Comprises => "Comprises / holonyms (car → accelerator)",
			Relation::PartOf => "Part of / meronyms (trunk → tree)",
			Relation::FrequentFollower => "Frequent followers (wreak → havoc)",
			Relation::FrequentPredecessor => "Frequent predecessors (havoc → wreak)",
			Relation::Homophone => "Homophones (course → coarse)",
			Relation::ConsonantMatch => "Consonant match (sample → simple)",
		}
	}
}

impl fmt::Display for Relation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl FromStr for Relation {
	type Err = LookupError;

	fn from_str(code: &str) -> Result<Self, Self::Err> {
		Relation::from_code(code).ok_or_else(|| LookupError::InvalidRelation(code.to_string()))
	}
}
