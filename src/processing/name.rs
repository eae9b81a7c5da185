//! Folder naming from a cluster's aggregate text

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::KEYWORD_MIN_LEN;

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());
static UNSAFE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]").unwrap());

/// Derive a folder name for a group of (normalized) document texts.
///
/// The most frequent token longer than [`KEYWORD_MIN_LEN`] characters wins
/// (first appearance breaks ties), capitalized, with `_<year>` appended when
/// a 19xx/20xx token occurs anywhere in the group. Falls back to `"Group"`
/// when nothing qualifies. The result contains only `[A-Za-z0-9_-]`.
pub fn name_group(texts: &[&str]) -> String {
	let joined = texts.join(" ");

	let keyword = dominant_keyword(&joined)
		.map(capitalize)
		.unwrap_or_else(|| "Group".to_string());

	let name = match YEAR.find(&joined) {
		Some(m) => format!("{}_{}", keyword, m.as_str()),
		None => keyword,
	};

	UNSAFE.replace_all(&name, "_").into_owned()
}

/// Most frequent token longer than the keyword cutoff; first-seen wins ties
fn dominant_keyword(joined: &str) -> Option<&str> {
	let tokens: Vec<&str> = joined
		.split_whitespace()
		.filter(|w| w.chars().count() > KEYWORD_MIN_LEN)
		.collect();

	let mut counts: HashMap<&str, usize> = HashMap::new();
	for token in &tokens {
		*counts.entry(token).or_insert(0) += 1;
	}

	let mut best: Option<(&str, usize)> = None;
	for token in &tokens {
		let count = counts[token];
		if best.map_or(true, |(_, b)| count > b) {
			best = Some((token, count));
		}
	}
	best.map(|(token, _)| token)
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn picks_most_frequent_long_token() {
		let texts = ["harbor lease harbor permit", "harbor berths permit"];
		assert_eq!(name_group(&texts), "Harbor");
	}

	#[test]
	fn short_tokens_never_qualify() {
		// every token is five characters or fewer
		assert_eq!(name_group(&["the cat sat on a mat"]), "Group");
		assert_eq!(name_group(&[]), "Group");
	}

	#[test]
	fn first_seen_wins_frequency_ties() {
		assert_eq!(name_group(&["marina dredge marina dredge"]), "Marina");
	}

	#[test]
	fn appends_first_detected_year() {
		let texts = ["terminal report 2019 revised 2021"];
		assert_eq!(name_group(&texts), "Terminal_2019");
	}

	#[test]
	fn year_must_be_a_standalone_token() {
		// 21995 and 19x2 must not count as years
		assert_eq!(name_group(&["storage invoice 21995 19x2"]), "Storage");
	}

	#[test]
	fn sanitizes_to_safe_alphabet() {
		let name = name_group(&["caf\u{e9}teria caf\u{e9}teria menu 2020"]);
		assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
		assert_eq!(name, "Caf_teria_2020");
	}

	#[test]
	fn naming_is_idempotent() {
		let texts = ["quarterly budget budget 2018"];
		assert_eq!(name_group(&texts), name_group(&texts));
	}
}
