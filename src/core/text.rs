//! Text normalization for embedding and naming

use regex::Regex;
use std::sync::LazyLock;

use crate::config::MIN_CONTENT_WORDS;

static PAGE_MARKER: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)--- page \d+ ---").unwrap());
static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z]{3,}").unwrap());

/// Clean raw extracted text into a canonical lowercase token stream.
///
/// Lowercases, drops OCR page markers, strips everything outside
/// `[a-z0-9]` and whitespace, and collapses whitespace runs.
pub fn normalize(raw: &str) -> String {
	let lowered = raw.to_lowercase().replace('\n', " ");
	let no_markers = PAGE_MARKER.replace_all(&lowered, " ");
	let alnum = NON_ALNUM.replace_all(&no_markers, " ");
	alnum.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Detect extremely short or useless extractions (failed OCR, blank scans).
///
/// True when the text holds fewer than [`MIN_CONTENT_WORDS`] alphabetic
/// runs of length >= 3.
pub fn is_degenerate(raw: &str) -> bool {
	WORD.find_iter(raw).count() < MIN_CONTENT_WORDS
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn normalize_lowercases_and_collapses() {
		assert_eq!(normalize("Hello   World\n\nFoo"), "hello world foo");
	}

	#[test]
	fn normalize_strips_page_markers() {
		let raw = "intro --- Page 3 --- body --- page 12 --- end";
		assert_eq!(normalize(raw), "intro body end");
	}

	#[test]
	fn normalize_strips_punctuation_keeps_digits() {
		assert_eq!(normalize("Lease #42: $1,000/mo (2019)!"), "lease 42 1 000 mo 2019");
	}

	#[test]
	fn normalize_is_idempotent() {
		let once = normalize("Port Authority -- Annual Report, 2021");
		assert_eq!(normalize(&once), once);
	}

	#[test]
	fn degenerate_when_too_few_words() {
		assert!(is_degenerate(""));
		assert!(is_degenerate("a b c d 123 456 !!"));
		assert!(is_degenerate(&"ok ".repeat(100)));
	}

	#[test]
	fn not_degenerate_with_enough_words() {
		let text = "harbor ".repeat(MIN_CONTENT_WORDS);
		assert!(!is_degenerate(&text));
	}
}
