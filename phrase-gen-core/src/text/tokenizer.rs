use std::sync::LazyLock;

use regex::Regex;

/// Anything that is not a letter, number, whitespace or apostrophe.
/// Combining marks and connector punctuation such as `_` are removed too.
static PUNCTUATION: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s']").expect("punctuation pattern is valid"));

/// Returns `true` if the line holds at least one alphabetic character.
///
/// Lines failing this check are not ingested at all.
pub fn is_ingestible(line: &str) -> bool {
	line.chars().any(char::is_alphabetic)
}

/// Lowercases a line, strips punctuation except apostrophes and trims it.
///
/// Example: `"The Panda's Diet, Mostly!"` → `"the panda's diet mostly"`
pub fn normalize(line: &str) -> String {
	PUNCTUATION.replace_all(line, "").to_lowercase().trim().to_owned()
}

/// Splits a normalized line into word tokens.
///
/// Never fails: garbage input only yields fewer tokens.
pub fn tokenize(line: &str) -> Vec<String> {
	normalize(line).split_whitespace().map(str::to_owned).collect()
}
