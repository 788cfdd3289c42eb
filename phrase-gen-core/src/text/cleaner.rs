/// Removes a citation number fused onto a word, e.g. `"common106"` → `"common"`.
///
/// Only words starting with a letter and ending with a digit are touched,
/// so `"3d"` and `"abc"` come back unchanged.
pub fn strip_reference_digits(word: &str) -> &str {
	let starts_alpha = word.chars().next().is_some_and(char::is_alphabetic);
	let ends_digit = word.chars().next_back().is_some_and(|c| c.is_ascii_digit());
	if starts_alpha && ends_digit {
		word.trim_end_matches(|c: char| c.is_ascii_digit())
	} else {
		word
	}
}

/// Turns generated tokens into a display string.
///
/// Strips reference digits from each token and joins them with single
/// spaces. Case and punctuation are left as they are.
pub fn clean<S: AsRef<str>>(tokens: &[S]) -> String {
	tokens
		.iter()
		.map(|token| strip_reference_digits(token.as_ref()))
		.collect::<Vec<_>>()
		.join(" ")
}
