use std::fmt;

/// Two consecutive words used to look up the next word.
///
/// The order matters: `("a", "b")` and `("b", "a")` are distinct contexts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Context {
	first: String,
	second: String,
}

impl Context {
	/// Creates a context from its two words.
	pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
		Self { first: first.into(), second: second.into() }
	}

	/// Returns the older of the two words.
	pub fn first(&self) -> &str {
		&self.first
	}

	/// Returns the most recent word.
	pub fn second(&self) -> &str {
		&self.second
	}

	/// Returns the context shifted by one word: `(b, next)` for `(a, b)`.
	pub fn shift(&self, next: &str) -> Self {
		Self::new(self.second.clone(), next)
	}
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.first, self.second)
	}
}
