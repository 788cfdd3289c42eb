use crate::error::GenError;

/// Shortest accepted sentence, seed words included.
pub const DEFAULT_MIN_LEN: usize = 10;

/// Longest accepted sentence, seed words included.
pub const DEFAULT_MAX_LEN: usize = 20;

/// Sentences drawn before the sampler gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Parameters controlling sentence generation.
///
/// # Responsibilities
/// - Hold the inclusive token-count bounds of an accepted sentence
/// - Bound the number of rejection-sampling attempts
///
/// # Invariants
/// - `2 <= min_len <= max_len` (a sentence always contains its two seed words)
/// - `max_attempts >= 1`
///
/// Fields are public for convenience; `validate` is run by the sampler
/// before any generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
	/// Minimum number of tokens (inclusive).
	pub min_len: usize,

	/// Maximum number of tokens (inclusive).
	pub max_len: usize,

	/// Number of sentences to draw before returning `NoValidSentence`.
	pub max_attempts: usize,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			min_len: DEFAULT_MIN_LEN,
			max_len: DEFAULT_MAX_LEN,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		}
	}
}

impl GenerationConfig {
	/// Checks the invariants listed on the type.
	///
	/// # Errors
	/// - `InvalidLengthBounds` if `min_len < 2` or `min_len > max_len`
	/// - `InvalidAttempts` if `max_attempts == 0`
	pub fn validate(&self) -> Result<(), GenError> {
		if self.min_len < 2 || self.min_len > self.max_len {
			return Err(GenError::InvalidLengthBounds { min: self.min_len, max: self.max_len });
		}
		if self.max_attempts == 0 {
			return Err(GenError::InvalidAttempts);
		}
		Ok(())
	}

	/// Sets both length bounds at once.
	///
	/// # Errors
	/// Returns `InvalidLengthBounds` and leaves the config untouched
	/// if the bounds are invalid.
	pub fn set_length_bounds(&mut self, min_len: usize, max_len: usize) -> Result<(), GenError> {
		if min_len < 2 || min_len > max_len {
			return Err(GenError::InvalidLengthBounds { min: min_len, max: max_len });
		}
		self.min_len = min_len;
		self.max_len = max_len;
		Ok(())
	}

	/// Sets the attempt limit.
	///
	/// # Errors
	/// Returns `InvalidAttempts` if `max_attempts` is 0.
	pub fn set_max_attempts(&mut self, max_attempts: usize) -> Result<(), GenError> {
		if max_attempts == 0 {
			return Err(GenError::InvalidAttempts);
		}
		self.max_attempts = max_attempts;
		Ok(())
	}

	/// Returns `true` if a sentence of `len` tokens is accepted.
	pub fn accepts(&self, len: usize) -> bool {
		(self.min_len..=self.max_len).contains(&len)
	}
}
