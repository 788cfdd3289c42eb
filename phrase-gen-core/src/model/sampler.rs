use log::debug;
use rand::Rng;

use super::config::GenerationConfig;
use super::markov_model::MarkovModel;
use super::successors::Successor;
use crate::error::GenError;
use crate::text::cleaner::clean;

/// High-level sentence generator over a built `MarkovModel`.
///
/// # Responsibilities
/// - Walk the chain from a random start context until the end marker
/// - Reject sentences outside the configured length bounds and retry
/// - Give up with `NoValidSentence` once the attempt limit is reached
#[derive(Debug)]
pub struct SentenceSampler<'m> {
	model: &'m MarkovModel,
	config: GenerationConfig,
}

impl<'m> SentenceSampler<'m> {
	/// Creates a sampler over `model`.
	///
	/// # Errors
	/// Returns an error if `config` does not validate.
	pub fn new(model: &'m MarkovModel, config: GenerationConfig) -> Result<Self, GenError> {
		config.validate()?;
		Ok(Self { model, config })
	}

	/// Creates a sampler with the default bounds (10 to 20 words).
	pub fn with_defaults(model: &'m MarkovModel) -> Self {
		Self { model, config: GenerationConfig::default() }
	}

	pub fn config(&self) -> &GenerationConfig {
		&self.config
	}

	/// Generates the tokens of one sentence, end marker excluded.
	///
	/// # Behavior
	/// - Draws a random start context and uses its two words as the seed.
	/// - Appends sampled successors until the end marker is drawn.
	/// - Retries while the sentence length is outside `[min_len, max_len]`.
	///
	/// # Errors
	/// - `EmptyModel` if the model holds no context
	/// - `NoValidSentence` after `max_attempts` rejected sentences
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<String>, GenError> {
		if self.model.is_empty() {
			return Err(GenError::EmptyModel);
		}

		for attempt in 1..=self.config.max_attempts {
			match self.walk(rng)? {
				Some(sentence) if self.config.accepts(sentence.len()) => {
					debug!("accepted a {} word sentence after {} attempts", sentence.len(), attempt);
					return Ok(sentence);
				}
				Some(sentence) => debug!("attempt {}: rejected {} words", attempt, sentence.len()),
				None => debug!("attempt {}: longer than {} words", attempt, self.config.max_len),
			}
		}

		Err(GenError::NoValidSentence { attempts: self.config.max_attempts })
	}

	/// Generates one sentence and cleans it for display.
	///
	/// # Errors
	/// Same as `generate`.
	pub fn generate_phrase<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GenError> {
		Ok(clean(&self.generate(rng)?))
	}

	/// Runs one walk through the chain.
	///
	/// Returns `None` as soon as the sentence outgrows `max_len`, since it
	/// would be rejected anyway.
	fn walk<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<Vec<String>>, GenError> {
		let mut context = self.model.random_start_context(rng)?.clone();
		let mut sentence = vec![context.first().to_owned(), context.second().to_owned()];

		loop {
			match self.model.sample_successor(&context, rng)? {
				Successor::End => return Ok(Some(sentence)),
				Successor::Word(word) => {
					if sentence.len() >= self.config.max_len {
						return Ok(None);
					}
					sentence.push(word.clone());
					context = context.shift(word);
				}
			}
		}
	}
}
