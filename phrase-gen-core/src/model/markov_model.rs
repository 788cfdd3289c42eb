use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io;
use std::path::Path;

use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::context::Context;
use super::successors::{Successor, SuccessorDistribution};
use crate::error::GenError;
use crate::io::read_lines;
use crate::text::tokenizer::{is_ingestible, tokenize};

/// Second-order Markov model over words.
///
/// The `MarkovModel` maps every pair of consecutive words seen in the
/// corpus to the distribution of words that followed it.
///
/// # Responsibilities
/// - Build the model from tokenized lines
/// - Accumulate successor counts for each context
/// - Sample the successor of a context
/// - Pick a random context to start a sentence
///
/// # Invariants
/// - Every stored context has a distribution with a total of at least 1
/// - `keys` holds every context of `contexts` exactly once, in first-seen order
/// - Sampling never mutates the model
#[derive(Clone, Debug, Default)]
pub struct MarkovModel {
	/// Mapping from a context to the words observed right after it
	contexts: HashMap<Context, SuccessorDistribution>,

	/// Contexts in first-seen order, for uniform start selection
	keys: Vec<Context>,
}

impl MarkovModel {
	/// Creates an empty model.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a model from a text buffer, one ingestion per line.
	pub fn from_text(text: &str) -> Self {
		Self::from_lines(text.lines())
	}

	/// Builds a model from an iterator of raw lines.
	///
	/// Lines without any alphabetic character, and lines with fewer
	/// than two words, are skipped.
	pub fn from_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut model = Self::new();
		let mut ingested = 0usize;
		let mut skipped = 0usize;
		for line in lines {
			if model.ingest_line(line.as_ref()) {
				ingested += 1;
			} else {
				skipped += 1;
			}
		}
		model.log_summary(ingested, skipped);
		model
	}

	/// Builds a model from a text file, read line by line.
	///
	/// # Errors
	/// Returns an I/O error if the file cannot be opened or read.
	pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
		let mut model = Self::new();
		let mut ingested = 0usize;
		let mut skipped = 0usize;
		for line in read_lines(&path)? {
			if model.ingest_line(&line?) {
				ingested += 1;
			} else {
				skipped += 1;
			}
		}
		debug!("loaded corpus from {}", path.as_ref().display());
		model.log_summary(ingested, skipped);
		Ok(model)
	}

	fn log_summary(&self, ingested: usize, skipped: usize) {
		info!(
			"ingested {} lines ({} skipped) into {} contexts",
			ingested,
			skipped,
			self.len()
		);
	}

	/// Normalizes and tokenizes a raw line, then ingests it.
	///
	/// Returns `true` if the line updated the model.
	pub fn ingest_line(&mut self, line: &str) -> bool {
		if !is_ingestible(line) {
			return false;
		}
		self.ingest(&tokenize(line))
	}

	/// Adds one tokenized line to the model.
	///
	/// Each word from the third on is recorded under the two words before
	/// it, then the end marker is recorded under the last two words.
	///
	/// # Notes
	/// - Lines shorter than two tokens are ignored and `false` is returned.
	pub fn ingest<S: AsRef<str>>(&mut self, tokens: &[S]) -> bool {
		let [.., before_last, last] = tokens else {
			return false;
		};

		for window in tokens.windows(3) {
			let [a, b, next] = window else { continue };
			let (a, b, next): (&str, &str, &str) = (a.as_ref(), b.as_ref(), next.as_ref());
			self.record(Context::new(a, b), Successor::Word(next.to_owned()));
		}
		let (before_last, last): (&str, &str) = (before_last.as_ref(), last.as_ref());
		self.record(Context::new(before_last, last), Successor::End);
		true
	}

	fn record(&mut self, context: Context, successor: Successor) {
		match self.contexts.entry(context) {
			Entry::Occupied(mut entry) => entry.get_mut().add(successor),
			Entry::Vacant(entry) => {
				self.keys.push(entry.key().clone());
				entry.insert(SuccessorDistribution::new()).add(successor);
			}
		}
	}

	/// Draws the successor of `context`, weighted by observed counts.
	///
	/// # Errors
	/// Returns `GenError::UnknownContext` if the context was never ingested.
	pub fn sample_successor<R: Rng + ?Sized>(&self, context: &Context, rng: &mut R) -> Result<&Successor, GenError> {
		self.contexts
			.get(context)
			.and_then(|successors| successors.sample(rng))
			.ok_or_else(|| GenError::UnknownContext(context.clone()))
	}

	/// Returns a context drawn uniformly among all contexts of the model.
	///
	/// Useful for starting a sentence.
	///
	/// # Errors
	/// Returns `GenError::EmptyModel` if nothing was ingested.
	pub fn random_start_context<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Context, GenError> {
		self.keys.choose(rng).ok_or(GenError::EmptyModel)
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	pub fn contains(&self, context: &Context) -> bool {
		self.contexts.contains_key(context)
	}

	/// Returns the successor distribution of `context`, if any.
	pub fn successors(&self, context: &Context) -> Option<&SuccessorDistribution> {
		self.contexts.get(context)
	}

	/// Number of times `successor` followed `context`.
	pub fn count(&self, context: &Context, successor: &Successor) -> usize {
		self.successors(context).map_or(0, |successors| successors.count(successor))
	}

	/// Iterates over all contexts in first-seen order.
	pub fn contexts(&self) -> impl Iterator<Item = &Context> {
		self.keys.iter()
	}
}
