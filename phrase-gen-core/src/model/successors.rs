use std::collections::HashMap;

use rand::Rng;

/// A token observed right after a context.
///
/// `End` marks the context as a valid sentence end. It is a variant of its
/// own so it can never collide with a real word, not even an empty one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Successor {
	Word(String),
	End,
}

impl Successor {
	/// Returns the word, or `None` for the end marker.
	pub fn as_word(&self) -> Option<&str> {
		match self {
			Successor::Word(word) => Some(word),
			Successor::End => None,
		}
	}
}

impl From<&str> for Successor {
	fn from(word: &str) -> Self {
		Successor::Word(word.to_owned())
	}
}

/// Successors of a single context with their occurrence counts.
///
/// Conceptually, this is the set of outgoing edges of one node in the
/// Markov chain, each edge weighted by how many times it was observed.
///
/// ## Responsibilities:
/// - Accumulate successor occurrences during ingestion
/// - Draw a successor using weighted random sampling
///
/// ## Invariants
/// - Each occurrence count is strictly positive
/// - `total` always equals the sum of all counts
#[derive(Clone, Debug, Default)]
pub struct SuccessorDistribution {
	/// Successors in first-seen order with their counts.
	/// Example: [(Word("panda"), 3), (End, 1)]
	counts: Vec<(Successor, usize)>,
	/// Position of each successor in `counts`.
	index: HashMap<Successor, usize>,
	/// Maintained on every `add`, never recomputed when sampling.
	total: usize,
}

impl SuccessorDistribution {
	/// Creates an empty distribution.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `successor`.
	///
	/// - If the successor already exists, its count is increased.
	/// - Otherwise, it is created with an initial count of 1.
	pub fn add(&mut self, successor: Successor) {
		match self.index.get(&successor) {
			Some(&position) => self.counts[position].1 += 1,
			None => {
				self.index.insert(successor.clone(), self.counts.len());
				self.counts.push((successor, 1));
			}
		}
		self.total += 1;
	}

	/// Total number of recorded occurrences.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Number of distinct successors.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Occurrence count of `successor`, 0 if never seen.
	pub fn count(&self, successor: &Successor) -> usize {
		self.index.get(successor).map_or(0, |&position| self.counts[position].1)
	}

	/// Iterates over `(successor, count)` pairs in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = (&Successor, usize)> {
		self.counts.iter().map(|(successor, count)| (successor, *count))
	}

	/// Draws a successor with probability proportional to its count.
	///
	/// This method performs:
	/// - a uniform draw in `0..total`
	/// - an O(n) scan subtracting counts until the draw falls in a bucket
	///
	/// The order of the entries only changes which bucket a given draw
	/// lands in, not the probability of any successor.
	///
	/// Returns `None` if the distribution is empty.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Successor> {
		if self.total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..self.total);
		for (successor, count) in &self.counts {
			if r < *count {
				return Some(successor);
			}
			r -= count;
		}

		// Unreachable while `total` matches the counts.
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn add_keeps_total_in_sync() {
		let mut dist = SuccessorDistribution::new();
		dist.add("x".into());
		dist.add("y".into());
		dist.add("y".into());
		dist.add(Successor::End);

		assert_eq!(dist.total(), 4);
		assert_eq!(dist.len(), 3);
		assert_eq!(dist.count(&"y".into()), 2);
		assert_eq!(dist.count(&Successor::End), 1);
		assert_eq!(dist.count(&"z".into()), 0);
		assert_eq!(dist.iter().map(|(_, c)| c).sum::<usize>(), dist.total());
	}

	#[test]
	fn end_marker_is_not_an_empty_word() {
		let mut dist = SuccessorDistribution::new();
		dist.add(Successor::Word(String::new()));
		dist.add(Successor::End);

		assert_eq!(dist.len(), 2);
		assert_eq!(dist.count(&Successor::End), 1);
		assert!(Successor::End.as_word().is_none());
		assert_eq!(Successor::Word(String::new()).as_word(), Some(""));
	}

	#[test]
	fn empty_distribution_samples_nothing() {
		let dist = SuccessorDistribution::new();
		let mut rng = StdRng::seed_from_u64(1);
		assert!(dist.sample(&mut rng).is_none());
	}

	#[test]
	fn single_successor_is_always_drawn() {
		let mut dist = SuccessorDistribution::new();
		dist.add("only".into());
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..100 {
			assert_eq!(dist.sample(&mut rng), Some(&Successor::from("only")));
		}
	}

	#[test]
	fn sampling_follows_the_weights() {
		let mut dist = SuccessorDistribution::new();
		dist.add("x".into());
		for _ in 0..3 {
			dist.add("y".into());
		}

		let mut rng = StdRng::seed_from_u64(42);
		let draws = 10_000;
		let mut xs = 0usize;
		let mut ys = 0usize;
		for _ in 0..draws {
			match dist.sample(&mut rng).and_then(Successor::as_word) {
				Some("x") => xs += 1,
				Some("y") => ys += 1,
				other => panic!("unexpected draw {other:?}"),
			}
		}

		assert_eq!(xs + ys, draws);
		let ratio = ys as f64 / xs as f64;
		assert!((2.6..=3.4).contains(&ratio), "y/x ratio was {ratio}");
	}
}
