//! Top-level module for the word-level Markov chain.
//!
//! It contains:
//! - The two-word lookup key (`Context`)
//! - Weighted successor counts for one context (`SuccessorDistribution`)
//! - The model itself (`MarkovModel`)
//! - Generation parameters (`GenerationConfig`)
//! - The sentence generation interface (`SentenceSampler`)

/// Sentence length bounds and retry limit used by the sampler.
pub mod config;

/// Ordered pair of consecutive words used as a lookup key.
pub mod context;

/// Second-order word model.
///
/// Handles line ingestion, successor counting,
/// weighted successor sampling and random start selection.
pub mod markov_model;

/// Bounded rejection sampling of whole sentences.
pub mod sampler;

/// Successor tokens and their occurrence counts for one context.
pub mod successors;
