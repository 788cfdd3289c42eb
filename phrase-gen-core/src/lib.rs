//! Word-level Markov chain phrase generation library.
//!
//! This crate provides the pieces needed to imitate the style of a text:
//! - Line normalization and word tokenization
//! - A second-order (word pair) Markov model with weighted successors
//! - Bounded rejection sampling of sentences from that model
//! - Post-processing of generated sentences for display
//!
//! Fetching and extracting the source text is left to the caller.

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// Markov model, sentence sampler and their configuration.
pub mod model;

/// Text normalization before ingestion and cleaning after generation.
pub mod text;

/// I/O utilities (corpus file loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::GenError;
pub use model::config::GenerationConfig;
pub use model::context::Context;
pub use model::markov_model::MarkovModel;
pub use model::sampler::SentenceSampler;
pub use model::successors::{Successor, SuccessorDistribution};
