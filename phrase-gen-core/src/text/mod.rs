//! Text processing around the model.
//!
//! `tokenizer` runs before ingestion, `cleaner` after generation.

/// Line normalization and word splitting.
pub mod tokenizer;

/// Display cleanup of generated sentences.
pub mod cleaner;
