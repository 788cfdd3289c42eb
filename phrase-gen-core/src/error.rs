use crate::model::context::Context;

/// Errors raised while building or sampling a Markov model.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
	/// The model holds no context, usually because no line had two words.
	#[error("the model is empty, no usable text was ingested")]
	EmptyModel,

	/// A successor was requested for a context the model never saw.
	#[error("unknown context \"{0}\"")]
	UnknownContext(Context),

	/// The rejection sampler gave up.
	#[error("could not generate a valid sentence after {attempts} attempts")]
	NoValidSentence { attempts: usize },

	#[error("invalid sentence length bounds [{min}, {max}]")]
	InvalidLengthBounds { min: usize, max: usize },

	#[error("the number of attempts must be at least 1")]
	InvalidAttempts,
}
