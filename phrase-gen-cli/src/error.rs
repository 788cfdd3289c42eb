use phrase_gen_core::GenError;

/// Reasons a URL could not be turned into a model.
///
/// Every variant except `Io` is recovered by asking for another URL.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
	#[error("could not fetch the page: {0}")]
	Transport(Box<dyn std::error::Error + Send + Sync>),

	#[error("only {len} characters of text, at least {min} needed")]
	InsufficientCorpus { len: usize, min: usize },

	/// The text passed the size gate but no line had two words.
	#[error("no usable text: {0}")]
	Unusable(GenError),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for CorpusError {
	fn from(error: reqwest::Error) -> Self {
		CorpusError::Transport(Box::new(error))
	}
}
