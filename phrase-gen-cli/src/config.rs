use std::time::Duration;

use phrase_gen_core::GenerationConfig;

/// Page used when the user just presses enter.
pub const DEFAULT_URL: &str = "https://en.wikipedia.org/wiki/Giant_panda";

/// Minimum amount of extracted text, in characters, to build a model from.
pub const MIN_CORPUS_CHARS: usize = 5000;

/// Runtime settings of the command line front-end.
///
/// There are no flags and nothing is read from disk: the defaults are the
/// configuration. Log verbosity is controlled through `RUST_LOG`.
#[derive(Clone, Debug)]
pub struct ScrapeConfig {
	/// URL fetched on a blank answer.
	pub default_url: String,

	/// Pages with less extracted text than this are refused.
	pub min_corpus_chars: usize,

	/// Number of phrases printed once the model is built.
	pub phrase_count: usize,

	/// Timeout of the whole HTTP request.
	pub timeout: Duration,

	pub user_agent: String,

	/// Sentence bounds passed to the sampler.
	pub generation: GenerationConfig,
}

impl Default for ScrapeConfig {
	fn default() -> Self {
		Self {
			default_url: DEFAULT_URL.to_owned(),
			min_corpus_chars: MIN_CORPUS_CHARS,
			phrase_count: 10,
			timeout: Duration::from_secs(10),
			user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_owned(),
			generation: GenerationConfig::default(),
		}
	}
}
