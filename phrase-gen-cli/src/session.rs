use std::io::{self, BufRead, Write};

use log::warn;
use phrase_gen_core::{GenError, MarkovModel, SentenceSampler};
use rand::Rng;
use tempfile::NamedTempFile;

use crate::config::ScrapeConfig;
use crate::error::CorpusError;
use crate::extract::extract_paragraphs;
use crate::fetch::{PageSource, normalize_url};

pub const GREETING: &str = "Hello! Welcome to the Markov chain phrase generator.\n\n\
	You will be asked to enter a URL, and this program will generate 10 phrases \
	in the style of the text from that URL. Or, you can press enter and the \
	default Wikipedia article about pandas will be used.\n";

const PROMPT: &str = "Please enter a URL (or press enter for default): ";
const INVALID_URL: &str = "Invalid URL. Please try again.";
const NOT_ENOUGH_TEXT: &str = "The URL you gave doesn't contain much text. Please enter a URL with more text.";
const NO_USABLE_TEXT: &str = "The URL you gave doesn't contain enough usable text. Please enter a URL with more text.";

/// Fetches `url`, extracts its paragraphs and builds a model from them.
///
/// The extracted text goes through a temporary file, removed on return.
///
/// # Errors
/// - `Transport` if the page cannot be fetched
/// - `InsufficientCorpus` if the text is shorter than `min_corpus_chars`
/// - `Unusable` if no line of the text could be ingested
pub fn build_model<S: PageSource>(source: &S, url: &str, config: &ScrapeConfig) -> Result<MarkovModel, CorpusError> {
	let html = source.fetch(url)?;
	let text = extract_paragraphs(&html);

	let len = text.chars().count();
	if len < config.min_corpus_chars {
		return Err(CorpusError::InsufficientCorpus { len, min: config.min_corpus_chars });
	}

	let mut file = NamedTempFile::new()?;
	file.write_all(text.as_bytes())?;
	file.flush()?;

	let model = MarkovModel::from_file(file.path())?;
	if model.is_empty() {
		return Err(CorpusError::Unusable(GenError::EmptyModel));
	}
	Ok(model)
}

/// Asks for URLs until one yields a usable model.
///
/// Returns the URL and its model, or `None` when the input is exhausted.
///
/// # Errors
/// Only I/O errors on the console or the temporary file are returned,
/// every other failure leads to a new prompt.
pub fn prompt_for_model<R, W, S>(
	input: &mut R,
	output: &mut W,
	source: &S,
	config: &ScrapeConfig,
) -> io::Result<Option<(String, MarkovModel)>>
where
	R: BufRead,
	W: Write,
	S: PageSource,
{
	loop {
		write!(output, "{PROMPT}")?;
		output.flush()?;

		let mut answer = String::new();
		if input.read_line(&mut answer)? == 0 {
			return Ok(None);
		}
		let url = normalize_url(&answer, &config.default_url);

		let message = match build_model(source, &url, config) {
			Ok(model) => return Ok(Some((url, model))),
			Err(CorpusError::Io(e)) => return Err(e),
			Err(e @ CorpusError::Transport(_)) => {
				warn!("{url}: {e}");
				INVALID_URL
			}
			Err(e @ CorpusError::InsufficientCorpus { .. }) => {
				warn!("{url}: {e}");
				NOT_ENOUGH_TEXT
			}
			Err(e @ CorpusError::Unusable(_)) => {
				warn!("{url}: {e}");
				NO_USABLE_TEXT
			}
		};
		writeln!(output, "{message}\n")?;
	}
}

/// Prints `count` labelled phrases generated by `sampler`.
///
/// A phrase that cannot be generated is replaced by a short notice,
/// the remaining phrases are still printed.
pub fn print_phrases<W, R>(
	output: &mut W,
	url: &str,
	sampler: &SentenceSampler<'_>,
	count: usize,
	rng: &mut R,
) -> io::Result<()>
where
	W: Write,
	R: Rng + ?Sized,
{
	writeln!(output, "\nPrinting {count} phrases in the style of \"{url}\"...\n")?;
	for i in 1..=count {
		writeln!(output, "Phrase {i}:")?;
		match sampler.generate_phrase(rng) {
			Ok(phrase) => writeln!(output, "{phrase}")?,
			Err(e) => {
				warn!("phrase {i}: {e}");
				let bounds = sampler.config();
				writeln!(
					output,
					"(no phrase of {} to {} words could be generated)",
					bounds.min_len, bounds.max_len
				)?;
			}
		}
		writeln!(output)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;
	use std::io::Cursor;

	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	const SENTENCE: &str = "The giant panda spends most of its day eating bamboo in the quiet mountain forests of China.";

	/// Serves canned pages, anything else is unreachable.
	struct FakeSource {
		pages: HashMap<String, String>,
	}

	impl FakeSource {
		fn new(pages: &[(&str, String)]) -> Self {
			Self { pages: pages.iter().map(|(url, html)| (url.to_string(), html.clone())).collect() }
		}
	}

	impl PageSource for FakeSource {
		fn fetch(&self, url: &str) -> Result<String, CorpusError> {
			self.pages
				.get(url)
				.cloned()
				.ok_or_else(|| CorpusError::Transport(format!("no route to {url}").into()))
		}
	}

	fn rich_page() -> String {
		let paragraph = format!("<p>{SENTENCE}</p>\n");
		format!("<html><body>{}</body></html>", paragraph.repeat(80))
	}

	fn run_prompt(source: &FakeSource, answers: &str) -> (Option<(String, MarkovModel)>, String) {
		let mut input = Cursor::new(answers.as_bytes().to_vec());
		let mut output = Vec::new();
		let result = prompt_for_model(&mut input, &mut output, source, &ScrapeConfig::default())
			.expect("console I/O works");
		(result, String::from_utf8(output).expect("utf-8 output"))
	}

	#[test]
	fn build_model_accepts_a_rich_page() {
		let source = FakeSource::new(&[("https://rich.example", rich_page())]);
		let model = build_model(&source, "https://rich.example", &ScrapeConfig::default())
			.expect("page is large enough");
		assert!(!model.is_empty());
	}

	#[test]
	fn build_model_gates_small_pages() {
		let source = FakeSource::new(&[("https://small.example", format!("<p>{SENTENCE}</p>"))]);
		let result = build_model(&source, "https://small.example", &ScrapeConfig::default());
		assert!(matches!(result, Err(CorpusError::InsufficientCorpus { min: 5000, .. })));
	}

	#[test]
	fn build_model_rejects_text_without_phrases() {
		let page = "<p>Panda!</p>\n".repeat(1000);
		let source = FakeSource::new(&[("https://words.example", page)]);
		let result = build_model(&source, "https://words.example", &ScrapeConfig::default());
		assert!(matches!(result, Err(CorpusError::Unusable(GenError::EmptyModel))));
	}

	#[test]
	fn prompt_retries_until_a_page_works() {
		let source = FakeSource::new(&[
			("https://small.example", format!("<p>{SENTENCE}</p>")),
			("https://rich.example", rich_page()),
		]);
		let (result, output) = run_prompt(&source, "down.example\nsmall.example\nrich.example\n");

		let (url, model) = result.expect("third answer succeeds");
		assert_eq!(url, "https://rich.example");
		assert!(!model.is_empty());
		assert_eq!(output.matches(PROMPT).count(), 3);
		assert!(output.contains(INVALID_URL));
		assert!(output.contains(NOT_ENOUGH_TEXT));
	}

	#[test]
	fn empty_model_prompts_again() {
		let source = FakeSource::new(&[
			("https://words.example", "<p>Panda!</p>\n".repeat(1000)),
			("https://rich.example", rich_page()),
		]);
		let (result, output) = run_prompt(&source, "words.example\nrich.example\n");

		let (url, _) = result.expect("second answer succeeds");
		assert_eq!(url, "https://rich.example");
		assert!(output.contains(NO_USABLE_TEXT));
		assert!(!output.contains(NOT_ENOUGH_TEXT));
		assert_eq!(output.matches(PROMPT).count(), 2);
	}

	#[test]
	fn blank_answer_fetches_the_default_page() {
		let source = FakeSource::new(&[(crate::config::DEFAULT_URL, rich_page())]);
		let (result, _) = run_prompt(&source, "\n");
		let (url, _) = result.expect("default page is rich");
		assert_eq!(url, crate::config::DEFAULT_URL);
	}

	#[test]
	fn end_of_input_stops_prompting() {
		let source = FakeSource::new(&[]);
		let (result, output) = run_prompt(&source, "nowhere.example\n");
		assert!(result.is_none());
		assert!(output.contains(INVALID_URL));
		assert_eq!(output.matches(PROMPT).count(), 2);
	}

	#[test]
	fn prints_ten_labelled_phrases() {
		let text = format!("{SENTENCE}\n").repeat(5);
		let model = MarkovModel::from_text(&text);
		let sampler = SentenceSampler::with_defaults(&model);
		let mut rng = StdRng::seed_from_u64(10);
		let mut output = Vec::new();

		print_phrases(&mut output, "https://rich.example", &sampler, 10, &mut rng).expect("write to memory");
		let output = String::from_utf8(output).expect("utf-8 output");

		assert!(output.contains("Printing 10 phrases in the style of \"https://rich.example\"..."));
		for i in 1..=10 {
			assert!(output.contains(&format!("Phrase {i}:\n")), "missing phrase {i}");
		}
		assert!(!output.contains("Phrase 11:"));
		assert!(!output.contains("no phrase"));
	}

	#[test]
	fn unreachable_bounds_print_a_notice() {
		let model = MarkovModel::from_text("too short to use\n");
		let config = phrase_gen_core::GenerationConfig { max_attempts: 10, ..Default::default() };
		let sampler = SentenceSampler::new(&model, config).expect("valid config");
		let mut rng = StdRng::seed_from_u64(10);
		let mut output = Vec::new();

		print_phrases(&mut output, "https://x.example", &sampler, 2, &mut rng).expect("write to memory");
		let output = String::from_utf8(output).expect("utf-8 output");
		assert_eq!(output.matches("(no phrase of 10 to 20 words could be generated)").count(), 2);
	}
}
