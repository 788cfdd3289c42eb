//! Interactive phrase generator.
//!
//! Asks for a URL, builds a word-level Markov chain from the paragraphs of
//! that page and prints phrases in the same style.

use std::io::{self, Write};

use log::info;
use phrase_gen_core::SentenceSampler;

mod config;
mod error;
mod extract;
mod fetch;
mod session;

use config::ScrapeConfig;
use fetch::HttpFetcher;
use session::{GREETING, print_phrases, prompt_for_model};

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();

	let config = ScrapeConfig::default();
	let fetcher = HttpFetcher::new(&config)?;
	let sampler_config = config.generation.clone();

	let stdin = io::stdin();
	let mut input = stdin.lock();
	let stdout = io::stdout();
	let mut output = stdout.lock();

	writeln!(output, "{GREETING}")?;

	let Some((url, model)) = prompt_for_model(&mut input, &mut output, &fetcher, &config)? else {
		// End of input while prompting
		writeln!(output)?;
		return Ok(());
	};
	info!("model built from {} with {} contexts", url, model.len());

	let sampler = SentenceSampler::new(&model, sampler_config)?;
	print_phrases(&mut output, &url, &sampler, config.phrase_count, &mut rand::rng())?;
	output.flush()?;

	Ok(())
}
