use log::{debug, info};
use reqwest::blocking::Client;

use crate::config::ScrapeConfig;
use crate::error::CorpusError;

/// Anything able to return the HTML of a page.
pub trait PageSource {
	fn fetch(&self, url: &str) -> Result<String, CorpusError>;
}

/// HTTP fetcher holding a reusable blocking client.
pub struct HttpFetcher {
	client: Client,
}

impl HttpFetcher {
	/// Creates a fetcher with the configured timeout and user agent.
	pub fn new(config: &ScrapeConfig) -> reqwest::Result<Self> {
		let client = Client::builder()
			.timeout(config.timeout)
			.user_agent(config.user_agent.as_str())
			.build()?;
		Ok(Self { client })
	}
}

impl PageSource for HttpFetcher {
	/// Sends a GET request and returns the body of a successful response.
	fn fetch(&self, url: &str) -> Result<String, CorpusError> {
		debug!("GET {url}");
		let response = self.client.get(url).send()?.error_for_status()?;
		let body = response.text()?;
		info!("fetched {} bytes from {}", body.len(), url);
		Ok(body)
	}
}

/// Turns what the user typed into a URL.
///
/// - Blank input gives `default_url`
/// - Input without an `http://` or `https://` scheme gets `https://` prefixed
pub fn normalize_url(input: &str, default_url: &str) -> String {
	let input = input.trim();
	if input.is_empty() {
		return default_url.to_owned();
	}
	if input.starts_with("https://") || input.starts_with("http://") {
		input.to_owned()
	} else {
		format!("https://{input}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DEFAULT: &str = "https://en.wikipedia.org/wiki/Giant_panda";

	#[test]
	fn blank_input_uses_the_default() {
		assert_eq!(normalize_url("", DEFAULT), DEFAULT);
		assert_eq!(normalize_url("   \n", DEFAULT), DEFAULT);
	}

	#[test]
	fn missing_scheme_gets_https() {
		assert_eq!(normalize_url("example.com/page\n", DEFAULT), "https://example.com/page");
	}

	#[test]
	fn existing_scheme_is_kept() {
		assert_eq!(normalize_url("https://example.com", DEFAULT), "https://example.com");
		assert_eq!(normalize_url("http://127.0.0.1:8080/", DEFAULT), "http://127.0.0.1:8080/");
	}

	#[test]
	fn client_builds_from_default_config() {
		assert!(HttpFetcher::new(&ScrapeConfig::default()).is_ok());
	}
}
