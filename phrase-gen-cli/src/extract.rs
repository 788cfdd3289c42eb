use scraper::{Html, Selector};

/// Returns the text of every `<p>` element holding at least one
/// alphanumeric character.
///
/// Markup is discarded. Each paragraph ends with a newline so that one
/// paragraph becomes one line of the corpus.
pub fn extract_paragraphs(html: &str) -> String {
	let document = Html::parse_document(html);
	let selector = Selector::parse("p").expect("paragraph selector is valid");

	let mut text = String::new();
	for element in document.select(&selector) {
		let paragraph: String = element.text().collect();
		if !paragraph.chars().any(char::is_alphanumeric) {
			continue;
		}
		text.push_str(&paragraph);
		if !paragraph.ends_with('\n') {
			text.push('\n');
		}
	}
	text
}
