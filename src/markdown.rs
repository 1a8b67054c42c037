//! Markdown to HTML conversion and HTML to plain text extraction. Both are
//! thin wrappers: [`pulldown_cmark`] does the rendering and [`scraper`] does
//! the text extraction.

use pulldown_cmark::{html, Options, Parser};
use scraper::Html;

/// Converts markdown to HTML.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, Parser::new_ext(markdown, options));
    output
}

/// Returns every text node of `html` concatenated in document order. No
/// whitespace normalization is done beyond what the parser yields. HTML
/// comments are not text nodes and never show up in the result, so a
/// comment in an article body stays out of its preview.
pub fn to_plain_text(html: &str) -> String {
    Html::parse_fragment(html).root_element().text().collect()
}
