use scraper::{Html, Selector};
use std::sync::LazyLock;

static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("paragraph selector is valid"));

/// Collects the text of every `<p>` element in document order.
///
/// Parsing is lenient: malformed markup yields whatever paragraphs can be
/// recovered, possibly none.
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);

    let paragraphs = doc
        .select(&PARAGRAPH)
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>();

    ::log::trace!("HTML parser found {} paragraphs", paragraphs.len());
    paragraphs
}
