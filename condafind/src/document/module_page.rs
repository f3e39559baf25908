//! Channel-specific package page.

use scraper::{Html, Selector};

/// Parsed package page for one channel.
///
/// Fetched lazily, one per probed channel, and discarded after command
/// extraction; the only query it answers is the ordered list of
/// code-formatted text fragments.
#[derive(Debug)]
pub struct ModulePage {
    document: Html,
}

impl ModulePage {
    /// Parses a package-page body.
    pub fn parse(body: &str) -> Self {
        Self {
            document: Html::parse_document(body),
        }
    }

    /// Text of every `<code>` fragment, in document order.
    pub fn code_fragments(&self) -> Vec<String> {
        let code_selector = Selector::parse("code").expect("static selector");
        self.document
            .select(&code_selector)
            .map(|element| element.text().collect::<String>())
            .collect()
    }
}
