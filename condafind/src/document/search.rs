//! Search-results document parsing.
//!
//! A search-results page lists one `<h5>` row per hit inside the
//! `#search` container. The first anchor in a row links to the package
//! page; the second anchor names the channel the hit was found under,
//! with the channel label inside a `<strong>` element.

use scraper::{ElementRef, Html, Selector};

/// A single search hit: a package-page link paired with the channel it
/// was found under.
///
/// Pairs are produced directly by the parser, so a link can never be
/// matched with the wrong channel label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Package-page reference as it appears in the document.
    ///
    /// The resolver constructs its probe URL from the channel and the
    /// package name rather than following this href; a row only counts
    /// as a candidate when the link half is present.
    pub href: String,

    /// Channel label, trimmed of surrounding whitespace.
    pub channel: String,
}

/// Parsed search-results page.
///
/// Candidates appear in document order; no ordering guarantee beyond
/// that. Malformed markup yields an empty candidate set rather than an
/// error, and rows missing either the link or the channel label are
/// skipped.
#[derive(Debug, Clone, Default)]
pub struct SearchDocument {
    candidates: Vec<Candidate>,
}

impl SearchDocument {
    /// Parses a search-results page body.
    pub fn parse(body: &str) -> Self {
        let row_selector = Selector::parse("#search h5").expect("static selector");
        let anchor_selector = Selector::parse("a").expect("static selector");
        let strong_selector = Selector::parse("strong").expect("static selector");

        let document = Html::parse_document(body);
        let mut candidates = Vec::new();

        for row in document.select(&row_selector) {
            if let Some(candidate) = parse_row(&row, &anchor_selector, &strong_selector) {
                candidates.push(candidate);
            }
        }

        Self { candidates }
    }

    /// Candidates in document order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// True if the page yielded no usable candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

fn parse_row(
    row: &ElementRef<'_>,
    anchor_selector: &Selector,
    strong_selector: &Selector,
) -> Option<Candidate> {
    let mut anchors = row.select(anchor_selector);

    let link = anchors.next()?;
    let channel_anchor = anchors.next()?;

    let href = link.value().attr("href")?.to_string();
    let channel = channel_anchor
        .select(strong_selector)
        .next()?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    if channel.is_empty() {
        return None;
    }

    Some(Candidate { href, channel })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_page(rows: &[(&str, &str)]) -> String {
        let mut body = String::from("<html><body><div id=\"search\">");
        for (name, channel) in rows {
            body.push_str(&format!(
                "<h5><a href=\"/{channel}/{name}\">{name}</a> \
                 <a href=\"/{channel}\"><strong> {channel} </strong></a></h5>"
            ));
        }
        body.push_str("</div></body></html>");
        body
    }

    #[test]
    fn test_parse_pairs_links_with_channels_in_document_order() {
        let body = search_page(&[("numpy", "conda-forge"), ("numpy", "anaconda")]);
        let doc = SearchDocument::parse(&body);

        assert_eq!(
            doc.candidates(),
            &[
                Candidate {
                    href: "/conda-forge/numpy".to_string(),
                    channel: "conda-forge".to_string(),
                },
                Candidate {
                    href: "/anaconda/numpy".to_string(),
                    channel: "anaconda".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_trims_channel_labels() {
        let body = search_page(&[("scipy", "main")]);
        let doc = SearchDocument::parse(&body);
        assert_eq!(doc.candidates()[0].channel, "main");
    }

    #[test]
    fn test_parse_skips_row_without_channel_anchor() {
        let body = "<div id=\"search\">\
                    <h5><a href=\"/orphan/pkg\">pkg</a></h5>\
                    <h5><a href=\"/main/pkg\">pkg</a>\
                    <a href=\"/main\"><strong>main</strong></a></h5>\
                    </div>";
        let doc = SearchDocument::parse(body);

        assert_eq!(doc.candidates().len(), 1);
        assert_eq!(doc.candidates()[0].channel, "main");
    }

    #[test]
    fn test_parse_malformed_markup_yields_empty_set() {
        let doc = SearchDocument::parse("<<<<not really html>>>>");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_page_without_search_section_yields_empty_set() {
        let doc = SearchDocument::parse("<html><body><p>nothing here</p></body></html>");
        assert!(doc.is_empty());
    }
}
