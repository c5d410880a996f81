//! Article title and body extraction from fetched HTML.
//!
//! Extraction is deliberately simple: the first `h1` is the title, the body
//! comes from the known article containers when present, otherwise from the
//! page's paragraphs. Script, style, and page-chrome subtrees never
//! contribute text. An unusable page yields an empty [`Page`], never an
//! error.

use scraper::{ElementRef, Html, Selector};

/// Subtrees whose text never belongs to the article body.
const EXCLUDED_TAGS: &[&str] = &["script", "style", "header", "footer", "nav"];

/// Container selectors tried, in order, for the article body.
const CONTENT_SELECTORS: &[&str] = &["div.td-post-content", "div.tdb-block-inner.td-fix-index"];

/// Optional title and body text of one fetched document.
///
/// Both fields absent means the fetch or extraction failed and the document
/// gets the all-zero metrics substitution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl Page {
    /// The page produced when a document could not be fetched or parsed.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }

    /// Concatenates title and body into one document: title first, separated
    /// by a blank line, absent parts omitted. `None` when both are absent.
    pub fn full_text(&self) -> Option<String> {
        match (&self.title, &self.body) {
            (None, None) => None,
            (Some(title), None) => Some(title.clone()),
            (None, Some(body)) => Some(body.clone()),
            (Some(title), Some(body)) => Some(format!("{title}\n\n{body}")),
        }
    }
}

/// Extracts the article title and body from raw HTML.
pub fn extract_page(html: &str) -> Page {
    let doc = Html::parse_document(html);

    let title = extract_title(&doc);
    let body = extract_body(&doc);

    Page { title, body }
}

fn extract_title(doc: &Html) -> Option<String> {
    let h1 = Selector::parse("h1").unwrap();
    let heading = doc.select(&h1).next()?;
    let text: String = heading.text().map(str::trim).collect::<Vec<_>>().join(" ");
    let text = text.trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}

fn extract_body(doc: &Html) -> Option<String> {
    for selector in CONTENT_SELECTORS {
        let sel = Selector::parse(selector).unwrap();
        if let Some(container) = doc.select(&sel).next() {
            let text = block_text(container);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }

    // no known container: fall back to joining every paragraph on the page
    let p = Selector::parse("p").unwrap();
    let paragraphs: Vec<String> = doc
        .select(&p)
        .map(|el| el.text().map(str::trim).collect::<Vec<_>>().join(" ").trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if paragraphs.is_empty() { None } else { Some(paragraphs.join("\n")) }
}

/// Collects the text of an element, one trimmed segment per line, skipping
/// the subtrees listed in [`EXCLUDED_TAGS`].
fn block_text(root: ElementRef<'_>) -> String {
    let mut parts = Vec::new();
    collect_text(root, &mut parts);
    parts.join("\n")
}

fn collect_text(el: ElementRef<'_>, parts: &mut Vec<String>) {
    if EXCLUDED_TAGS.contains(&el.value().name()) {
        return;
    }
    for child in el.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            collect_text(child_el, parts);
        } else if let scraper::Node::Text(text) = child.value() {
            let text = text.trim();
            if !text.is_empty() {
                parts.push(text.to_string());
            }
        }
    }
}
