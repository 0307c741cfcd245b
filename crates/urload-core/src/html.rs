//! Link, image and title extraction from fetched HTML.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img[src]").expect("image selector is valid"));

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector is valid"));

/// Absolute targets of every `<a href>` in document order.
pub fn extract_links(body: &str, base: &str) -> Vec<String> {
    extract_attr(body, base, &ANCHOR_SELECTOR, "href")
}

/// Absolute sources of every `<img src>` in document order.
pub fn extract_images(body: &str, base: &str) -> Vec<String> {
    extract_attr(body, base, &IMAGE_SELECTOR, "src")
}

/// Trimmed text of the first `<title>`. An empty element gives `Some("")`;
/// `None` means the page has no title element.
pub fn extract_title(body: &str) -> Option<String> {
    let doc = Html::parse_document(body);
    let title = doc.select(&TITLE_SELECTOR).next()?;
    let text = title.text().collect::<String>();
    Some(text.trim().to_string())
}

fn extract_attr(body: &str, base: &str, selector: &Selector, attr: &str) -> Vec<String> {
    let base = match Url::parse(base) {
        Ok(base) => base,
        Err(e) => {
            tracing::debug!(base, "cannot resolve against base url: {}", e);
            return Vec::new();
        }
    };
    let doc = Html::parse_document(body);
    doc.select(selector)
        .filter_map(|el| el.value().attr(attr))
        .filter_map(|raw| base.join(raw.trim()).ok())
        .map(String::from)
        .collect()
}
