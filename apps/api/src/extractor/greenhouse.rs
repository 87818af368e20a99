//! Greenhouse posting pages.
//!
//! The description lives inside `#content` as a flat run of paragraphs and
//! bullet lists. Each list item becomes a `•`-prefixed line and each
//! paragraph a trimmed block; the result is then re-split and stripped of
//! blank lines so paragraph and bullet boundaries survive without the page's
//! incidental whitespace.

use scraper::{Html, Selector};

pub fn extract(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);

    let content = Selector::parse("#content").unwrap();
    let blocks = Selector::parse("p, ul").unwrap();
    let items = Selector::parse("li").unwrap();

    let container = doc.select(&content).next()?;

    let mut description = String::new();
    for element in container.select(&blocks) {
        if element.value().name() == "ul" {
            for li in element.select(&items) {
                let text = li.text().collect::<String>();
                description.push_str(&format!("• {}\n", text.trim()));
            }
        } else {
            let text = element.text().collect::<String>();
            description.push_str(&format!("{}\n\n", text.trim()));
        }
    }

    let normalized = description
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    (!normalized.is_empty()).then_some(normalized)
}
