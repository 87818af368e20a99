//! Workday posting pages.
//!
//! Workday embeds a JSON-LD `JobPosting` block whose `description` field
//! holds the full text. Older tenant themes render a `.job-description`
//! container instead; that fallback is only consulted when the page has no
//! JSON-LD content at all. A present-but-malformed block aborts extraction,
//! since the fallback would disagree with what the tenant actually publishes.

use scraper::{Html, Selector};
use serde_json::Value;

pub fn extract(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);

    let ld_json = Selector::parse(r#"script[type="application/ld+json"]"#).unwrap();
    let raw = doc
        .select(&ld_json)
        .next()
        .map(|script| script.text().collect::<String>())
        .unwrap_or_default();

    if !raw.is_empty() {
        let data: Value = serde_json::from_str(&raw).ok()?;
        return data
            .get("description")
            .and_then(Value::as_str)
            .filter(|description| !description.is_empty())
            .map(str::to_owned);
    }

    let container = Selector::parse(".job-description").unwrap();
    let description = doc.select(&container).next()?.text().collect::<String>();
    let description = description.trim();

    (!description.is_empty()).then(|| description.to_string())
}
