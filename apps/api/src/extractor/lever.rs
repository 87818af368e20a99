//! Lever posting pages.
//!
//! Lever splits a posting into headline, category chips, and `data-qa`-tagged
//! sections. The extractor reassembles them into one plain-text block with
//! nine fixed field labels. Labels are always emitted, in the same order; a
//! section missing from the page renders with empty content rather than
//! dropping the label, so the output for a fetched page is never empty.

use scraper::{Html, Selector};

pub fn extract(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);

    let job_title = select_text(&doc, ".posting-headline h2");
    let location = select_text(&doc, ".posting-categories .location");
    let department = select_text(&doc, ".posting-categories .department");
    let workplace_type = select_text(&doc, ".posting-categories .workplaceTypes");
    let job_description = select_text(&doc, r#".section[data-qa="job-description"]"#);
    let responsibilities = labeled_section_list(&doc, "Responsibilities");
    let qualifications = labeled_section_list(&doc, "Qualifications");
    let salary_range = select_text(&doc, r#".section[data-qa="salary-range"]"#);
    let closing = select_text(&doc, r#".section[data-qa="closing-description"]"#);

    Some(
        format!(
            "Job Title: {job_title}\n\
             Location: {location}\n\
             Department: {department}\n\
             Workplace Type: {workplace_type}\n\
             \n\
             Job Description:\n{job_description}\n\
             \n\
             Responsibilities:\n{responsibilities}\n\
             \n\
             Qualifications:\n{qualifications}\n\
             \n\
             Salary Range:\n{salary_range}\n\
             \n\
             Additional Information:\n{closing}"
        )
        .trim()
        .to_string(),
    )
}

/// Trimmed text of the first element matching `selector`; empty when nothing
/// matches.
fn select_text(doc: &Html, selector: &str) -> String {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Concatenated text of the `ul` lists inside `.section` blocks whose text
/// contains `label`. Lever marks these sections only by their heading text,
/// so a substring check over the section stands in for a `:contains()`
/// selector.
fn labeled_section_list(doc: &Html, label: &str) -> String {
    let sections = Selector::parse(".section").unwrap();
    let lists = Selector::parse("ul").unwrap();

    let mut text = String::new();
    for section in doc.select(&sections) {
        if !section.text().collect::<String>().contains(label) {
            continue;
        }
        for list in section.select(&lists) {
            text.push_str(&list.text().collect::<String>());
        }
    }

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTING: &str = r#"<html><body>
        <div class="posting-headline"><h2>Senior Rust Engineer</h2></div>
        <div class="posting-categories">
            <div class="location">New York, NY</div>
            <div class="department">Platform</div>
            <div class="workplaceTypes">Remote</div>
        </div>
        <div class="section" data-qa="job-description">Build the core data pipeline.</div>
        <div class="section"><h3>Responsibilities</h3><ul><li>Design APIs</li><li>Review code</li></ul></div>
        <div class="section"><h3>Qualifications</h3><ul><li>Production Rust experience</li></ul></div>
        <div class="section" data-qa="salary-range">$150,000 - $200,000</div>
        <div class="section" data-qa="closing-description">We are an equal opportunity employer.</div>
    </body></html>"#;

    const LABELS: [&str; 9] = [
        "Job Title:",
        "Location:",
        "Department:",
        "Workplace Type:",
        "Job Description:",
        "Responsibilities:",
        "Qualifications:",
        "Salary Range:",
        "Additional Information:",
    ];

    #[test]
    fn test_all_nine_labels_present_in_fixed_order() {
        let text = extract(POSTING).unwrap();

        let mut from = 0;
        for label in LABELS {
            let pos = text[from..]
                .find(label)
                .unwrap_or_else(|| panic!("label {label:?} missing or out of order"));
            from += pos + label.len();
        }
    }

    #[test]
    fn test_fields_filled_from_page_sections() {
        let text = extract(POSTING).unwrap();

        assert!(text.contains("Job Title: Senior Rust Engineer"));
        assert!(text.contains("Location: New York, NY"));
        assert!(text.contains("Build the core data pipeline."));
        assert!(text.contains("Design APIs"));
        assert!(text.contains("Production Rust experience"));
        assert!(text.contains("$150,000 - $200,000"));
        assert!(text.contains("We are an equal opportunity employer."));
    }

    #[test]
    fn test_missing_sections_keep_labels_with_empty_content() {
        let text = extract("<html><body></body></html>").unwrap();

        for label in LABELS {
            assert!(text.contains(label), "label {label:?} must survive an empty page");
        }
        assert!(text.starts_with("Job Title:"));
        assert!(text.ends_with("Additional Information:"));
    }

    #[test]
    fn test_labeled_section_found_by_heading_text() {
        let html = r#"<div class="section"><h3>Responsibilities</h3><ul><li>Operate the fleet</li></ul></div>"#;
        let text = extract(html).unwrap();

        assert!(text.contains("Operate the fleet"));
    }

    #[test]
    fn test_unlabeled_section_lists_are_ignored() {
        let html = r#"<div class="section"><h3>Perks</h3><ul><li>Free snacks</li></ul></div>"#;
        let text = extract(html).unwrap();

        assert!(!text.contains("Free snacks"));
    }
}
