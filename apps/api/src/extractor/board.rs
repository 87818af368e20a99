//! Job-board detection from posting URLs.

/// The job boards the extractor knows how to read, plus `Unknown` for
/// everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobBoard {
    Workday,
    Greenhouse,
    Lever,
    Unknown,
}

impl JobBoard {
    /// Detects the board by case-insensitive substring match on the URL,
    /// checked in a fixed order so a URL carrying two markers resolves
    /// deterministically. The markers usually sit in a subdomain
    /// (`acme.wd5.myworkdayjobs.com`, `boards.greenhouse.io`,
    /// `jobs.lever.co`), but any occurrence anywhere in the URL counts.
    pub fn detect(url: &str) -> Self {
        let url = url.to_lowercase();
        if url.contains("workday") {
            JobBoard::Workday
        } else if url.contains("greenhouse") {
            JobBoard::Greenhouse
        } else if url.contains("lever.co") {
            JobBoard::Lever
        } else {
            JobBoard::Unknown
        }
    }
}
