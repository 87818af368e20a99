//! Job-description extraction from job-board posting pages.
//!
//! Best-effort by contract: `extract` never fails. Fetch errors, unsupported
//! hosts, and pages missing the expected structure all come back as `None`,
//! and the caller decides what an absent description means.

pub mod board;
pub mod fetch;
mod greenhouse;
mod lever;
mod workday;

use tracing::{debug, warn};

use crate::extractor::board::JobBoard;
use crate::extractor::fetch::PageFetcher;

/// Extracts job descriptions from supported job-board posting URLs.
#[derive(Clone)]
pub struct JobDescriptionExtractor {
    fetcher: PageFetcher,
}

impl JobDescriptionExtractor {
    pub fn new() -> Self {
        Self {
            fetcher: PageFetcher::new(),
        }
    }

    /// Fetches `url` and applies the extraction rule for whichever board the
    /// URL matches. The page is fetched before dispatch so fetch failures
    /// behave the same for every URL, supported board or not.
    pub async fn extract(&self, url: &str) -> Option<String> {
        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Failed to fetch job page {url}: {e}");
                return None;
            }
        };

        let board = JobBoard::detect(url);
        debug!("Detected job board {board:?} for {url}");

        let description = match board {
            JobBoard::Workday => workday::extract(&html),
            JobBoard::Greenhouse => greenhouse::extract(&html),
            JobBoard::Lever => lever::extract(&html),
            JobBoard::Unknown => None,
        };

        if description.is_none() {
            warn!("No job description found at {url} (board: {board:?})");
        }

        description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKDAY_PAGE: &str = r#"<html><head>
        <script type="application/ld+json">{"description": "Own the billing platform."}</script>
    </head><body></body></html>"#;

    #[tokio::test]
    async fn test_extracts_from_fetched_workday_page() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/workday/job/123")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(WORKDAY_PAGE)
            .create_async()
            .await;

        let extractor = JobDescriptionExtractor::new();
        let url = format!("{}/workday/job/123", server.url());

        assert_eq!(
            extractor.extract(&url).await.as_deref(),
            Some("Own the billing platform.")
        );
    }

    #[tokio::test]
    async fn test_browser_headers_are_sent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/workday/job/123")
            .match_header("user-agent", mockito::Matcher::Regex("Mozilla/5.0".to_string()))
            .match_header("accept-language", "en-US,en;q=0.9")
            .with_status(200)
            .with_body(WORKDAY_PAGE)
            .create_async()
            .await;

        let extractor = JobDescriptionExtractor::new();
        let url = format!("{}/workday/job/123", server.url());
        extractor.extract(&url).await;

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_2xx_status_is_none() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/workday/job/404")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let extractor = JobDescriptionExtractor::new();
        let url = format!("{}/workday/job/404", server.url());

        assert_eq!(extractor.extract(&url).await, None);
    }

    #[tokio::test]
    async fn test_known_board_page_without_structure_is_none() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/workday/job/55")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body><p>maintenance page</p></body></html>")
            .create_async()
            .await;

        let extractor = JobDescriptionExtractor::new();
        let url = format!("{}/workday/job/55", server.url());

        assert_eq!(extractor.extract(&url).await, None);
    }

    #[tokio::test]
    async fn test_unknown_board_is_none_even_for_valid_page() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/careers/123")
            .with_status(200)
            .with_body("<html><body><p>A perfectly good job posting</p></body></html>")
            .create_async()
            .await;

        let extractor = JobDescriptionExtractor::new();
        let url = format!("{}/careers/123", server.url());

        assert_eq!(extractor.extract(&url).await, None);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_none() {
        let extractor = JobDescriptionExtractor::new();
        // port 1 on localhost is never listening
        assert_eq!(extractor.extract("http://127.0.0.1:1/workday/job").await, None);
    }

    #[tokio::test]
    async fn test_redirect_is_followed() {
        let mut server = mockito::Server::new_async().await;
        let target = format!("{}/workday/final", server.url());
        let _mock_redirect = server
            .mock("GET", "/workday/start")
            .with_status(302)
            .with_header("location", &target)
            .create_async()
            .await;
        let _mock_target = server
            .mock("GET", "/workday/final")
            .with_status(200)
            .with_body(WORKDAY_PAGE)
            .create_async()
            .await;

        let extractor = JobDescriptionExtractor::new();
        let url = format!("{}/workday/start", server.url());

        assert_eq!(
            extractor.extract(&url).await.as_deref(),
            Some("Own the billing platform.")
        );
    }

    #[tokio::test]
    async fn test_redirect_chain_beyond_limit_is_none() {
        let mut server = mockito::Server::new_async().await;
        let mut mocks = Vec::new();
        for hop in 0..6 {
            let next = format!("{}/workday/hop{}", server.url(), hop + 1);
            let mock = server
                .mock("GET", format!("/workday/hop{hop}").as_str())
                .with_status(302)
                .with_header("location", &next)
                .create_async()
                .await;
            mocks.push(mock);
        }
        let _mock_final = server
            .mock("GET", "/workday/hop6")
            .with_status(200)
            .with_body(WORKDAY_PAGE)
            .create_async()
            .await;

        let extractor = JobDescriptionExtractor::new();
        let url = format!("{}/workday/hop0", server.url());

        assert_eq!(extractor.extract(&url).await, None);
    }
}
