use anyhow::Result;
use async_trait::async_trait;

/// Network access used by the scraper.
/// Kept behind a trait so the pipeline can run against canned pages.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch an HTML page. Returns `None` on any non-200 status or transport
    /// failure; callers decide what an absent page means.
    async fn fetch_html(&self, url: &str) -> Option<String>;

    /// Fetch raw bytes (images). Every failure is an error.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}
