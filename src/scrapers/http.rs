use crate::scrapers::traits::PageSource;
use crate::scrapers::types::ScraperConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// reqwest-backed page source
pub struct HttpPageSource {
    client: Client,
    image_timeout: Duration,
}

impl HttpPageSource {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        Self::with_builder(config, Client::builder())
    }

    fn with_builder(config: &ScraperConfig, builder: ClientBuilder) -> Result<Self> {
        let client = builder
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            image_timeout: config.image_timeout,
        })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_html(&self, url: &str) -> Option<String> {
        debug!("Fetching URL: {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            warn!("{} returned status: {}", url, response.status());
            return None;
        }

        match response.text().await {
            Ok(html) => {
                debug!("Downloaded {} bytes of HTML", html.len());
                Some(html)
            }
            Err(e) => {
                warn!("Failed to read body of {}: {}", url, e);
                None
            }
        }
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .timeout(self.image_timeout)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to fetch {}: {}", url, response.status());
        }

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read body of {}", url))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port and return its URL
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}/page", addr)
    }

    fn source() -> HttpPageSource {
        HttpPageSource::with_builder(&ScraperConfig::default(), Client::builder().no_proxy())
            .unwrap()
    }

    #[tokio::test]
    async fn ok_page_returns_body() {
        let url = serve_once("200 OK", "<h1>Renault</h1>").await;
        assert_eq!(source().fetch_html(&url).await.as_deref(), Some("<h1>Renault</h1>"));
    }

    #[tokio::test]
    async fn not_found_page_is_absent() {
        let url = serve_once("404 Not Found", "gone").await;
        assert_eq!(source().fetch_html(&url).await, None);
    }

    #[tokio::test]
    async fn other_success_status_is_absent() {
        let url = serve_once("204 No Content", "").await;
        assert_eq!(source().fetch_html(&url).await, None);
    }

    #[tokio::test]
    async fn refused_connection_is_absent() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/page", addr);
        assert_eq!(source().fetch_html(&url).await, None);
    }

    #[tokio::test]
    async fn image_bytes_are_returned() {
        let url = serve_once("200 OK", "JPEGDATA").await;
        assert_eq!(source().fetch_bytes(&url).await.unwrap(), b"JPEGDATA");
    }

    #[tokio::test]
    async fn missing_image_is_an_error() {
        let url = serve_once("404 Not Found", "gone").await;
        let err = source().fetch_bytes(&url).await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }
}
