use crate::models::AdsDocument;
use crate::scrapers::extract;
use crate::scrapers::traits::PageSource;
use crate::scrapers::types::ScraperConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

const DATA_FILE: &str = "data.json";

/// Pipeline over the TruckScout24 catalog.
///
/// Each pass fetches the catalog page for the current page number, follows
/// its first listing link, records the listing and saves its photos. The
/// page number is also the record id and the name of the image folder. The
/// run ends at the first catalog page without a listing link, and only then
/// is `data.json` written.
pub struct TruckScoutScraper<S: PageSource> {
    config: ScraperConfig,
    source: S,
    base_url: Url,
    output_dir: PathBuf,
    page_no: u32,
    data: AdsDocument,
}

impl<S: PageSource> TruckScoutScraper<S> {
    /// Create a scraper writing into `output_dir`, creating the directory if needed
    pub fn new(config: ScraperConfig, source: S, output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;

        let base_url = Url::parse(&config.website_url)
            .with_context(|| format!("Invalid website URL: {}", config.website_url))?;

        Ok(Self {
            config,
            source,
            base_url,
            output_dir,
            page_no: 1,
            data: AdsDocument::default(),
        })
    }

    /// Run the whole pipeline and return the collected listings
    pub async fn process(&mut self) -> Result<&AdsDocument> {
        loop {
            let catalog_url = self.config.catalog_url(self.page_no);
            let catalog = self.fetch_page(&catalog_url).await?;

            let Some(href) = extract::first_ad_href(&catalog)? else {
                info!("No listing on catalog page {}, stopping", self.page_no);
                break;
            };

            let ad_url = resolve_ad_url(&self.base_url, &href)?;

            info!("Scraping listing {}: {}", self.page_no, ad_url);
            let page = self.fetch_page(&ad_url).await?;
            let detail =
                extract::parse_detail(&page, self.page_no, &ad_url, self.config.image_limit)?;
            debug!("Extracted {:?}", detail.ad);

            self.data.ads.push(detail.ad);
            self.download_images(&detail.images).await?;
            self.page_no += 1;
        }

        self.save_json().await?;
        info!("💾 Saved {} listings to {}", self.data.ads.len(), self.data_path().display());

        Ok(&self.data)
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        match self.source.fetch_html(url).await {
            Some(html) => Ok(html),
            None => anyhow::bail!("No document at {}", url),
        }
    }

    async fn download_images(&self, urls: &[String]) -> Result<()> {
        let dir = self.output_dir.join(self.page_no.to_string());
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        for (i, url) in urls.iter().enumerate() {
            let path = dir.join(extract::image_file_name(i + 1, url));
            let bytes = self.source.fetch_bytes(url).await?;
            write_file(&path, &bytes).await?;
            debug!("Saved {} ({} bytes)", path.display(), bytes.len());
        }

        info!("Saved {} images for listing {}", urls.len(), self.page_no);
        Ok(())
    }

    async fn save_json(&self) -> Result<()> {
        let json = serde_json::to_vec(&self.data)?;
        write_file(&self.data_path(), &json).await
    }

    fn data_path(&self) -> PathBuf {
        self.output_dir.join(DATA_FILE)
    }
}

/// Absolute URL of a listing link. Relative links resolve against the site
/// root; absolute links, including ones on other hosts, are followed as given.
fn resolve_ad_url(base: &Url, href: &str) -> Result<String> {
    let url = base
        .join(href)
        .with_context(|| format!("Invalid listing link: {}", href))?;
    Ok(url.to_string())
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
