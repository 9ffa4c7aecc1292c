use std::time::Duration;

/// Site and download settings for the TruckScout24 scraper
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Site root, used to resolve relative detail links
    pub website_url: String,
    /// Catalog path below the site root
    pub catalog_path: String,
    /// Per-request timeout for pages
    pub timeout: Duration,
    /// Per-request timeout for gallery images, which are much larger than pages
    pub image_timeout: Duration,
    /// Maximum number of gallery images saved per listing
    pub image_limit: usize,
    pub user_agent: String,
}

impl ScraperConfig {
    /// Catalog URL for a given page number
    pub fn catalog_url(&self, page_no: u32) -> String {
        format!(
            "{}{}?currentpage={}",
            self.website_url, self.catalog_path, page_no
        )
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            website_url: "https://www.truckscout24.de".to_string(),
            catalog_path: "/transporter/gebraucht/kuehl-iso-frischdienst/renault".to_string(),
            timeout: Duration::from_secs(5),
            image_timeout: Duration::from_secs(60),
            image_limit: 3,
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_url_carries_page_number() {
        let config = ScraperConfig::default();
        assert_eq!(
            config.catalog_url(7),
            "https://www.truckscout24.de/transporter/gebraucht/kuehl-iso-frischdienst/renault?currentpage=7"
        );
    }

    #[test]
    fn images_get_more_time_than_pages() {
        let config = ScraperConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.image_timeout > config.timeout);
    }
}
