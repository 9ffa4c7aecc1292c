pub mod extract;
pub mod http;
pub mod traits;
pub mod truckscout;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use http::HttpPageSource;
pub use truckscout::TruckScoutScraper;
pub use types::ScraperConfig;
