use serde::{Deserialize, Serialize};

/// One scraped listing. `id` is the 1-based visit order and doubles as the
/// name of the listing's image directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ad {
    pub id: u32,
    pub href: String,
    pub title: String,
    pub price: i64,
    pub mileage: i64,
    pub color: String,
    pub power: i64,
    pub description: String,
}

/// Result document written to `data.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdsDocument {
    pub ads: Vec<Ad>,
}
