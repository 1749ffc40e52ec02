//! Record types produced by extraction

use serde::{Deserialize, Serialize};

/// One quote extracted from a listing page
///
/// Created once per quote block and never modified afterwards. The `tags`
/// sequence preserves the order of the comma-separated keywords attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub quote: String,
    pub author: String,
    pub tags: Vec<String>,
}

/// One author biography extracted from an author-detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub fullname: String,
    pub born_date: String,
    pub born_location: String,
    pub description: String,
}
