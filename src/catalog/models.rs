//! Catalog Wire Models
//!
//! Data structures mirroring the Google Custom Search JSON API response,
//! plus the normalized listing derived from a raw result.

use serde::{Deserialize, Serialize};

// =============================================================================
// Search API Wire Models
// =============================================================================

/// Top-level search response.
///
/// Every field tolerates absence; the upstream API omits whole sections
/// freely depending on the query.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    /// Upstream bookkeeping about the query
    #[serde(rename = "searchInformation", default)]
    pub search_information: SearchInformation,

    /// Ordered result list
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// Timing and total-count metadata reported by the search API.
#[derive(Debug, Default, Deserialize)]
pub struct SearchInformation {
    /// Server-side search duration in seconds
    #[serde(rename = "searchTime", default)]
    pub search_time: f64,

    /// Total match count; the API reports it as a string
    #[serde(rename = "totalResults", default)]
    pub total_results: String,
}

/// One raw catalog result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchItem {
    /// Result title
    #[serde(default)]
    pub title: String,

    /// Full link to the product page
    #[serde(default)]
    pub link: String,

    /// Display form of the source host, used as the shop label
    #[serde(rename = "displayLink", default)]
    pub display_link: String,

    /// Short excerpt describing the result
    #[serde(default)]
    pub snippet: String,

    /// Structured-data fragment extracted from the page
    #[serde(default)]
    pub pagemap: PageMap,
}

/// Structured-data fragment of a result; only offers are consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMap {
    /// Price ranges advertised by the shop
    #[serde(rename = "aggregateoffer", default)]
    pub aggregate_offers: Vec<AggregateOffer>,
}

/// Price range advertised by the shop. All fields arrive as strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregateOffer {
    /// ISO currency code, e.g. `"USD"`
    #[serde(rename = "pricecurrency", default)]
    pub price_currency: String,

    /// Lower bound of the advertised price range
    #[serde(rename = "lowprice", default)]
    pub low_price: String,

    /// Upper bound of the advertised price range
    #[serde(rename = "highprice", default)]
    pub high_price: String,
}

// =============================================================================
// Normalized Listing
// =============================================================================

/// A search result normalized into the shape a cart line item is built
/// from. Produced by [`normalize`](super::normalize::normalize); it is a
/// pure projection, never stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductListing {
    /// Derived cart identifier
    pub id: String,

    /// Product title
    pub title: String,

    /// Full link to the product page
    pub link: String,

    /// Display price string
    pub price: String,

    /// Shop label
    pub shop: String,

    /// Short product description
    pub description: String,
}

/// Input for the search_products tool
#[derive(Debug, Deserialize)]
pub struct SearchProductsInput {
    /// Search query
    pub query: String,

    /// Requested result count; floats are truncated and clamped
    #[serde(default)]
    pub num_results: Option<f64>,
}
