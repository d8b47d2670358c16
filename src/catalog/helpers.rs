//! Search Result Rendering Helpers

use super::models::{ProductListing, SearchResponse};
use super::normalize::normalize;

/// Renders a search response as a single human-readable text block.
///
/// Each result carries the derived cart identifier so the caller can feed
/// it straight into `add_to_cart`.
pub fn format_search_results(query: &str, response: &SearchResponse) -> String {
    let listings: Vec<ProductListing> = response.items.iter().map(normalize).collect();

    let blocks: Vec<String> = listings
        .iter()
        .enumerate()
        .map(|(i, listing)| {
            format!(
                "📦 Item #{}\n🏷️ Title: {}\n🏪 Shop: {}\n💰 Price: {}\n🔗 Link: {}\n📝 Description: {}\n🆔 Cart ID: {}\n---",
                i + 1,
                listing.title,
                listing.shop,
                listing.price,
                listing.link,
                listing.description,
                listing.id
            )
        })
        .collect();

    format!(
        "🔍 Search results for \"{}\"\n📊 Found: {} results in {:.2} seconds\n📋 Showing the first {} results:\n\n{}\n\n💡 Use add_to_cart with an item's cart ID to add it to the cart",
        query,
        response.search_information.total_results,
        response.search_information.search_time,
        blocks.len(),
        blocks.join("\n")
    )
}
