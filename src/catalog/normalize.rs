//! Identifier derivation and result normalization.

use super::models::{ProductListing, SearchItem};

/// Display price used when a result carries no usable offer.
pub const PRICE_NOT_SPECIFIED: &str = "Price not specified";

/// Derives the cart identifier for a catalog item.
///
/// The id is the source label joined to the link with every `/` replaced
/// by a hyphen: deterministic and human-inspectable. Distinct links that
/// only differ in separator placement can collide; no hashing is applied.
pub fn item_id(source: &str, link: &str) -> String {
    format!("{}-{}", source, link.replace('/', "-"))
}

/// Picks the display price of a result.
///
/// Only the first aggregate offer is considered; an offer without a low
/// price counts as no offer at all.
pub fn price_label(item: &SearchItem) -> String {
    match item.pagemap.aggregate_offers.first() {
        Some(offer) if !offer.low_price.is_empty() => {
            format!("from {} {}", offer.low_price, offer.price_currency)
        }
        _ => PRICE_NOT_SPECIFIED.to_string(),
    }
}

/// Maps a raw catalog result into a cart-shaped listing.
///
/// Pure transformation: nothing is inserted anywhere, so it is safe to
/// call repeatedly and concurrently for the same input.
pub fn normalize(item: &SearchItem) -> ProductListing {
    ProductListing {
        id: item_id(&item.display_link, &item.link),
        title: item.title.clone(),
        link: item.link.clone(),
        price: price_label(item),
        shop: item.display_link.clone(),
        description: item.snippet.clone(),
    }
}
