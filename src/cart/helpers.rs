//! Shopping Cart Rendering Helpers

use super::models::CartItem;
use std::collections::HashMap;

/// Text returned by `view_cart` when the store is empty.
pub const EMPTY_CART_TEXT: &str = "🛒 Cart is empty";

/// Renders a cart snapshot as a single human-readable text block.
///
/// Items are listed in identifier order so the output is deterministic.
pub fn format_cart(items: &HashMap<String, CartItem>) -> String {
    if items.is_empty() {
        return EMPTY_CART_TEXT.to_string();
    }

    let mut sorted: Vec<&CartItem> = items.values().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));

    let total_quantity: u32 = sorted.iter().map(|i| i.quantity).sum();

    let blocks: Vec<String> = sorted
        .iter()
        .map(|item| {
            format!(
                "📦 {}\n🏪 Shop: {}\n💰 Price: {}\n🔢 Quantity: {}\n🔗 Link: {}\n🆔 ID: {}\n---",
                item.title, item.shop, item.price, item.quantity, item.link, item.id
            )
        })
        .collect();

    format!(
        "🛒 Your cart\n📊 Total items: {} (unique: {})\n\n{}\n\n💡 Use remove_from_cart with an item ID to remove it",
        total_quantity,
        sorted.len(),
        blocks.join("\n")
    )
}
