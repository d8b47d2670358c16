//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for cart items
fn default_quantity() -> u32 {
    1
}

/// A single line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Identifier derived from the item's shop and link; the store key
    pub id: String,

    /// Product title
    pub title: String,

    /// Link to the product page
    pub link: String,

    /// Display price, e.g. `"from 9.99 USD"`
    pub price: String,

    /// Shop / source label the item came from
    pub shop: String,

    /// Short product description
    pub description: String,

    /// Number of units; always >= 1 while the item is stored
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl CartItem {
    /// Builds a fresh line item with quantity 1.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
        price: impl Into<String>,
        shop: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            link: link.into(),
            price: price.into(),
            shop: shop.into(),
            description: description.into(),
            quantity: 1,
        }
    }
}

/// Input for the add_to_cart tool
#[derive(Debug, Deserialize)]
pub struct AddToCartInput {
    /// Cart identifier shown in the search results
    pub id: String,

    /// Product title
    pub title: String,

    /// Link to the product page
    #[serde(default)]
    pub link: String,

    /// Display price
    #[serde(default)]
    pub price: String,

    /// Shop / source label
    #[serde(default)]
    pub shop: String,

    /// Short product description
    #[serde(default)]
    pub description: String,
}

impl From<AddToCartInput> for CartItem {
    fn from(input: AddToCartInput) -> Self {
        Self::new(
            input.id,
            input.title,
            input.link,
            input.price,
            input.shop,
            input.description,
        )
    }
}

/// Input for the remove_from_cart tool
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartInput {
    /// Cart identifier of the item to remove
    pub id: String,
}
