//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartItem, tool inputs)
//! - The concurrency-safe cart store and application state
//! - Cart rendering helpers

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use state::{AppState, CartStore, SharedState};
