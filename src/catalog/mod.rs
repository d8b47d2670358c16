//! Product Catalog Module
//!
//! This module contains the search collaborator boundary, including:
//! - Wire models for the search API response
//! - The outbound search client and its error taxonomy
//! - Result normalization (identifier derivation, price selection)
//! - Search result rendering

pub mod client;
pub mod helpers;
pub mod models;
pub mod normalize;

// Re-export commonly used types for convenience
pub use client::{SearchClient, SearchError};
