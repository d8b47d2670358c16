//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Name of the product search tool
pub const SEARCH_TOOL_NAME: &str = "search_products";
/// Name of the add-to-cart tool
pub const ADD_TOOL_NAME: &str = "add_to_cart";
/// Name of the remove-from-cart tool
pub const REMOVE_TOOL_NAME: &str = "remove_from_cart";
/// Name of the view-cart tool
pub const VIEW_CART_TOOL_NAME: &str = "view_cart";
/// Name of the clear-cart tool
pub const CLEAR_CART_TOOL_NAME: &str = "clear_cart";
/// Server identifier
pub const SERVER_NAME: &str = "shopping-server";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";
/// Upper bound on search results per query
pub const MAX_SEARCH_RESULTS: usize = 10;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}
