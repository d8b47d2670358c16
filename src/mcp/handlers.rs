//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol handlers for the
//! shopping server. It exports `handle_tool_call` publicly to make it
//! accessible for tests.

use super::{helpers::*, models::*};
use crate::cart::{helpers::format_cart, models::*, state::*};
use crate::catalog::helpers::format_search_results;
use crate::catalog::models::SearchProductsInput;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    // Parse JSON-RPC Request (POST)
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!("JSON parse error: {}", e.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, -32700, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    tracing::info!("MCP call: {} (id: {:?})", method_name, id);

    // Dispatch Method
    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args).await {
                Ok(result) => rpc_success(id, result),
                Err(msg) => rpc_error(id, -32602, msg), // Invalid params or internal error
            }
        }
        "ping" => rpc_success(id, json!({})), // Optional but good for health checks
        _ => {
            tracing::warn!("unknown method: {}", method_name);
            rpc_error(id, -32601, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": "0.1.0"
        }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": SEARCH_TOOL_NAME,
                "title": "Search products",
                "description": "Searches the product catalog and returns results with cart IDs.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Search query for finding products"
                        },
                        "num_results": {
                            "type": "integer",
                            "description": "Number of search results (default 10, maximum 10)",
                            "default": 10,
                            "maximum": 10
                        }
                    },
                    "required": ["query"],
                    "additionalProperties": false
                }
            },
            {
                "name": ADD_TOOL_NAME,
                "title": "Add item to cart",
                "description": "Adds one unit of an item from the search results to the cart.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": "string",
                            "description": "Cart ID shown in the search results"
                        },
                        "title": { "type": "string" },
                        "link": { "type": "string" },
                        "price": { "type": "string" },
                        "shop": { "type": "string" },
                        "description": { "type": "string" }
                    },
                    "required": ["id", "title"],
                    "additionalProperties": false
                }
            },
            {
                "name": REMOVE_TOOL_NAME,
                "title": "Remove item from cart",
                "description": "Removes one unit of an item; the line disappears with the last unit.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": "string",
                            "description": "Cart ID of the item to remove"
                        }
                    },
                    "required": ["id"],
                    "additionalProperties": false
                }
            },
            {
                "name": VIEW_CART_TOOL_NAME,
                "title": "View cart",
                "description": "Shows the current cart contents.",
                "inputSchema": {
                    "type": "object",
                    "additionalProperties": false
                }
            },
            {
                "name": CLEAR_CART_TOOL_NAME,
                "title": "Clear cart",
                "description": "Removes every item from the cart.",
                "inputSchema": {
                    "type": "object",
                    "additionalProperties": false
                }
            }
        ]
    })
}

/// Handles `tools/call` request (Business Logic).
pub async fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, String> {
    match name {
        SEARCH_TOOL_NAME => handle_search_products(state, args).await,
        ADD_TOOL_NAME => handle_add_to_cart(state, args),
        REMOVE_TOOL_NAME => handle_remove_from_cart(state, args),
        VIEW_CART_TOOL_NAME => Ok(handle_view_cart(state)),
        CLEAR_CART_TOOL_NAME => Ok(handle_clear_cart(state)),
        _ => Err(format!("Unknown tool: {}", name)),
    }
}

/// Truncates a possibly fractional result count and clamps it to the cap.
fn clamp_num_results(raw: Option<f64>) -> usize {
    match raw {
        Some(n) => (n as i64).clamp(1, MAX_SEARCH_RESULTS as i64) as usize,
        None => MAX_SEARCH_RESULTS,
    }
}

/// Handles the search_products tool functionality
async fn handle_search_products(state: &AppState, args: Value) -> Result<Value, String> {
    let input: SearchProductsInput =
        serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))?;

    let num_results = clamp_num_results(input.num_results);

    match state.search.search(&input.query, num_results).await {
        Ok(response) => {
            tracing::info!(
                query = %input.query,
                results = response.items.len(),
                "search completed"
            );
            Ok(tool_text(format_search_results(&input.query, &response)))
        }
        Err(err) => {
            tracing::warn!(query = %input.query, error = %err, "search failed");
            Ok(tool_error(format!("Search failed: {}", err)))
        }
    }
}

/// Handles the add_to_cart tool functionality
fn handle_add_to_cart(state: &AppState, args: Value) -> Result<Value, String> {
    let input: AddToCartInput =
        serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))?;

    let item = CartItem::from(input);
    let (id, title) = (item.id.clone(), item.title.clone());
    state.cart.add(item);

    let snapshot = state.cart.snapshot();
    let total_quantity: u32 = snapshot.values().map(|i| i.quantity).sum();
    tracing::info!(%id, "item added to cart");

    Ok(tool_text(format!(
        "🛒 Added \"{}\" to the cart (ID: {})\n📊 Cart now holds {} item(s), {} unique",
        title,
        id,
        total_quantity,
        snapshot.len()
    )))
}

/// Handles the remove_from_cart tool functionality
fn handle_remove_from_cart(state: &AppState, args: Value) -> Result<Value, String> {
    let input: RemoveFromCartInput =
        serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))?;

    if state.cart.remove(&input.id) {
        tracing::info!(id = %input.id, "item removed from cart");
        Ok(tool_text(format!(
            "🛒 Removed one unit of item {} from the cart",
            input.id
        )))
    } else {
        // Not-found is a normal outcome, not a protocol error
        Ok(tool_text(format!("No item with ID {} in the cart", input.id)))
    }
}

/// Handles the view_cart tool functionality
fn handle_view_cart(state: &AppState) -> Value {
    tool_text(format_cart(&state.cart.snapshot()))
}

/// Handles the clear_cart tool functionality
fn handle_clear_cart(state: &AppState) -> Value {
    state.cart.clear();
    tracing::info!("cart cleared");
    tool_text("🛒 Cart cleared")
}
