//! Shopping Cart State Management
//!
//! This module manages the application state: the concurrency-safe cart
//! store and the outbound search client.

use super::models::CartItem;
use crate::catalog::client::SearchClient;
use crate::config::SearchConfig;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

// =============================================================================
// Cart Store
// =============================================================================

/// Concurrency-safe collection of cart line items keyed by item id.
///
/// A single reader/writer lock guards the map: mutations take the write
/// lock, snapshots the read lock. Every value handed out is a clone, so
/// callers can never alias internal state.
#[derive(Default)]
pub struct CartStore {
    items: RwLock<HashMap<String, CartItem>>,
}

impl CartStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts `item` or, when its id is already present, bumps the stored
    /// quantity by one. Metadata of an existing entry is left untouched;
    /// only the first add for an id decides title, price and the rest.
    pub fn add(&self, item: CartItem) {
        let mut items = self.write();
        items
            .entry(item.id.clone())
            .and_modify(|existing| existing.quantity += 1)
            .or_insert(item);
    }

    /// Removes one unit of `id`, deleting the entry when the last unit
    /// goes. Returns whether the id was present.
    pub fn remove(&self, id: &str) -> bool {
        let mut items = self.write();
        let Some(item) = items.get_mut(id) else {
            return false;
        };
        if item.quantity > 1 {
            item.quantity -= 1;
        } else {
            items.remove(id);
        }
        true
    }

    /// Returns a defensive copy of the current cart contents. Later store
    /// mutations never show up in a returned snapshot, and mutating a
    /// snapshot never touches the store.
    pub fn snapshot(&self) -> HashMap<String, CartItem> {
        self.read().clone()
    }

    /// Drops every line item.
    pub fn clear(&self) {
        self.write().clear();
    }

    // A poisoned lock only records a panic in another holder; no operation
    // leaves the map mid-mutation, so the data is still coherent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CartItem>> {
        self.items.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CartItem>> {
        self.items.write().unwrap_or_else(|e| e.into_inner())
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: the process-wide cart plus the search client
pub struct AppState {
    /// In-memory cart; lives for the process lifetime.
    pub cart: CartStore,

    /// Outbound client for the product search API.
    pub search: SearchClient,
}

impl AppState {
    /// Creates a new AppState with an empty cart.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            cart: CartStore::new(),
            search: SearchClient::new(config),
        }
    }
}
