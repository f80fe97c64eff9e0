//! Page UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::flash::FlashQueue;
use crate::models::{CartCount, Severity};

/// State shared by the enhancers on one page view
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Last count reported by the server; `None` until the first response
    pub cart_count: Option<CartCount>,
    /// Visible flash messages, newest first
    pub flashes: FlashQueue,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_cart_count(store: &UiStore, count: CartCount) {
    store.cart_count().set(Some(count));
}

/// Push a flash message and return its id
pub fn store_push_flash(store: &UiStore, message: impl Into<String>, severity: Severity) -> u64 {
    store.flashes().write().push(message, severity)
}

pub fn store_dismiss_flash(store: &UiStore, flash_id: u64) {
    store.flashes().write().dismiss(flash_id);
}
