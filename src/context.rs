//! Storefront Context
//!
//! Page-wide services provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use web_sys::AbortController;

use crate::config::StorefrontConfig;
use crate::models::{CartCount, Severity};
use crate::requests::{RequestKey, RequestRegistry, Ticket};
use crate::store::{store_dismiss_flash, store_push_flash, store_set_cart_count, UiState, UiStore};

#[derive(Clone, Copy)]
pub struct StorefrontContext {
    config: StoredValue<StorefrontConfig>,
    /// Reactive page state (cart count, flash stack)
    pub store: UiStore,
    requests: StoredValue<RequestRegistry<AbortController>, LocalStorage>,
}

impl StorefrontContext {
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            store: Store::new(UiState::default()),
            requests: StoredValue::new_local(RequestRegistry::default()),
        }
    }

    /// Read a value out of the config without cloning it
    pub fn with_config<T>(&self, f: impl FnOnce(&StorefrontConfig) -> T) -> T {
        self.config.with_value(f)
    }

    /// Show a flash message and schedule its removal
    pub fn flash(&self, message: impl Into<String>, severity: Severity) {
        let id = store_push_flash(&self.store, message, severity);
        let store = self.store;
        let duration = self.with_config(|c| c.flash_duration_ms);
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            store_dismiss_flash(&store, id);
        });
    }

    pub fn dismiss_flash(&self, flash_id: u64) {
        store_dismiss_flash(&self.store, flash_id);
    }

    pub fn set_cart_count(&self, count: CartCount) {
        store_set_cart_count(&self.store, count);
    }

    /// Register a request; `None` means the key's policy refused it
    pub fn begin_request(&self, key: RequestKey, controller: Option<AbortController>) -> Option<Ticket> {
        self.requests
            .try_update_value(|registry| registry.begin(key, controller))
            .flatten()
    }

    /// Finish a request; false when a newer one superseded it
    pub fn finish_request(&self, key: &RequestKey, ticket: Ticket) -> bool {
        self.requests
            .try_update_value(|registry| registry.finish(key, ticket))
            .unwrap_or(false)
    }
}

/// Get the storefront context
pub fn use_storefront() -> StorefrontContext {
    expect_context::<StorefrontContext>()
}
