//! Storefront Configuration
//!
//! Tunables the server can override by defining `window.STOREFRONT_CONFIG`
//! before the bundle loads. Every field has a default.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::UiError;
use crate::pricing::ShippingPolicy;
use crate::validation::QuantityBounds;

/// Global the server template may define with overrides
const CONFIG_GLOBAL: &str = "STOREFRONT_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// Subtotal at or above which shipping is free
    pub free_shipping_threshold: f64,
    /// Flat shipping fee below the threshold
    pub shipping_fee: f64,
    pub currency_symbol: String,
    /// How long a flash message stays before it is dismissed
    pub flash_duration_ms: u32,
    /// Scroll offset (px) past which the back-to-top button shows
    pub back_to_top_offset: f64,
    /// Stock counts below this are badged "Low Stock"
    pub low_stock_threshold: i64,
    /// Bounds used when a number input has no usable min/max attribute
    pub quantity_min: i64,
    pub quantity_max: i64,
    pub search_debounce_ms: u32,
    /// Queries shorter than this are not logged
    pub search_min_chars: usize,
    /// Pages under this path skip the cart badge request
    pub cart_path: String,
    pub log_level: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: 499.0,
            shipping_fee: 50.0,
            currency_symbol: "₹".to_string(),
            flash_duration_ms: 3000,
            back_to_top_offset: 300.0,
            low_stock_threshold: 5,
            quantity_min: 1,
            quantity_max: 10,
            search_debounce_ms: 300,
            search_min_chars: 3,
            cart_path: "/cart".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Read overrides from `window.STOREFRONT_CONFIG`.
    /// A missing global yields the defaults; a malformed one is an error.
    pub fn from_window() -> Result<Self, UiError> {
        let Some(win) = web_sys::window() else {
            return Ok(Self::default());
        };
        let raw = js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(UiError::from_js)?;
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(raw).map_err(|e| UiError::Decode(e.to_string()))
    }

    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy {
            threshold: self.free_shipping_threshold,
            fee: self.shipping_fee,
        }
    }

    pub fn quantity_bounds(&self) -> QuantityBounds {
        QuantityBounds {
            min: self.quantity_min,
            max: self.quantity_max,
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Whether `path` is the cart page (or below it)
    pub fn is_cart_page(&self, path: &str) -> bool {
        let cart = self.cart_path.trim_end_matches('/');
        path == cart || path.strip_prefix(cart).is_some_and(|rest| rest.starts_with('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: StorefrontConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.free_shipping_threshold, 499.0);
        assert_eq!(config.shipping_fee, 50.0);
        assert_eq!(config.flash_duration_ms, 3000);
    }

    #[test]
    fn test_partial_override() {
        let config: StorefrontConfig =
            serde_json::from_str(r#"{"freeShippingThreshold": 999, "currencySymbol": "$"}"#).unwrap();
        assert_eq!(config.free_shipping_threshold, 999.0);
        assert_eq!(config.currency_symbol, "$");
        // Untouched fields keep their defaults
        assert_eq!(config.quantity_max, 10);
    }

    #[test]
    fn test_log_level_falls_back_to_info() {
        let mut config = StorefrontConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_is_cart_page() {
        let config = StorefrontConfig::default();
        assert!(config.is_cart_page("/cart"));
        assert!(config.is_cart_page("/cart/"));
        assert!(!config.is_cart_page("/cartoons"));
        assert!(!config.is_cart_page("/"));
        assert!(!config.is_cart_page("/checkout"));
    }
}
