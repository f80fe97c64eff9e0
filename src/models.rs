//! Frontend Models
//!
//! Values read from the page or returned by storefront endpoints.

use std::fmt;

use serde::Deserialize;

use crate::error::UiResult;

/// Body of `GET /api/cart_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CartCount {
    pub count: u32,
}

impl CartCount {
    pub fn from_json(body: &str) -> UiResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Badge text, or `None` when the badge should be hidden
    pub fn badge_text(&self) -> Option<String> {
        (self.count > 0).then(|| self.count.to_string())
    }
}

/// Flash message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// Bootstrap alert class
    pub fn alert_class(self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Error => "alert-danger",
            Severity::Info => "alert-info",
        }
    }
}

/// Opaque product identifier from `data-product-id`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque category identifier from `data-category-id`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_count_zero_hides_badge() {
        let count = CartCount::from_json(r#"{"count": 0}"#).unwrap();
        assert_eq!(count.badge_text(), None);
    }

    #[test]
    fn test_cart_count_shows_number() {
        let count = CartCount::from_json(r#"{"count": 3}"#).unwrap();
        assert_eq!(count.badge_text().as_deref(), Some("3"));
    }

    #[test]
    fn test_cart_count_rejects_bad_body() {
        assert!(CartCount::from_json("<html>login</html>").is_err());
        assert!(CartCount::from_json(r#"{"count": -1}"#).is_err());
    }

    #[test]
    fn test_severity_classes() {
        assert_eq!(Severity::Success.alert_class(), "alert-success");
        assert_eq!(Severity::Error.alert_class(), "alert-danger");
        assert_eq!(Severity::Info.alert_class(), "alert-info");
    }
}
