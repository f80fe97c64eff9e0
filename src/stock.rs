//! Stock Badges
//!
//! Classifies the stock count the server printed into `data-stock`.

use crate::validation::parse_int_prefix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Out of stock at zero (or below), low below `low_threshold`
    pub fn classify(stock: i64, low_threshold: i64) -> Self {
        if stock <= 0 {
            StockStatus::OutOfStock
        } else if stock < low_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Classify a raw `data-stock` value; unreadable values are left alone
    pub fn from_attr(raw: Option<&str>, low_threshold: i64) -> Option<Self> {
        raw.and_then(parse_int_prefix)
            .map(|stock| Self::classify(stock, low_threshold))
    }

    /// Replacement badge text, `None` when the badge stays as rendered
    pub fn label(self) -> Option<&'static str> {
        match self {
            StockStatus::InStock => None,
            StockStatus::LowStock => Some("Low Stock"),
            StockStatus::OutOfStock => Some("Out of Stock"),
        }
    }

    /// Bootstrap background class replacing `bg-success`
    pub fn badge_class(self) -> Option<&'static str> {
        match self {
            StockStatus::InStock => None,
            StockStatus::LowStock => Some("bg-warning"),
            StockStatus::OutOfStock => Some("bg-danger"),
        }
    }

    pub fn blocks_purchase(self) -> bool {
        self == StockStatus::OutOfStock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_out_of_stock() {
        let status = StockStatus::classify(0, 5);
        assert_eq!(status, StockStatus::OutOfStock);
        assert_eq!(status.label(), Some("Out of Stock"));
        assert_eq!(status.badge_class(), Some("bg-danger"));
        assert!(status.blocks_purchase());
    }

    #[test]
    fn test_three_is_low_stock() {
        let status = StockStatus::classify(3, 5);
        assert_eq!(status, StockStatus::LowStock);
        assert_eq!(status.label(), Some("Low Stock"));
        assert_eq!(status.badge_class(), Some("bg-warning"));
        assert!(!status.blocks_purchase());
    }

    #[test]
    fn test_ten_is_unchanged() {
        let status = StockStatus::classify(10, 5);
        assert_eq!(status, StockStatus::InStock);
        assert_eq!(status.label(), None);
        assert_eq!(status.badge_class(), None);
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(StockStatus::classify(4, 5), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(5, 5), StockStatus::InStock);
        assert_eq!(StockStatus::classify(1, 5), StockStatus::LowStock);
    }

    #[test]
    fn test_from_attr() {
        assert_eq!(StockStatus::from_attr(Some("0"), 5), Some(StockStatus::OutOfStock));
        assert_eq!(StockStatus::from_attr(Some("25"), 5), Some(StockStatus::InStock));
        assert_eq!(
            StockStatus::from_attr(Some("-99999999999999999999"), 5),
            Some(StockStatus::OutOfStock)
        );
        assert_eq!(StockStatus::from_attr(Some(""), 5), None);
        assert_eq!(StockStatus::from_attr(None, 5), None);
    }
}
