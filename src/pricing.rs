//! Shipping and Currency
//!
//! Display-only arithmetic. The server owns the real totals; these values
//! only decorate the cart and checkout pages.

/// Free-shipping rule: flat fee below the threshold, free at or above it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShippingPolicy {
    pub threshold: f64,
    pub fee: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShippingQuote {
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
    /// Amount still needed for free shipping, when below the threshold
    pub remaining_for_free: Option<f64>,
}

impl ShippingPolicy {
    pub fn quote(&self, subtotal: f64) -> ShippingQuote {
        let free = subtotal >= self.threshold;
        let shipping = if free { 0.0 } else { self.fee };
        ShippingQuote {
            subtotal,
            shipping,
            total: subtotal + shipping,
            remaining_for_free: (!free).then(|| self.threshold - subtotal),
        }
    }
}

impl ShippingQuote {
    pub fn is_free(&self) -> bool {
        self.shipping == 0.0
    }

    /// "FREE" or the fee with the currency symbol, e.g. "₹50"
    pub fn shipping_label(&self, symbol: &str) -> String {
        if self.is_free() {
            "FREE".to_string()
        } else if self.shipping.fract() == 0.0 {
            format!("{}{:.0}", symbol, self.shipping)
        } else {
            format!("{}{:.2}", symbol, self.shipping)
        }
    }

    pub fn total_label(&self, symbol: &str) -> String {
        format_currency(self.total, symbol)
    }

    /// Markup for the free-shipping nudge
    pub fn nudge_html(&self, symbol: &str) -> Option<String> {
        self.remaining_for_free.map(|needed| {
            format!("Add <strong>{}</strong> more for free shipping!", format_currency(needed, symbol))
        })
    }
}

/// Read an amount attribute; anything unusable counts as zero
pub fn parse_amount(raw: Option<&str>) -> f64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Two decimals with thousands separators, e.g. `₹1,234,567.50`
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, grouped, cents)
}
