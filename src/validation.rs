//! Client-side Input Checks
//!
//! Quantity clamping, PIN code format and price-range parsing.
//! The server re-validates everything; these only give early feedback.

/// Leading integer of `raw`, the way browsers' `parseInt` reads it:
/// surrounding whitespace, an optional sign, then as many digits as present.
/// Digit runs too long for `i64` saturate, so huge values still compare as huge.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let saturated = if negative { i64::MIN } else { i64::MAX };
    let value = digits[..end].bytes().try_fold(0i64, |acc, b| {
        let digit = i64::from(b - b'0');
        let acc = acc.checked_mul(10)?;
        if negative {
            acc.checked_sub(digit)
        } else {
            acc.checked_add(digit)
        }
    });
    Some(value.unwrap_or(saturated))
}

/// Inclusive bounds for a quantity input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityBounds {
    pub min: i64,
    pub max: i64,
}

impl QuantityBounds {
    /// Bounds from an input's `min`/`max` attributes, falling back per side
    pub fn from_attrs(min: Option<&str>, max: Option<&str>, fallback: QuantityBounds) -> Self {
        Self {
            min: min.and_then(parse_int_prefix).unwrap_or(fallback.min),
            max: max.and_then(parse_int_prefix).unwrap_or(fallback.max),
        }
    }

    /// The value the input should be corrected to, if it is out of bounds.
    /// Non-numeric input is left for the user to finish typing.
    pub fn correction(&self, raw: &str) -> Option<i64> {
        let value = parse_int_prefix(raw)?;
        if value > self.max {
            Some(self.max)
        } else if value < self.min {
            Some(self.min)
        } else {
            None
        }
    }
}

/// Indian postal code: exactly six ASCII digits
pub fn is_valid_pincode(raw: &str) -> bool {
    raw.len() == 6 && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Price range selected in a `.price-filter` control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceRange {
    /// Accepts `"500-1000"`, `"5000+"` and `"-499"`.
    /// Empty or `"all"` means no filter and yields `None`, as does anything unparsable.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return None;
        }
        if let Some(min) = raw.strip_suffix('+') {
            return Some(Self { min: min.trim().parse().ok()?, max: None });
        }
        let (min, max) = raw.split_once('-')?;
        let min = match min.trim() {
            "" => 0.0,
            value => value.parse().ok()?,
        };
        let max: f64 = max.trim().parse().ok()?;
        (min <= max).then_some(Self { min, max: Some(max) })
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}
