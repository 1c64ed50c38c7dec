//! The amount of BTC a user asks to price.

use std::fmt;

/// A finite amount of BTC. May be fractional, and is not checked for sign.
///
/// `Display` yields the value sent as `btc_quantity`: the shortest decimal
/// that round-trips, so `2.5` stays `"2.5"` and `2.0` becomes `"2"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Quantity(f64);

impl Quantity {
    pub const ZERO: Self = Self(0.0);

    /// Returns `None` for NaN and infinities.
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // fold -0.0 into 0.0 so it never shows up as "-0"
        Some(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// Coerces the text of a numeric input field, the way a browser does.
    ///
    /// Blank text counts as zero. Anything that is not a finite decimal
    /// number gives `None`, and the caller keeps its previous quantity.
    pub fn from_input(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Some(Self::ZERO);
        }
        trimmed.parse::<f64>().ok().and_then(Self::new)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
