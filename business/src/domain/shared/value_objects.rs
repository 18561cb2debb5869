use std::iter::Sum;
use std::ops::Add;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Everything that is not part of a plain decimal number ("$1,250.00" -> "1250.00").
static NON_PRICE_CHARS: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[^0-9.]").ok());

/// A product cost exactly as the catalog supplied it.
///
/// Catalogs mix bare numbers (`15`) with display strings (`"$15.00"`), so the
/// cost is kept as received and only turned into a [`Price`] on demand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cost {
    Amount(f64),
    Label(String),
    #[default]
    Unpriced,
}

impl Cost {
    /// Converts the cost into its numeric price.
    ///
    /// Labels keep only digits and decimal points before parsing. Anything that
    /// cannot be read as a finite number is worth 0.
    pub fn normalized(&self) -> Price {
        match self {
            Cost::Amount(amount) => Price::new(*amount),
            Cost::Label(label) => Price::new(parse_label(label).unwrap_or(0.0)),
            Cost::Unpriced => Price::zero(),
        }
    }

    /// Returns true when a non-blank label carried no readable number.
    pub fn degrades_to_zero(&self) -> bool {
        match self {
            Cost::Label(label) => !label.trim().is_empty() && parse_label(label).is_none(),
            Cost::Amount(amount) => !amount.is_finite(),
            Cost::Unpriced => false,
        }
    }
}

fn parse_label(label: &str) -> Option<f64> {
    let digits = NON_PRICE_CHARS.as_ref()?.replace_all(label, "");

    digits.parse::<f64>().ok().filter(|value| value.is_finite())
}

impl From<f64> for Cost {
    fn from(amount: f64) -> Self {
        Cost::Amount(amount)
    }
}

impl From<&str> for Cost {
    fn from(label: &str) -> Self {
        Cost::Label(label.to_string())
    }
}

impl From<String> for Cost {
    fn from(label: String) -> Self {
        Cost::Label(label)
    }
}

/// Canonical numeric price in the storefront currency.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    /// Non-finite amounts collapse to zero.
    pub fn new(amount: f64) -> Self {
        if amount.is_finite() {
            Self(amount)
        } else {
            Self(0.0)
        }
    }

    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Price of `quantity` units.
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.0 * f64::from(quantity))
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Price::new(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::zero(), Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
