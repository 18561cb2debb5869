use serde::Deserialize;

/// A quantity requested by a cart control, already clamped to `0..=u32::MAX`.
///
/// Controls may send numbers or numeric strings. Anything unreadable counts as
/// zero, which removes the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawQuantity")]
pub struct RequestedQuantity(u32);

impl RequestedQuantity {
    pub fn new(amount: i64) -> Self {
        Self(u32::try_from(amount.max(0)).unwrap_or(u32::MAX))
    }

    /// Fractional amounts truncate toward zero. NaN and infinities are not
    /// quantities and count as zero.
    pub fn from_f64(amount: f64) -> Self {
        if !amount.is_finite() || amount <= 0.0 {
            Self(0)
        } else if amount >= f64::from(u32::MAX) {
            Self(u32::MAX)
        } else {
            Self(amount.trunc() as u32)
        }
    }

    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .map(Self::from_f64)
            .unwrap_or_default()
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for RequestedQuantity {
    fn from(amount: i64) -> Self {
        Self::new(amount)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Number(f64),
    Text(String),
    Null,
}

impl From<RawQuantity> for RequestedQuantity {
    fn from(raw: RawQuantity) -> Self {
        match raw {
            RawQuantity::Number(amount) => Self::from_f64(amount),
            RawQuantity::Text(text) => Self::parse(&text),
            RawQuantity::Null => Self::default(),
        }
    }
}
