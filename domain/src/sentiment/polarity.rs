//! Polarity value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Direction of a sentiment
///
/// Serialized as the bare integer `-1`, `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Polarity {
    Negative,
    Neutral,
    Positive,
}

impl Polarity {
    /// Signed integer value (-1, 0, 1)
    pub fn value(self) -> i32 {
        match self {
            Polarity::Negative => -1,
            Polarity::Neutral => 0,
            Polarity::Positive => 1,
        }
    }

    /// Signed value as a float, for score arithmetic
    pub fn as_f64(self) -> f64 {
        f64::from(self.value())
    }

    /// Product of two polarities; the case key used by `combine`
    pub fn product(self, other: Polarity) -> i32 {
        self.value() * other.value()
    }

    pub fn is_neutral(self) -> bool {
        matches!(self, Polarity::Neutral)
    }
}

impl Default for Polarity {
    fn default() -> Self {
        Self::Neutral
    }
}

impl TryFrom<i64> for Polarity {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Polarity::Negative),
            0 => Ok(Polarity::Neutral),
            1 => Ok(Polarity::Positive),
            other => Err(DomainError::InvalidPolarity(other)),
        }
    }
}

impl TryFrom<i32> for Polarity {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Polarity::try_from(i64::from(value))
    }
}

impl From<Polarity> for i64 {
    fn from(polarity: Polarity) -> Self {
        i64::from(polarity.value())
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
