//! Intensity value object
//!
//! Intensity is the emphasis multiplier of a sentiment. Values at or above
//! `1.0` are *quantifiers* ("very", "extremely"), values below `1.0` are
//! *diminishers* ("slightly", "somewhat"). Exactly `1.0` is neutral.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Category of an intensity value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityCategory {
    /// Amplifier, intensity >= 1
    Quantifier,
    /// Attenuator, intensity < 1
    Diminisher,
}

impl std::fmt::Display for IntensityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntensityCategory::Quantifier => write!(f, "quantifier"),
            IntensityCategory::Diminisher => write!(f, "diminisher"),
        }
    }
}

/// A finite, strictly positive emphasis multiplier
///
/// # Example
///
/// ```
/// use sentiment_domain::sentiment::{Intensity, IntensityCategory};
///
/// let very = Intensity::new(1.41).unwrap();
/// assert_eq!(very.category(), IntensityCategory::Quantifier);
///
/// assert!(Intensity::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Intensity(f64);

impl Intensity {
    /// Neutral intensity: neither amplifies nor attenuates
    pub const NEUTRAL: Intensity = Intensity(1.0);

    /// Create a new intensity, rejecting zero, negative and non-finite values
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidIntensity(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Distance from the neutral intensity, `|intensity - 1|`
    pub fn effective(self) -> f64 {
        (self.0 - 1.0).abs()
    }

    pub fn category(self) -> IntensityCategory {
        if self.is_quantifier() {
            IntensityCategory::Quantifier
        } else {
            IntensityCategory::Diminisher
        }
    }

    pub fn is_quantifier(self) -> bool {
        self.0 >= 1.0
    }

    pub fn is_diminisher(self) -> bool {
        !self.is_quantifier()
    }

    /// Mirror the value around the neutral point (`2 - x`)
    ///
    /// Models a negated modifier: "not very" turns the quantifier `q` into
    /// `1 - (q - 1)`, "not slightly" turns the diminisher `d` into
    /// `1 + (1 - d)`. Quantifiers of `2.0` or more have no positive mirror
    /// image and are rejected.
    pub fn reflect(self) -> Result<Self, DomainError> {
        Self::new(2.0 - self.0)
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<f64> for Intensity {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Intensity::new(value)
    }
}

impl From<Intensity> for f64 {
    fn from(intensity: Intensity) -> Self {
        intensity.0
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_and_non_finite() {
        assert_eq!(Intensity::new(0.0), Err(DomainError::InvalidIntensity(0.0)));
        assert!(Intensity::new(-0.5).is_err());
        assert!(Intensity::new(f64::NAN).is_err());
        assert!(Intensity::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_effective_is_zero_at_neutral() {
        assert_eq!(Intensity::NEUTRAL.effective(), 0.0);
        assert_eq!(Intensity::new(1.5).unwrap().effective(), 0.5);
        assert_eq!(Intensity::new(0.5).unwrap().effective(), 0.5);
    }

    #[test]
    fn test_category_boundary() {
        assert_eq!(Intensity::NEUTRAL.category(), IntensityCategory::Quantifier);
        assert_eq!(
            Intensity::new(0.999).unwrap().category(),
            IntensityCategory::Diminisher
        );
    }

    #[test]
    fn test_reflect_negated_modifiers() {
        let not_very = Intensity::new(1.25).unwrap().reflect().unwrap();
        assert_eq!(not_very.value(), 0.75);
        assert!(not_very.is_diminisher());

        let not_slightly = Intensity::new(0.5).unwrap().reflect().unwrap();
        assert_eq!(not_slightly.value(), 1.5);
        assert!(not_slightly.is_quantifier());

        assert!(Intensity::new(2.0).unwrap().reflect().is_err());
    }

    #[test]
    fn test_display_four_decimals() {
        assert_eq!(Intensity::new(1.2).unwrap().to_string(), "1.2000");
    }

    #[test]
    fn test_deserialize_validates() {
        let intensity: Intensity = serde_json::from_str("1.3").unwrap();
        assert_eq!(intensity.value(), 1.3);
        assert!(serde_json::from_str::<Intensity>("-1.0").is_err());
    }
}
