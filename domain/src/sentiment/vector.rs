//! Sentiment vector value object

use super::intensity::Intensity;
use super::polarity::Polarity;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A 3-dimensional representation of a sentiment (Value Object)
///
/// - `magnitude`: strength or weight of the sentiment
/// - `polarity`: direction (negative, neutral, positive)
/// - `intensity`: emphasis applied to the sentiment
///
/// Vectors are never mutated; [`combine`](SentimentVector::combine) always
/// produces a new one.
///
/// # Example
///
/// ```
/// use sentiment_domain::sentiment::SentimentVector;
///
/// let v = SentimentVector::create(3, 1, 1.2).unwrap();
/// assert_eq!(
///     v.to_debug_string(),
///     "SentimentVector: [magnitude: 3, polarity: 1, intensity: 1.2000]"
/// );
///
/// assert!(SentimentVector::create(3, 2, 1.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentVector {
    magnitude: u32,
    polarity: Polarity,
    intensity: Intensity,
}

impl SentimentVector {
    /// Create a vector from already-validated components
    pub fn new(magnitude: u32, polarity: Polarity, intensity: Intensity) -> Self {
        Self {
            magnitude,
            polarity,
            intensity,
        }
    }

    /// Create a vector from raw scalars
    ///
    /// Fails with [`DomainError::InvalidPolarity`] when `polarity` is not one
    /// of -1, 0, 1 and with [`DomainError::InvalidIntensity`] when `intensity`
    /// is not a finite value above zero.
    pub fn create(magnitude: u32, polarity: i32, intensity: f64) -> Result<Self, DomainError> {
        Ok(Self::new(
            magnitude,
            Polarity::try_from(polarity)?,
            Intensity::new(intensity)?,
        ))
    }

    /// The neutral element: zero magnitude, neutral polarity, unit intensity
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    /// `|intensity - 1|`
    pub fn effective_intensity(&self) -> f64 {
        self.intensity.effective()
    }

    /// `magnitude * effective_intensity`
    pub fn effective_strength(&self) -> f64 {
        f64::from(self.magnitude) * self.effective_intensity()
    }

    /// Human-readable representation with the intensity fixed to 4 decimals
    pub fn to_debug_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for SentimentVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SentimentVector: [magnitude: {}, polarity: {}, intensity: {}]",
            self.magnitude, self.polarity, self.intensity
        )
    }
}

/// Parses `"magnitude,polarity,intensity"`, e.g. `"3, -1, 1.5"`
///
/// An intensity prefixed with `!` is a negated modifier and is
/// [reflected](Intensity::reflect): `"2,1,!1.25"` has intensity `0.75`.
impl std::str::FromStr for SentimentVector {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [magnitude, polarity, intensity] = parts.as_slice() else {
            return Err(DomainError::InvalidVector(format!(
                "expected 'magnitude,polarity,intensity', got '{}'",
                s
            )));
        };

        let magnitude: u32 = magnitude.parse().map_err(|_| {
            DomainError::InvalidVector(format!(
                "magnitude '{}' is not a non-negative integer",
                magnitude
            ))
        })?;
        let polarity: i32 = polarity.parse().map_err(|_| {
            DomainError::InvalidVector(format!("polarity '{}' is not an integer", polarity))
        })?;
        let polarity = Polarity::try_from(polarity)?;

        let (negated, raw_intensity) = match intensity.strip_prefix('!') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, *intensity),
        };
        let value: f64 = raw_intensity.parse().map_err(|_| {
            DomainError::InvalidVector(format!("intensity '{}' is not a number", intensity))
        })?;

        let mut intensity = Intensity::new(value)?;
        if negated {
            intensity = intensity.reflect()?;
        }

        Ok(Self::new(magnitude, polarity, intensity))
    }
}
