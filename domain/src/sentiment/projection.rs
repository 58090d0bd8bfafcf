//! Projection of a sentiment vector onto a scalar score
//!
//! The score is squashed through `atan`, so extreme inputs approach
//! `±PROJECTION_SCALE·π/2` without ever growing unboundedly.

use super::vector::SentimentVector;

/// Squashing constant applied to `atan(score)`
pub const PROJECTION_SCALE: f64 = 0.691;

/// Upper bound (exclusive) of [`SentimentVector::score`]; the lower bound is
/// its negation.
pub const PROJECTION_BOUND: f64 = PROJECTION_SCALE * std::f64::consts::FRAC_PI_2;

/// Largest score actually produced; `atan` rounds to `π/2` for huge inputs
const PROJECTION_LIMIT: f64 = f64::from_bits(PROJECTION_BOUND.to_bits() - 1);

impl SentimentVector {
    /// Project this vector onto a bounded scalar score
    ///
    /// A zero-magnitude vector uses its intensity as base sentiment, so a
    /// bare modifier still carries a (small) signed score.
    ///
    /// # Example
    ///
    /// ```
    /// use sentiment_domain::sentiment::SentimentVector;
    ///
    /// let score = SentimentVector::create(0, 1, 1.0).unwrap().score();
    /// assert!((score - 0.5427).abs() < 1e-4);
    /// ```
    pub fn score(&self) -> f64 {
        let intensity = self.intensity().value();
        let base_sentiment = if self.magnitude() == 0 {
            intensity
        } else {
            f64::from(self.magnitude())
        };

        let raw = base_sentiment * self.polarity().as_f64() * intensity;
        (raw.atan() * PROJECTION_SCALE).clamp(-PROJECTION_LIMIT, PROJECTION_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(magnitude: u32, polarity: i32, intensity: f64) -> SentimentVector {
        SentimentVector::create(magnitude, polarity, intensity).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_zero_magnitude_uses_intensity_as_base() {
        assert_close(v(0, 1, 1.0).score(), 0.5427);
        // base 1.5 * 1.5 = 2.25
        assert_close(v(0, -1, 1.5).score(), (-2.25f64).atan() * PROJECTION_SCALE);
    }

    #[test]
    fn test_negative_score() {
        assert_close(v(4, -1, 2.0).score(), -0.9995);
    }

    #[test]
    fn test_neutral_polarity_scores_zero() {
        assert_eq!(v(9, 0, 1.7).score(), 0.0);
    }

    #[test]
    fn test_score_sign_follows_polarity() {
        for magnitude in [1, 5, 100] {
            for intensity in [0.2, 1.0, 3.5] {
                assert!(v(magnitude, 1, intensity).score() > 0.0);
                assert!(v(magnitude, -1, intensity).score() < 0.0);
            }
        }
    }

    #[test]
    fn test_score_is_bounded() {
        for magnitude in [0, 1, 1_000, 1_000_000, u32::MAX] {
            for polarity in [-1, 0, 1] {
                for intensity in [0.01, 1.0, 1.63, 50.0, 1e7, 1e9, 1e20, 1e200] {
                    let score = v(magnitude, polarity, intensity).score();
                    assert!(score > -PROJECTION_BOUND && score < PROJECTION_BOUND);
                }
            }
        }
    }

    #[test]
    fn test_saturated_score_stays_inside_bound() {
        let high = v(u32::MAX, 1, 1e7).score();
        assert!(high < PROJECTION_BOUND);
        assert!(high > PROJECTION_BOUND - 1e-12);

        let low = v(0, -1, 1e9).score();
        assert!(low > -PROJECTION_BOUND);
        assert_eq!(low, -high);
    }

    #[test]
    fn test_score_is_monotonic_in_magnitude() {
        let scores: Vec<f64> = [1, 2, 4, 8].iter().map(|m| v(*m, 1, 1.2).score()).collect();
        assert!(scores.windows(2).all(|w| w[0] < w[1]));
    }
}
