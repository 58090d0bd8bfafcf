//! Combination of two sentiment vectors
//!
//! Polarity, magnitude and intensity are resolved independently. The first
//! two are keyed on the product of the operand polarities:
//!
//! | product | polarity                               | magnitude    |
//! |---------|----------------------------------------|--------------|
//! | `1`     | shared polarity                        | `m1 + m2`    |
//! | `-1`    | stronger by effective strength, or `0` | `\|m1 - m2\|`|
//! | `0`     | the non-neutral operand's, or `0`      | `m1 + m2`    |
//!
//! Intensity is keyed on the quantifier/diminisher category of each operand.

use super::intensity::{Intensity, IntensityCategory};
use super::polarity::Polarity;
use super::vector::SentimentVector;
use std::cmp::Ordering;

impl SentimentVector {
    /// Combine two vectors into a new one
    ///
    /// The operation is commutative but not associative.
    ///
    /// # Example
    ///
    /// ```
    /// use sentiment_domain::sentiment::{Polarity, SentimentVector};
    ///
    /// let praise = SentimentVector::create(3, 1, 1.2).unwrap();
    /// let complaint = SentimentVector::create(3, -1, 1.5).unwrap();
    ///
    /// let combined = praise.combine(&complaint);
    /// assert_eq!(combined.magnitude(), 0);
    /// assert_eq!(combined.polarity(), Polarity::Negative);
    /// assert_eq!(combined.intensity().value(), 1.5);
    /// ```
    pub fn combine(&self, other: &SentimentVector) -> SentimentVector {
        SentimentVector::new(
            resolve_magnitude(self, other),
            resolve_polarity(self, other),
            resolve_intensity(self.intensity(), other.intensity()),
        )
    }
}

/// Left fold of [`SentimentVector::combine`] in input order
///
/// Returns `None` for an empty sequence.
pub fn combine_all<I>(vectors: I) -> Option<SentimentVector>
where
    I: IntoIterator<Item = SentimentVector>,
{
    vectors.into_iter().reduce(|acc, v| acc.combine(&v))
}

fn resolve_polarity(v1: &SentimentVector, v2: &SentimentVector) -> Polarity {
    match v1.polarity().product(v2.polarity()) {
        1 => v1.polarity(),
        -1 => match compare_within(
            v1.effective_strength(),
            v2.effective_strength(),
            strength_scale(v1).max(strength_scale(v2)),
        ) {
            Ordering::Greater => v1.polarity(),
            Ordering::Less => v2.polarity(),
            // Equally strong opposing sentiments cancel out
            Ordering::Equal => Polarity::Neutral,
        },
        _ => {
            if v1.polarity().is_neutral() {
                v2.polarity()
            } else {
                v1.polarity()
            }
        }
    }
}

fn resolve_magnitude(v1: &SentimentVector, v2: &SentimentVector) -> u32 {
    match v1.polarity().product(v2.polarity()) {
        -1 => v1.magnitude().abs_diff(v2.magnitude()),
        _ => v1.magnitude().saturating_add(v2.magnitude()),
    }
}

fn resolve_intensity(a: Intensity, b: Intensity) -> Intensity {
    match (a.category(), b.category()) {
        // Strongest amplifier wins
        (IntensityCategory::Quantifier, IntensityCategory::Quantifier) => {
            if a.value() >= b.value() { a } else { b }
        }
        // Strongest attenuator (the smaller value) wins
        (IntensityCategory::Diminisher, IntensityCategory::Diminisher) => {
            if a.value() <= b.value() { a } else { b }
        }
        _ => match compare_within(a.effective(), b.effective(), a.value().max(b.value())) {
            Ordering::Greater => a,
            Ordering::Less => b,
            // Tie between a quantifier and a diminisher: the quantifier wins
            Ordering::Equal => {
                if a.is_quantifier() { a } else { b }
            }
        },
    }
}

/// Relative slack for ties between derived quantities
const TIE_EPSILON: f64 = 4.0 * f64::EPSILON;

/// Orders `a` and `b`, treating differences within rounding error of
/// `scale` as a tie. Symmetric in `a` and `b`.
fn compare_within(a: f64, b: f64, scale: f64) -> Ordering {
    if (a - b).abs() <= TIE_EPSILON * scale.max(1.0) {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

/// Magnitude of the operands that `effective_strength` is computed from
fn strength_scale(v: &SentimentVector) -> f64 {
    f64::from(v.magnitude()) * v.intensity().value().max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(magnitude: u32, polarity: i32, intensity: f64) -> SentimentVector {
        SentimentVector::create(magnitude, polarity, intensity).unwrap()
    }

    fn sample_vectors() -> Vec<SentimentVector> {
        let mut vectors = Vec::new();
        for magnitude in [0, 1, 3, 8] {
            for polarity in [-1, 0, 1] {
                for intensity in [0.3, 0.5, 0.8, 1.0, 1.2, 1.5, 2.0] {
                    vectors.push(v(magnitude, polarity, intensity));
                }
            }
        }
        vectors
    }

    #[test]
    fn test_opposite_polarity_stronger_intensity_wins() {
        let result = v(3, 1, 1.2).combine(&v(3, -1, 1.5));
        assert_eq!(result, v(0, -1, 1.5));
    }

    #[test]
    fn test_neutral_operand_takes_other_polarity() {
        let result = v(0, 0, 1.0).combine(&v(5, 1, 1.3));
        assert_eq!(result, v(5, 1, 1.3));
    }

    #[test]
    fn test_mixed_categories_same_polarity() {
        let result = v(2, 1, 0.5).combine(&v(2, 1, 2.0));
        assert_eq!(result, v(4, 1, 2.0));
    }

    #[test]
    fn test_same_polarity_reinforces() {
        let result = v(2, -1, 1.2).combine(&v(5, -1, 1.4));
        assert_eq!(result, v(7, -1, 1.4));
    }

    #[test]
    fn test_both_diminishers_take_minimum() {
        let result = v(1, 1, 0.8).combine(&v(1, 1, 0.65));
        assert_eq!(result.intensity().value(), 0.65);
    }

    #[test]
    fn test_equal_effective_strength_cancels_to_neutral() {
        let result = v(4, 1, 1.5).combine(&v(4, -1, 0.5));
        assert_eq!(result.polarity(), Polarity::Neutral);
        assert_eq!(result.magnitude(), 0);
    }

    #[test]
    fn test_equal_strength_cancels_despite_rounding() {
        // 1.1 - 1 and 1 - 0.9 differ only in the last bits
        let result = v(1, 1, 1.1).combine(&v(1, -1, 0.9));
        assert_eq!(result.polarity(), Polarity::Neutral);
        assert_eq!(result.magnitude(), 0);

        let result = v(1000, -1, 0.9).combine(&v(1000, 1, 1.1));
        assert_eq!(result.polarity(), Polarity::Neutral);
    }

    #[test]
    fn test_close_but_unequal_strength_is_not_a_tie() {
        let result = v(1, 1, 1.1).combine(&v(1, -1, 0.9000001));
        assert_eq!(result.polarity(), Polarity::Positive);
    }

    #[test]
    fn test_cancellation_never_negative() {
        let result = v(2, 1, 1.0).combine(&v(9, -1, 1.1));
        assert_eq!(result.magnitude(), 7);
        assert_eq!(result.polarity(), Polarity::Negative);
    }

    #[test]
    fn test_both_neutral_stay_neutral() {
        let result = v(2, 0, 1.3).combine(&v(3, 0, 0.9));
        assert_eq!(result.polarity(), Polarity::Neutral);
        assert_eq!(result.magnitude(), 5);
    }

    #[test]
    fn test_mixed_tie_prefers_quantifier() {
        let quantifier = v(1, 1, 1.5);
        let diminisher = v(1, 1, 0.5);
        assert_eq!(quantifier.combine(&diminisher).intensity().value(), 1.5);
        assert_eq!(diminisher.combine(&quantifier).intensity().value(), 1.5);

        let quantifier = v(2, -1, 1.1);
        let diminisher = v(2, -1, 0.9);
        assert_eq!(quantifier.combine(&diminisher).intensity().value(), 1.1);
        assert_eq!(diminisher.combine(&quantifier).intensity().value(), 1.1);
    }

    #[test]
    fn test_reinforcement_saturates() {
        let result = v(u32::MAX, 1, 1.0).combine(&v(10, 1, 1.0));
        assert_eq!(result.magnitude(), u32::MAX);
    }

    #[test]
    fn test_combine_is_commutative() {
        let vectors = sample_vectors();
        for a in &vectors {
            for b in &vectors {
                assert_eq!(a.combine(b), b.combine(a), "a = {}, b = {}", a, b);
            }
        }
    }

    #[test]
    fn test_neutral_vector_is_identity() {
        let neutral = SentimentVector::neutral();
        for vector in sample_vectors() {
            let result = vector.combine(&neutral);
            assert_eq!(result.polarity(), vector.polarity());
            assert_eq!(result.magnitude(), vector.magnitude());
            assert_eq!(result.intensity(), vector.intensity());
        }
    }

    #[test]
    fn test_combine_all_folds_in_order() {
        let vectors = vec![v(3, 1, 1.2), v(3, -1, 1.5), v(2, -1, 0.8)];
        let expected = vectors[0].combine(&vectors[1]).combine(&vectors[2]);
        assert_eq!(combine_all(vectors), Some(expected));
    }

    #[test]
    fn test_combine_all_empty_and_single() {
        assert_eq!(combine_all(Vec::new()), None);
        assert_eq!(combine_all([v(4, 1, 1.1)]), Some(v(4, 1, 1.1)));
    }
}
