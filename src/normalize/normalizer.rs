// ============================================================================
// Decimal Normalizer
// Pure transformation of a decimal value into a fixed-point target format
// ============================================================================

use super::rounding::RoundingMode;
use crate::interfaces::{NoOpObserver, NormalizeEvent, NormalizeObserver};
use crate::numeric::{pow10, DecimalValue, NumericError, NumericResult, ScaleSpec};
use chrono::Utc;
use std::cmp::Ordering;
use std::sync::Arc;

/// Normalizes decimal values to a fixed-point target format.
///
/// Applies the scale adjustment a `DECIMAL(precision, scale)` column
/// performs on store:
/// - fewer fractional digits than the target scale: right-pad with zeros
/// - more fractional digits than the target scale: drop the excess,
///   truncating by default (see [`RoundingMode`])
/// - equal scale: the value passes through unchanged
///
/// The transformation is stateless and referentially transparent; a
/// normalizer can be shared freely across threads.
///
/// # Example
/// ```ignore
/// let spec = ScaleSpec::new(10, 5)?;
/// let normalizer = DecimalNormalizer::new(spec);
///
/// assert_eq!(normalizer.normalize_str("3.66")?, "3.66000");
/// assert_eq!(normalizer.normalize_str("3.66666666")?, "3.66666");
/// ```
#[derive(Clone)]
pub struct DecimalNormalizer {
    spec: ScaleSpec,
    rounding: RoundingMode,
    observer: Arc<dyn NormalizeObserver>,
}

impl DecimalNormalizer {
    /// Create a normalizer for a target format, truncating by default.
    pub fn new(spec: ScaleSpec) -> Self {
        Self {
            spec,
            rounding: RoundingMode::default(),
            observer: Arc::new(NoOpObserver),
        }
    }

    /// Builder method: opt into a rounding mode for scale reduction.
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Builder method: attach an observer for normalization events.
    pub fn with_observer(mut self, observer: Arc<dyn NormalizeObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The target format this normalizer applies.
    #[inline]
    pub const fn spec(&self) -> ScaleSpec {
        self.spec
    }

    /// The configured disposal policy for excess digits.
    #[inline]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Normalize `input` to exactly `spec.scale()` fractional digits.
    ///
    /// # Errors
    /// - `OutOfRange` if the integer digit count exceeds
    ///   `precision - scale`, on input or after a half-up carry
    ///   (`9.9995` rounded to scale 3 is `10.000`)
    /// - `Overflow` if zero-padding pushes the coefficient past 38 digits
    pub fn normalize(&self, input: DecimalValue) -> NumericResult<DecimalValue> {
        if input.integer_digit_count() > self.spec.integer_capacity() {
            return Err(NumericError::OutOfRange);
        }

        let target = self.spec.scale();
        let output = match input.scale().cmp(&target) {
            Ordering::Equal => input,
            Ordering::Less => {
                let added = target - input.scale();
                let padded = input
                    .unscaled()
                    .checked_mul(pow10(added))
                    .ok_or(NumericError::Overflow)?;
                let value = DecimalValue::from_unscaled(padded, target)?;
                self.observer.on_event(NormalizeEvent::FractionPadded {
                    from_scale: input.scale(),
                    to_scale: target,
                    timestamp: Utc::now(),
                });
                value
            },
            Ordering::Greater => {
                let dropped = input.scale() - target;
                let reduced = self.rounding.reduce(input.unscaled(), dropped)?;
                let value = DecimalValue::from_unscaled(reduced, target)?;
                let event = match self.rounding {
                    RoundingMode::Truncate => NormalizeEvent::DigitsTruncated {
                        from_scale: input.scale(),
                        to_scale: target,
                        timestamp: Utc::now(),
                    },
                    RoundingMode::HalfUp => NormalizeEvent::DigitsRounded {
                        from_scale: input.scale(),
                        to_scale: target,
                        timestamp: Utc::now(),
                    },
                };
                self.observer.on_event(event);
                value
            },
        };

        // A half-up carry can mint a new integer digit
        if output.integer_digit_count() > self.spec.integer_capacity() {
            return Err(NumericError::OutOfRange);
        }
        Ok(output)
    }

    /// Normalize a decimal string, returning the normalized string.
    ///
    /// # Errors
    /// `MalformedInput` for invalid numerals, plus everything
    /// [`normalize`](Self::normalize) reports.
    pub fn normalize_str(&self, input: &str) -> NumericResult<String> {
        let value: DecimalValue = input.parse()?;
        Ok(self.normalize(value)?.to_string())
    }
}

/// One-shot string form: normalize `input` against `DECIMAL(precision, scale)`.
///
/// # Errors
/// `InvalidSpec` for a bad precision/scale pair, otherwise as
/// [`DecimalNormalizer::normalize_str`].
pub fn normalize(input: &str, precision: u32, scale: u32) -> NumericResult<String> {
    let spec = ScaleSpec::new(precision, scale)?;
    DecimalNormalizer::new(spec).normalize_str(input)
}

// ============================================================================
// Tests
// ============================================================================


// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    // Coefficients stay at 13 digits so any target scale up to 10 leaves
    // integer capacity to spare under the 38-digit ceiling.
    const COEFF: std::ops::RangeInclusive<i128> = -9_999_999_999_999i128..=9_999_999_999_999i128;

    proptest! {
        #[test]
        fn prop_identity_at_equal_scale(unscaled in COEFF, scale in 0u32..=8) {
            let value = DecimalValue::from_unscaled(unscaled, scale).unwrap();
            let spec = ScaleSpec::new(ScaleSpec::MAX_PRECISION, scale).unwrap();
            prop_assert_eq!(DecimalNormalizer::new(spec).normalize(value).unwrap(), value);
        }

        #[test]
        fn prop_output_scale_matches_spec(
            unscaled in COEFF,
            value_scale in 0u32..=10,
            target_scale in 0u32..=10,
        ) {
            let value = DecimalValue::from_unscaled(unscaled, value_scale).unwrap();
            let spec = ScaleSpec::new(ScaleSpec::MAX_PRECISION, target_scale).unwrap();
            let output = DecimalNormalizer::new(spec).normalize(value).unwrap();
            prop_assert_eq!(output.scale(), target_scale);
        }

        #[test]
        fn prop_padding_appends_zeros_textually(
            unscaled in COEFF,
            value_scale in 0u32..=6,
            extra in 1u32..=4,
        ) {
            let value = DecimalValue::from_unscaled(unscaled, value_scale).unwrap();
            let target = value_scale + extra;
            let spec = ScaleSpec::new(ScaleSpec::MAX_PRECISION, target).unwrap();
            let output = DecimalNormalizer::new(spec).normalize(value).unwrap();

            let mut expected = value.to_string();
            if value_scale == 0 {
                expected.push('.');
            }
            expected.push_str(&"0".repeat(extra as usize));
            prop_assert_eq!(output.to_string(), expected);
        }

        #[test]
        fn prop_truncation_keeps_fraction_prefix(
            unscaled in 0i128..=9_999_999_999_999i128,
            target_scale in 0u32..=6,
            extra in 1u32..=4,
        ) {
            let value_scale = target_scale + extra;
            let value = DecimalValue::from_unscaled(unscaled, value_scale).unwrap();
            let spec = ScaleSpec::new(ScaleSpec::MAX_PRECISION, target_scale).unwrap();
            let output = DecimalNormalizer::new(spec).normalize(value).unwrap();

            let full = value.to_string();
            let cut = if target_scale == 0 {
                // Drop the fraction and the point entirely
                full[..full.find('.').unwrap()].to_string()
            } else {
                full[..full.find('.').unwrap() + 1 + target_scale as usize].to_string()
            };
            prop_assert_eq!(output.to_string(), cut);
        }

        #[test]
        fn prop_pad_composition(
            unscaled in COEFF,
            value_scale in 0u32..=6,
            extra1 in 0u32..=4,
            extra2 in 0u32..=4,
        ) {
            let value = DecimalValue::from_unscaled(unscaled, value_scale).unwrap();
            let s1 = value_scale + extra1;
            let s2 = s1 + extra2;
            let first = DecimalNormalizer::new(ScaleSpec::new(ScaleSpec::MAX_PRECISION, s1).unwrap());
            let second = DecimalNormalizer::new(ScaleSpec::new(ScaleSpec::MAX_PRECISION, s2).unwrap());

            let composed = second.normalize(first.normalize(value).unwrap()).unwrap();
            let direct = second.normalize(value).unwrap();
            prop_assert_eq!(composed, direct);
        }
    }
}
