// ============================================================================
// Scale Spec
// Validated fixed-point target format, DECIMAL(precision, scale) style
// ============================================================================

use super::decimal_value::DecimalValue;
use super::errors::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable `(precision, scale)` pair describing a fixed-point format.
///
/// Mirrors a `DECIMAL(precision, scale)` column definition: `precision` is
/// the total number of significant digits the format allows, `scale` the
/// number of fractional digits every stored value carries.
///
/// # Example
/// ```ignore
/// let spec = ScaleSpec::new(10, 5)?; // DECIMAL(10, 5)
/// assert_eq!(spec.integer_capacity(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScaleSpec {
    precision: u32,
    scale: u32,
}

impl ScaleSpec {
    /// Widest precision a spec may declare
    pub const MAX_PRECISION: u32 = DecimalValue::MAX_DIGITS;

    /// Create a validated spec.
    ///
    /// # Errors
    /// Returns `InvalidSpec` unless `1 <= precision <= 38` and
    /// `scale <= precision`.
    pub fn new(precision: u32, scale: u32) -> NumericResult<Self> {
        if precision == 0 || precision > Self::MAX_PRECISION || scale > precision {
            return Err(NumericError::InvalidSpec);
        }
        Ok(Self { precision, scale })
    }

    /// Total number of significant digits the format allows.
    #[inline]
    pub const fn precision(self) -> u32 {
        self.precision
    }

    /// Number of fractional digits every stored value carries.
    #[inline]
    pub const fn scale(self) -> u32 {
        self.scale
    }

    /// Number of integer digits the format has room for.
    #[inline]
    pub const fn integer_capacity(self) -> u32 {
        self.precision - self.scale
    }
}

impl fmt::Display for ScaleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DECIMAL({}, {})", self.precision, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_spec() {
        let spec = ScaleSpec::new(10, 5).unwrap();
        assert_eq!(spec.precision(), 10);
        assert_eq!(spec.scale(), 5);
        assert_eq!(spec.integer_capacity(), 5);
    }

    #[test]
    fn test_fraction_only_spec() {
        // DECIMAL(5, 5) admits only values below one
        let spec = ScaleSpec::new(5, 5).unwrap();
        assert_eq!(spec.integer_capacity(), 0);
    }

    #[test]
    fn test_invalid_specs() {
        assert_eq!(ScaleSpec::new(0, 0), Err(NumericError::InvalidSpec));
        assert_eq!(ScaleSpec::new(10, 11), Err(NumericError::InvalidSpec));
        assert_eq!(ScaleSpec::new(39, 2), Err(NumericError::InvalidSpec));
    }

    #[test]
    fn test_display() {
        let spec = ScaleSpec::new(10, 5).unwrap();
        assert_eq!(spec.to_string(), "DECIMAL(10, 5)");
    }
}
