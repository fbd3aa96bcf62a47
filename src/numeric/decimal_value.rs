// ============================================================================
// Decimal Value
// Exact signed decimal as an integer coefficient plus a fractional scale
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Exact arbitrary-precision signed decimal number.
///
/// Internally stores the unscaled coefficient (the integer obtained by
/// removing the decimal point) as an i128, together with the scale (the
/// number of fractional digits). `366` with scale `2` is `3.66`; the same
/// coefficient with scale `5` is `0.00366`.
///
/// Two values are equal only when both coefficient and scale match, so
/// `3.66` and `3.6600` are distinct values. This is the identity a
/// fixed-point column works with: the textual scale is part of the value.
///
/// # Coefficient Limit
/// The coefficient holds up to 38 significant digits. Construction reports
/// `Overflow` beyond that instead of degrading silently.
///
/// # Float Ingestion
/// There is deliberately no `From<f64>`. The only floating-point path is
/// [`DecimalValue::from_f64`], which goes through the shortest round-trip
/// decimal text of the double. Ingesting the raw binary expansion of a
/// float produces spurious digits (the double nearest `3.66666` expands to
/// `3.66665999...`), and downstream truncation then yields a result whose
/// digits never appeared in the source literal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalValue {
    unscaled: i128,
    scale: u32,
}

// ============================================================================
// Digit Helpers
// ============================================================================

/// Compute 10^n. Valid for n <= 38; callers validate the scale first.
pub(crate) const fn pow10(n: u32) -> i128 {
    let mut result: i128 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Count the decimal digits of `value`. Zero has no digits.
pub(crate) const fn digit_count(mut value: u128) -> u32 {
    let mut count = 0;
    while value != 0 {
        value /= 10;
        count += 1;
    }
    count
}

impl DecimalValue {
    /// Maximum number of significant digits the coefficient can hold
    pub const MAX_DIGITS: u32 = 38;

    /// Zero at scale 0
    pub const ZERO: Self = Self {
        unscaled: 0,
        scale: 0,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an unscaled coefficient and a scale.
    ///
    /// `from_unscaled(366, 2)` is `3.66`.
    ///
    /// # Errors
    /// Returns `Overflow` if the scale or the coefficient's digit count
    /// exceeds [`MAX_DIGITS`](Self::MAX_DIGITS).
    #[inline]
    pub fn from_unscaled(unscaled: i128, scale: u32) -> NumericResult<Self> {
        if scale > Self::MAX_DIGITS {
            return Err(NumericError::Overflow);
        }
        if digit_count(unscaled.unsigned_abs()) > Self::MAX_DIGITS {
            return Err(NumericError::Overflow);
        }
        Ok(Self { unscaled, scale })
    }

    /// Create from a binary double via its shortest round-trip decimal text.
    ///
    /// This is the only floating-point entry point. The double is rendered
    /// to the shortest decimal string that round-trips back to the same
    /// bits, then parsed exactly, so `3.66666_f64` becomes `3.66666` and
    /// not the `3.66665999...` binary expansion.
    ///
    /// # Errors
    /// Returns `MalformedInput` for NaN or infinities, and `Overflow` for
    /// doubles whose shortest text needs more than 38 digits (extreme
    /// magnitudes and subnormals).
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::MalformedInput);
        }
        // f64 Display is the shortest round-trip form, never exponent notation
        value.to_string().parse()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the unscaled coefficient.
    #[inline]
    pub const fn unscaled(self) -> i128 {
        self.unscaled
    }

    /// Get the scale (number of fractional digits).
    #[inline]
    pub const fn scale(self) -> u32 {
        self.scale
    }

    /// Check if the value is zero at any scale.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.unscaled == 0
    }

    /// Check if the value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.unscaled < 0
    }

    /// Count of significant digits in the coefficient.
    #[inline]
    pub const fn significant_digits(self) -> u32 {
        digit_count(self.unscaled.unsigned_abs())
    }

    /// Count of digits left of the decimal point.
    ///
    /// A value below one has no integer digits; `DECIMAL(s, s)` columns
    /// admit exactly those values.
    #[inline]
    pub const fn integer_digit_count(self) -> u32 {
        digit_count(self.unscaled.unsigned_abs() / pow10(self.scale) as u128)
    }

    /// Count of digits right of the decimal point. Same as the scale.
    #[inline]
    pub const fn fraction_digit_count(self) -> u32 {
        self.scale
    }
}

// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

impl DecimalValue {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// Intended for API boundaries only (values arriving from drivers or
    /// deserializers that already speak `Decimal`). The conversion is
    /// exact: `Decimal` carries at most 28 fractional digits and a 96-bit
    /// coefficient, both inside this type's range.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self {
            unscaled: d.mantissa(),
            scale: d.scale(),
        }
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Intended for API boundaries only.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the scale exceeds `Decimal`'s 28-digit limit
    /// - `Overflow` if the coefficient exceeds `Decimal`'s 96-bit range
    pub fn to_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        if self.scale > 28 {
            return Err(NumericError::PrecisionLoss);
        }
        rust_decimal::Decimal::try_from_i128_with_scale(self.unscaled, self.scale)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for DecimalValue {
    type Err = NumericError;

    /// Parse from exact decimal text.
    ///
    /// Accepts an optional leading minus, an integer part, and an optional
    /// fractional part. The scale is exactly the number of fractional
    /// digits written, so `"3.66"` and `"3.6600"` parse to distinct values.
    ///
    /// # Examples
    /// - "3.66" -> coefficient 366, scale 2
    /// - "-0.001" -> coefficient -1, scale 3
    /// - ".5" -> coefficient 5, scale 1
    /// - "42" -> coefficient 42, scale 0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::MalformedInput);
        }

        let (is_negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (int_str, frac_str) = match s.find('.') {
            Some(pos) => (&s[..pos], &s[pos + 1..]),
            None => (s, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::MalformedInput);
        }
        if !int_str.bytes().all(|b| b.is_ascii_digit())
            || !frac_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(NumericError::MalformedInput);
        }
        if frac_str.len() > Self::MAX_DIGITS as usize {
            return Err(NumericError::Overflow);
        }

        let mut unscaled: i128 = 0;
        for b in int_str.bytes().chain(frac_str.bytes()) {
            unscaled = unscaled
                .checked_mul(10)
                .and_then(|v| v.checked_add((b - b'0') as i128))
                .ok_or(NumericError::Overflow)?;
        }
        if is_negative {
            unscaled = -unscaled;
        }

        Self::from_unscaled(unscaled, frac_str.len() as u32)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecimalValue({}, unscaled={}, scale={})",
            self, self.unscaled, self.scale
        )
    }
}

impl fmt::Display for DecimalValue {
    /// Renders with exactly `scale` fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.unscaled < 0 { "-" } else { "" };
        let digits = self.unscaled.unsigned_abs();

        if self.scale == 0 {
            write!(f, "{}{}", sign, digits)
        } else {
            let divisor = pow10(self.scale) as u128;
            let int_part = digits / divisor;
            let frac_part = digits % divisor;
            write!(
                f,
                "{}{}.{:0>width$}",
                sign,
                int_part,
                frac_part,
                width = self.scale as usize
            )
        }
    }
}

// ============================================================================
// Serde (string form preserves the exact scale)
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for DecimalValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DecimalValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
