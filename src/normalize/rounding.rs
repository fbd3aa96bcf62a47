// ============================================================================
// Rounding Mode
// Disposal policy for excess fractional digits during scale reduction
// ============================================================================

use crate::numeric::{pow10, NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How excess fractional digits are disposed of when reducing scale.
///
/// `Truncate` is the default and matches what a fixed-point column does on
/// store: `3.66666666` at scale 5 becomes `3.66666`, never `3.66667`.
/// `HalfUp` is an explicit opt-in for callers that want conventional
/// rounding instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Drop excess digits without adjusting what remains
    #[default]
    Truncate,
    /// Round half away from zero on the dropped digits
    HalfUp,
}

impl RoundingMode {
    /// Reduce `unscaled` by `drop` decimal digits under this mode.
    ///
    /// # Errors
    /// Returns `Overflow` if the half-up adjustment leaves i128 range.
    pub(crate) fn reduce(self, unscaled: i128, drop: u32) -> NumericResult<i128> {
        let divisor = pow10(drop);
        match self {
            // i128 division truncates toward zero, for negatives too
            RoundingMode::Truncate => Ok(unscaled / divisor),
            RoundingMode::HalfUp => {
                let half = divisor / 2;
                let adjusted = if unscaled >= 0 {
                    unscaled.checked_add(half)
                } else {
                    unscaled.checked_sub(half)
                }
                .ok_or(NumericError::Overflow)?;
                Ok(adjusted / divisor)
            },
        }
    }
}
