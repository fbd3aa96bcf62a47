// ============================================================================
// Decimal Normalizer Library
// Exact fixed-point normalization with DECIMAL(precision, scale) semantics
// ============================================================================

//! # Decimal Normalizer
//!
//! Normalizes exact decimal values to a fixed-point target format, the way
//! a `DECIMAL(precision, scale)` column stores them.
//!
//! ## Features
//!
//! - **Exact decimal core** — i128 coefficient + scale, no binary
//!   floating point anywhere in the arithmetic
//! - **Column-store semantics** — excess fractional digits truncate
//!   (never round) by default; short fractions zero-pad to the target
//!   scale; rounding is an explicit opt-in
//! - **Typed rejections** — malformed numerals, out-of-range integer
//!   digits, and invalid precision/scale pairs are `Result` errors
//! - **Observer seam** — padding/truncation events go to a pluggable
//!   observer; the library itself never logs
//! - **CLI** — a `normalize-decimal` binary over the same operation
//!   (`cli` feature, on by default)
//!
//! ## Example
//!
//! ```rust
//! use decimal_normalizer::prelude::*;
//!
//! let spec = ScaleSpec::new(10, 5).unwrap();
//! let normalizer = DecimalNormalizer::new(spec);
//!
//! // Scale 2 pads up to scale 5
//! let padded = normalizer
//!     .normalize("3.66".parse::<DecimalValue>().unwrap())
//!     .unwrap();
//! assert_eq!(padded.to_string(), "3.66000");
//!
//! // Scale 8 truncates down to scale 5, without rounding
//! assert_eq!(normalizer.normalize_str("3.66666666").unwrap(), "3.66666");
//!
//! // Rounding is an explicit opt-in
//! let rounding = normalizer.with_rounding(RoundingMode::HalfUp);
//! assert_eq!(rounding.normalize_str("3.66666666").unwrap(), "3.66667");
//! ```

pub mod interfaces;
pub mod normalize;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::interfaces::{
        LoggingObserver, NoOpObserver, NormalizeEvent, NormalizeObserver,
    };
    pub use crate::normalize::{normalize, DecimalNormalizer, RoundingMode};
    pub use crate::numeric::{DecimalValue, NumericError, NumericResult, ScaleSpec};
}
