// ============================================================================
// Numeric Module
// Exact decimal values and fixed-point target formats
// ============================================================================
//
// This module provides:
// - DecimalValue: exact signed decimal (i128 coefficient + scale)
// - ScaleSpec: validated DECIMAL(precision, scale) target format
// - NumericError: error types for parsing and normalization
//
// Design principles:
// - No binary floating-point representation anywhere in the core
// - Values are constructed from exact decimal text only; the single f64
//   entry point goes through the shortest round-trip string
// - All fallible operations return Result (no panics)
// - Immutable Copy values, safe to share across threads

mod decimal_value;
mod errors;
mod scale_spec;

pub(crate) use decimal_value::pow10;
pub use decimal_value::DecimalValue;
pub use errors::{NumericError, NumericResult};
pub use scale_spec::ScaleSpec;
