// ============================================================================
// Normalize Module
// Scale adjustment with fixed-point column semantics
// ============================================================================
//
// This module provides:
// - DecimalNormalizer: pad/truncate a value to a ScaleSpec's scale
// - RoundingMode: truncation default, half-up opt-in
// - normalize: one-shot string-in/string-out form
//
// Design principles:
// - Truncation (not rounding) is the default, matching column-store behavior
// - Out-of-range integer digits are an explicit typed rejection
// - The transformation is pure; events go to an opt-in observer only

mod normalizer;
mod rounding;

pub use normalizer::{normalize, DecimalNormalizer};
pub use rounding::RoundingMode;
