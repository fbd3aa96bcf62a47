// ============================================================================
// Interfaces Module
// Observer contracts for normalization events
// ============================================================================

mod observer;

pub use observer::{LoggingObserver, NoOpObserver, NormalizeEvent, NormalizeObserver};
