// ============================================================================
// Normalization Observer Interface
// Defines the contract for observing scale-adjustment events
// ============================================================================

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted while a value is normalized to a target format
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NormalizeEvent {
    /// Fractional part right-padded with zeros to reach the target scale
    FractionPadded {
        from_scale: u32,
        to_scale: u32,
        timestamp: DateTime<Utc>,
    },

    /// Excess fractional digits dropped without rounding
    DigitsTruncated {
        from_scale: u32,
        to_scale: u32,
        timestamp: DateTime<Utc>,
    },

    /// Excess fractional digits dropped with half-up rounding
    DigitsRounded {
        from_scale: u32,
        to_scale: u32,
        timestamp: DateTime<Utc>,
    },
}

/// Observer trait for normalization events.
/// Implementations can handle logging, metrics, audit trails, etc.
/// The normalizer itself never logs; observation is the caller's opt-in.
pub trait NormalizeObserver: Send + Sync {
    /// Handle a normalization event
    fn on_event(&self, event: NormalizeEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<NormalizeEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op observer for pure use and testing
pub struct NoOpObserver;

impl NormalizeObserver for NoOpObserver {
    fn on_event(&self, _event: NormalizeEvent) {
        // Do nothing
    }
}

/// Logging observer
pub struct LoggingObserver;

impl NormalizeObserver for LoggingObserver {
    fn on_event(&self, event: NormalizeEvent) {
        tracing::debug!("Normalization event: {:?}", event);
    }
}
