//! Crate-wide constants.
//!
//! Centralizes wire keys, messages and timing values.

use std::time::Duration;

// ============================================================================
// Drag Session
// ============================================================================

/// Format key under which the drag payload is stored in the drag-data bag
pub const DRAG_PAYLOAD_FORMAT: &str = "application/x-selector-drag";

// ============================================================================
// Notifications
// ============================================================================

/// Message shown when a drop references an item outside this container
pub const OUT_OF_SCOPE_MESSAGE: &str = "Element outside of scope!";

/// Default time a toast stays visible
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

/// Maximum number of toasts kept in the queue
pub const MAX_TOASTS: usize = 5;

// ============================================================================
// Profiling
// ============================================================================

/// Threshold above which a profiled scope logs a warning (milliseconds)
pub const SLOW_SCOPE_MS: f64 = 4.0;
