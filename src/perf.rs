//! Profiling instrumentation.
//!
//! `profile_scope!` times a block and warns through `tracing` when it runs
//! longer than its threshold. It compiles to nothing unless the `profiling`
//! feature is enabled.
//!
//! ```ignore
//! fn finalize_selection() {
//!     profile_scope!("finalize_selection");
//!     // ... work ...
//! }
//! ```

use crate::constants::SLOW_SCOPE_MS;
use std::time::Instant;
use tracing::warn;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// RAII timer that logs on drop when the scope was slow
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the default slow-scope threshold
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, SLOW_SCOPE_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();
        if elapsed > self.threshold_ms {
            warn!(
                scope = self.name,
                elapsed_ms = elapsed,
                threshold_ms = self.threshold_ms,
                "Slow scope"
            );
        }
    }
}
