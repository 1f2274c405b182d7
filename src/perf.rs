//! Performance instrumentation.
//!
//! Scoped timers around the hot paths (the reposition pass and drag moves).
//! Compiled in only with the `profiling` feature:
//! ```toml
//! [dependencies]
//! timeline-markers = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn reposition(&mut self) {
//!     profile_scope!("reposition");
//!     // ... work ...
//! }
//! ```

use crate::constants::REPOSITION_WARN_MS;
use std::time::Instant;
use tracing::{trace, warn};

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

pub use profile_scope;

/// A scoped timer that logs its duration on drop and warns past a threshold.
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

    /// Timer with the default reposition budget.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, REPOSITION_WARN_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.elapsed_ms();
        if ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        } else {
            trace!(operation = self.name, elapsed_ms = ms, "Operation timed");
        }
    }
}
