//! Time source abstraction.
//!
//! The control loop reads the wall clock through this module so tests can
//! pin time to a known instant and get deterministic solar positions. The
//! production source is the system clock; the override hook is only compiled
//! with the `testing-support` feature (or under `cfg(test)`).

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Global time source instance, defaults to [`RealTimeSource`].
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Trait for abstracting clock reads.
pub trait TimeSource: Send + Sync {
    /// Get the current UTC time.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Real-time implementation that uses the system clock.
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

fn source() -> &'static Arc<dyn TimeSource> {
    TIME_SOURCE.get_or_init(|| Arc::new(RealTimeSource))
}

/// Get the current UTC time from the active source.
pub fn now_utc() -> DateTime<Utc> {
    source().now_utc()
}

/// Replace the global time source before first use.
///
/// Fails if a source is already installed (including the lazily installed
/// real clock), so call it before anything reads the time. Test binaries
/// install one shared source per process and mutate it between cases.
#[cfg(any(test, feature = "testing-support"))]
pub fn override_time_source(time_source: Arc<dyn TimeSource>) -> anyhow::Result<()> {
    TIME_SOURCE
        .set(time_source)
        .map_err(|_| anyhow::anyhow!("Time source already initialized"))
}
