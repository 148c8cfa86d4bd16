//! Periodic hit-rate reporting
//!
//! A cache calls its [`HitRateReporter`] each time its request count
//! reaches a multiple of the configured report interval. Reporters cannot
//! fail the lookup that triggered them.

use tracing::info;

use crate::stats::CacheStats;

/// Receives hit-rate observations from a cache
pub trait HitRateReporter {
    /// Called with the counters as they stand after the triggering request
    fn report(&mut self, stats: &CacheStats);
}

/// Emits an INFO event on the `lrucache::report` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl HitRateReporter for TracingReporter {
    fn report(&mut self, stats: &CacheStats) {
        info!(
            target: "lrucache::report",
            hits = stats.hits(),
            requests = stats.requests(),
            hit_ratio = stats.hit_ratio(),
            "cache hit rate"
        );
    }
}

/// Discards every observation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl HitRateReporter for NoopReporter {
    fn report(&mut self, _stats: &CacheStats) {}
}

impl<F> HitRateReporter for F
where
    F: FnMut(&CacheStats),
{
    fn report(&mut self, stats: &CacheStats) {
        self(stats)
    }
}

/// Run `f` under a fmt subscriber and return everything it logged
#[cfg(test)]
pub(crate) fn capture_logs<F: FnOnce()>(level: tracing::Level, f: F) -> String {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(level)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_reporter_emits_counts() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();

        let output = capture_logs(tracing::Level::INFO, || {
            TracingReporter.report(&stats);
        });

        assert!(output.contains("cache hit rate"), "{output}");
        assert!(output.contains("lrucache::report"), "{output}");
        assert!(output.contains("hits=1"), "{output}");
        assert!(output.contains("requests=2"), "{output}");
    }

    #[test]
    fn test_closure_reporter() {
        let mut seen = Vec::new();
        {
            let mut reporter = |stats: &CacheStats| seen.push(*stats);
            let mut stats = CacheStats::new();
            stats.record_miss();
            reporter.report(&stats);
        }
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].requests(), 1);
    }
}
