use log::{LevelFilter, Log, Metadata, Record};
use std::fmt;
use std::io;
use std::io::Write;

mod convert;

/// The handler installed on the process-wide logging system when
/// log forwarding is switched on.
///
/// Every record that clears the `threshold` is shipped to the telemetry
/// backend: error records become full events, everything below becomes a
/// breadcrumb attached to the current scope. All records are additionally
/// delegated to the destination logger (a [`ConsoleSink`] unless overridden
/// with [`with_dest`](Self::with_dest)), so installing the forwarder never
/// silences the regular console output.
///
/// Records originating inside the telemetry pipeline itself never re-enter
/// capture; they go to the destination logger only.
pub struct SentryForwarder {
    threshold: LevelFilter,
    dest: Box<dyn Log>,
}

impl SentryForwarder {
    /// Creates a forwarder that ships every record and mirrors them onto a
    /// [`ConsoleSink`].
    pub fn new() -> Self {
        Self {
            threshold: LevelFilter::Trace,
            dest: Box::new(ConsoleSink),
        }
    }

    /// Replaces the capture threshold. Records above the threshold are still
    /// delegated to the destination logger, but are neither captured nor
    /// recorded as breadcrumbs.
    pub fn with_threshold(mut self, threshold: impl Into<LevelFilter>) -> Self {
        self.threshold = threshold.into();

        self
    }

    /// Replaces the destination logger that records are delegated to.
    pub fn with_dest(mut self, dest: impl Log + 'static) -> Self {
        self.dest = Box::new(dest);

        self
    }
}

impl Default for SentryForwarder {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for SentryForwarder {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.threshold || self.dest.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if internal_target(record.target()) {
            if self.dest.enabled(record.metadata()) {
                self.dest.log(record);
            }

            return;
        }

        if record.level() <= self.threshold {
            if record.level() == log::Level::Error {
                sentry::capture_event(convert::event_for(record));
            } else {
                sentry::add_breadcrumb(|| convert::breadcrumb_for(record));
            }
        }

        if self.dest.enabled(record.metadata()) {
            self.dest.log(record);
        }
    }

    fn flush(&self) {
        self.dest.flush();
    }
}

impl fmt::Debug for SentryForwarder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentryForwarder")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

/// Reports whether the given record target belongs to the telemetry
/// pipeline's own namespace.
fn internal_target(target: &str) -> bool {
    target == "sentry" || target.starts_with("sentry::") || target.starts_with("sentry_")
}

/// The plain standard-error logger that the forwarder delegates to by
/// default.
///
/// This is the visible half of the pipeline: records that the forwarder
/// withholds from capture (notably the telemetry pipeline's own) still
/// surface here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl Log for ConsoleSink {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        eprintln!("{:<5} {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
