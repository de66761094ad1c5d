use crate::config::Severity;
use sentry::{ClientOptions, Integration};

/// The logging adapter attached to the client at initialization.
///
/// Carries the severity resolved from the host settings and prepares the
/// client for records arriving through the
/// [`SentryForwarder`](crate::SentryForwarder): the `log` crate's own frames
/// are excluded from in-app detection, the forwarder's dispatch frame is
/// treated as a border frame, and the process-wide record flow is widened to
/// the carried severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingIntegration {
    severity: Severity,
}

impl LoggingIntegration {
    /// Creates a logging adapter at the given severity.
    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }

    /// Returns the severity this adapter was created at.
    pub fn severity(&self) -> Severity {
        self.severity
    }
}

impl Default for LoggingIntegration {
    fn default() -> Self {
        Self::new(Severity::default())
    }
}

impl Integration for LoggingIntegration {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn setup(&self, options: &mut ClientOptions) {
        options.in_app_exclude.push("log::");
        options
            .extra_border_frames
            .push("<ckanext_sentry::handler::SentryForwarder as log::Log>::log");

        let floor = self.severity.to_level_filter();
        if floor > log::max_level() {
            log::set_max_level(floor);
        }
    }
}
