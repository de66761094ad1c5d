#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(test, deny(warnings))]

/// Exposes the environment overlay and the resolved plugin settings.
mod config;
pub use self::config::{
    SentrySettings, Severity, ENV_FALLBACK_DSN, ENV_OVERLAY, KEY_CONFIGURE_LOGGING, KEY_DSN,
    KEY_LOG_LEVEL,
};

/// Failures surfaced while wiring telemetry into the host.
mod error;
pub use self::error::WiringError;

/// Implements the log-forwarding handler and its console sink.
mod handler;
pub use self::handler::{ConsoleSink, SentryForwarder};

/// Abstracts the process-wide logging registry.
mod registry;
pub use self::registry::{GlobalLogRegistry, LogRegistry};

/// Implements the integration adapters handed to the Sentry client.
mod integrations;
pub use self::integrations::{JobQueueIntegration, LoggingIntegration, RequestIntegration};

/// Implements the plugin facade around middleware setup.
mod plugin;
pub use self::plugin::SentryPlugin;
pub use sentry::ClientInitGuard as SentryGuard;

/// Implements a [`SentryLayer`](sentry_tracing::SentryLayer) for hosts that
/// log through the [`tracing`](::tracing) crate rather than [`log`]. The
/// layer applies the same event/breadcrumb split as the log forwarder, at
/// the resolved severity.
#[cfg(feature = "tracing")]
pub mod tracing;
