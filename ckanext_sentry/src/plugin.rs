use crate::config::SentrySettings;
use crate::error::WiringError;
use crate::handler::SentryForwarder;
use crate::integrations::{JobQueueIntegration, LoggingIntegration, RequestIntegration};
use crate::registry::{GlobalLogRegistry, LogRegistry};
use ckanext_toolkit::{EnvFile, HostCapabilities, HostSettings};
use parking_lot::Mutex;
use sentry::{ClientInitGuard, Integration, IntoDsn};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The plugin that wires a CKAN-style application host to Sentry.
///
/// The host hands its application handle and mutable settings map to
/// [`make_middleware`](Self::make_middleware) during startup. The plugin
/// resolves its settings (environment overlay first, then the legacy
/// `SENTRY_DSN` fallback), optionally installs the
/// [log-forwarding handler](SentryForwarder), initializes the telemetry
/// client with the request, logging, and background-job adapters attached,
/// and returns the application handle unchanged.
///
/// The plugin owns the [client guard](ClientInitGuard) it receives from
/// initialization. Dropping the plugin drops the guard, which flushes
/// pending telemetry.
pub struct SentryPlugin {
    registry: Box<dyn LogRegistry>,
    logging_wired: AtomicBool,
    guard: Mutex<Option<ClientInitGuard>>,
}

impl SentryPlugin {
    /// Creates a plugin over the process-wide
    /// [`GlobalLogRegistry`](crate::GlobalLogRegistry).
    pub fn new() -> Self {
        Self::with_registry(GlobalLogRegistry)
    }

    /// Creates a plugin over the given [log registry](LogRegistry).
    pub fn with_registry(registry: impl LogRegistry + 'static) -> Self {
        Self {
            registry: Box::new(registry),
            logging_wired: AtomicBool::new(false),
            guard: Mutex::new(None),
        }
    }
}

impl Default for SentryPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl SentryPlugin {
    /// Wires telemetry into the given application and returns the
    /// application unchanged.
    ///
    /// On hosts that [inject middleware
    /// directly](HostCapabilities::injects_middleware_directly), this call
    /// is a no-op: the host runs its own wiring, and the settings map is not
    /// touched.
    ///
    /// Everywhere else, the host settings are resolved in place (see
    /// [`SentrySettings::resolve`]), the log-forwarding handler is installed
    /// if `sentry.configure_logging` resolves truthy, and the telemetry
    /// client is initialized. A blank DSN initializes a disabled client
    /// rather than failing. A malformed DSN or an unrecognized
    /// `sentry.log_level` is a [`WiringError`].
    pub fn make_middleware<A>(
        &self,
        app: A,
        settings: &mut HostSettings,
        host: impl AsRef<HostCapabilities>,
    ) -> Result<A, WiringError> {
        let host = host.as_ref();

        if host.injects_middleware_directly() {
            return Ok(app);
        }

        self.wire_telemetry(settings)?;

        Ok(app)
    }

    /// Resolves the settings and brings up the telemetry client.
    ///
    /// Calling this again re-initializes the client (the previous guard is
    /// dropped, flushing its telemetry), but the log-forwarding handler is
    /// only ever installed once per plugin.
    fn wire_telemetry(&self, settings: &mut HostSettings) -> Result<(), WiringError> {
        EnvFile::tap();

        let resolved = SentrySettings::resolve(settings)?;

        if resolved.configure_logging() {
            self.configure_logging(&resolved);
        }

        log::debug!("Adding Sentry middleware...");

        let dsn = resolved
            .dsn()
            .map(|dsn| dsn.unsecure().into_dsn())
            .transpose()
            .map_err(|source| WiringError::Dsn { source })?
            .flatten();

        let guard = sentry::init(sentry::ClientOptions {
            dsn,
            release: sentry::release_name!(),
            integrations: vec![
                Arc::new(RequestIntegration::new()) as Arc<dyn Integration>,
                Arc::new(LoggingIntegration::new(resolved.log_level())),
                Arc::new(JobQueueIntegration::new()),
            ],
            ..Default::default()
        });

        *self.guard.lock() = Some(guard);

        Ok(())
    }

    /// Installs the log-forwarding handler on the registry, once per plugin,
    /// and widens the registry to the resolved severity.
    pub(crate) fn configure_logging(&self, resolved: impl AsRef<SentrySettings>) {
        let resolved = resolved.as_ref();

        if self
            .logging_wired
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            self.registry.install(Box::new(SentryForwarder::new()));
            self.registry.set_max_severity(resolved.log_level());
        }

        log::debug!("Setting up Sentry logger with level {}", resolved.log_level());
    }
}

impl SentryPlugin {
    /// Reports whether this plugin has initialized the telemetry client.
    pub fn initialized(&self) -> bool {
        self.guard.lock().is_some()
    }

    /// Reports whether this plugin has installed the log-forwarding handler.
    pub fn logging_wired(&self) -> bool {
        self.logging_wired.load(Ordering::SeqCst)
    }

    /// Reports whether the initialized client actually ships telemetry.
    ///
    /// A client initialized from a blank DSN is alive but disabled, and this
    /// reports `false` for it.
    pub fn telemetry_enabled(&self) -> bool {
        self.guard
            .lock()
            .as_ref()
            .map_or(false, |guard| guard.is_enabled())
    }
}

impl fmt::Debug for SentryPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentryPlugin")
            .field("logging_wired", &self.logging_wired)
            .finish_non_exhaustive()
    }
}
