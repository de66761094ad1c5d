#[cfg(test)]
mod tests {
    use ckanext_sentry::{LogRegistry, SentryPlugin, Severity, KEY_CONFIGURE_LOGGING, KEY_LOG_LEVEL};
    use ckanext_toolkit::{HostCapabilities, HostSettings};
    use log::Log;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Records what the plugin does to the registry, without touching the
    /// process-wide logger.
    struct RecordingRegistry {
        installs: Arc<AtomicUsize>,
        severity: Arc<Mutex<Option<Severity>>>,
    }

    impl LogRegistry for RecordingRegistry {
        fn install(&self, _handler: Box<dyn Log>) {
            self.installs.fetch_add(1, Ordering::SeqCst);
        }

        fn set_max_severity(&self, severity: Severity) {
            *self.severity.lock() = Some(severity);
        }
    }

    #[test]
    fn handler_is_installed_once() {
        // Given
        unsafe {
            std::env::remove_var("CKAN_SENTRY_DSN");
            std::env::remove_var("CKAN_SENTRY_CONFIGURE_LOGGING");
            std::env::remove_var("CKAN_SENTRY_LOG_LEVEL");
            std::env::remove_var("SENTRY_DSN");
        }

        let installs = Arc::new(AtomicUsize::new(0));
        let severity = Arc::new(Mutex::new(None));
        let plugin = SentryPlugin::with_registry(RecordingRegistry {
            installs: Arc::clone(&installs),
            severity: Arc::clone(&severity),
        });

        let mut settings = HostSettings::new();
        settings.set(KEY_CONFIGURE_LOGGING, "true");
        settings.set(KEY_LOG_LEVEL, "WARNING");
        let host = HostCapabilities::default();

        // When
        plugin.make_middleware("app", &mut settings, &host).unwrap();

        // Then
        assert!(plugin.logging_wired());
        assert_eq!(1, installs.load(Ordering::SeqCst));
        assert_eq!(Some(Severity::Warning), *severity.lock());

        // When: the host wires the middleware again
        plugin.make_middleware("app", &mut settings, &host).unwrap();

        // Then: the client is re-initialized, the handler is not
        assert!(plugin.initialized());
        assert_eq!(1, installs.load(Ordering::SeqCst));
    }
}
