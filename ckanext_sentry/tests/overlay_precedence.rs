#[cfg(test)]
mod tests {
    use ckanext_sentry::{
        SentrySettings, Severity, KEY_CONFIGURE_LOGGING, KEY_DSN, KEY_LOG_LEVEL,
    };
    use ckanext_toolkit::HostSettings;
    use pretty_assertions::assert_eq;
    use scopeguard::defer;
    use std::env::remove_var;

    #[test]
    fn environment_beats_explicit_configuration() {
        // Given
        unsafe {
            std::env::set_var("CKAN_SENTRY_DSN", "https://env@sentry.example.org/1");
            std::env::set_var("CKAN_SENTRY_CONFIGURE_LOGGING", "yes");
            std::env::set_var("CKAN_SENTRY_LOG_LEVEL", "WARNING");
            std::env::remove_var("SENTRY_DSN");
        }

        // Ensure cleanup is executed after the test, even on failure
        defer! {
            clean_up_environment();
        }

        let mut settings = HostSettings::new();
        settings.set(KEY_DSN, "https://file@sentry.example.org/2");
        settings.set(KEY_CONFIGURE_LOGGING, "false");
        settings.set(KEY_LOG_LEVEL, "ERROR");

        // When
        let resolved = SentrySettings::resolve(&mut settings).unwrap();

        // Then
        assert_eq!(
            Some("https://env@sentry.example.org/1"),
            resolved.dsn().map(|dsn| dsn.unsecure()),
        );
        assert!(resolved.configure_logging());
        assert_eq!(Severity::Warning, resolved.log_level());

        // Then: the settings map itself carries the overlaid values
        assert_eq!(
            Some("https://env@sentry.example.org/1"),
            settings.get(KEY_DSN),
        );
        assert_eq!(Some("yes"), settings.get(KEY_CONFIGURE_LOGGING));
        assert_eq!(Some("WARNING"), settings.get(KEY_LOG_LEVEL));
    }

    fn clean_up_environment() {
        unsafe {
            remove_var("CKAN_SENTRY_DSN");
            remove_var("CKAN_SENTRY_CONFIGURE_LOGGING");
            remove_var("CKAN_SENTRY_LOG_LEVEL");
        }
    }
}
