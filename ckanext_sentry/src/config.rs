use crate::error::WiringError;
use ckanext_toolkit::HostSettings;
use secure_string::SecureString;
use std::env;

/// Severity tiers recognized by the host.
mod severity;
pub use self::severity::Severity;

/// The settings key holding the Sentry DSN.
pub const KEY_DSN: &str = "sentry.dsn";

/// The settings key holding the log-forwarding switch.
pub const KEY_CONFIGURE_LOGGING: &str = "sentry.configure_logging";

/// The settings key holding the severity delivered to the forwarder.
pub const KEY_LOG_LEVEL: &str = "sentry.log_level";

/// The fixed mapping from settings key to the environment variable that
/// overrides it.
///
/// During resolution, every variable in this table that is set and non-empty
/// is written into the host settings map, **overwriting** any value the host
/// configured explicitly. That precedence — environment over explicit
/// configuration — is deliberate: it lets containerized deployments retarget
/// telemetry without editing the host's configuration file.
pub const ENV_OVERLAY: [(&str, &str); 3] = [
    (KEY_DSN, "CKAN_SENTRY_DSN"),
    (KEY_CONFIGURE_LOGGING, "CKAN_SENTRY_CONFIGURE_LOGGING"),
    (KEY_LOG_LEVEL, "CKAN_SENTRY_LOG_LEVEL"),
];

/// The unprefixed legacy variable honored as a lower-priority DSN fallback.
///
/// Unlike the [overlay](ENV_OVERLAY), the fallback never overwrites: it
/// applies only while [`sentry.dsn`](KEY_DSN) is blank.
pub const ENV_FALLBACK_DSN: &str = "SENTRY_DSN";

/// The plugin's view of the host settings after resolution: environment
/// overlay applied, fallbacks considered, values parsed.
///
/// Produced by [`SentrySettings::resolve`]; the raw map stays with the host,
/// this view travels into initialization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SentrySettings {
    dsn: Option<SecureString>,
    configure_logging: bool,
    log_level: Severity,
}

impl SentrySettings {
    /// Resolves the plugin settings against the given host settings map,
    /// mutating the map in place.
    ///
    /// Resolution proceeds in three steps:
    ///
    /// 1. every variable in the [environment overlay](ENV_OVERLAY) that is
    ///    set and non-empty is written into the map, overwriting existing
    ///    entries;
    /// 2. if [`sentry.dsn`](KEY_DSN) is still blank and the legacy
    ///    [`SENTRY_DSN`](ENV_FALLBACK_DSN) variable is set and non-empty,
    ///    its value is written under [`sentry.dsn`](KEY_DSN);
    /// 3. the resulting entries are parsed into this view. A blank DSN
    ///    resolves to `None`; an unrecognized log level is a
    ///    [`WiringError::Level`].
    pub fn resolve(settings: &mut HostSettings) -> Result<Self, WiringError> {
        Self::overlay(settings);
        Self::fall_back_dsn(settings);

        Self::from_settings(settings)
    }

    /// Applies the [environment overlay](ENV_OVERLAY) to the given map.
    fn overlay(settings: &mut HostSettings) {
        for (key, variable) in ENV_OVERLAY {
            if let Ok(value) = env::var(variable) {
                if !value.is_empty() {
                    settings.set(key, value);
                }
            }
        }
    }

    /// Applies the legacy [`SENTRY_DSN`](ENV_FALLBACK_DSN) fallback to the
    /// given map.
    fn fall_back_dsn(settings: &mut HostSettings) {
        if !settings.is_blank(KEY_DSN) {
            return;
        }

        if let Ok(value) = env::var(ENV_FALLBACK_DSN) {
            if !value.is_empty() {
                settings.set(KEY_DSN, value);
            }
        }
    }

    /// Parses the plugin's entries out of the given map.
    pub(crate) fn from_settings(settings: &HostSettings) -> Result<Self, WiringError> {
        let dsn = settings
            .get(KEY_DSN)
            .filter(|value| !value.trim().is_empty())
            .map(SecureString::from);

        let configure_logging = settings.truthy(KEY_CONFIGURE_LOGGING);

        let log_level = match settings.get(KEY_LOG_LEVEL) {
            Some(value) => value.parse()?,
            None => Severity::default(),
        };

        Ok(Self {
            dsn,
            configure_logging,
            log_level,
        })
    }
}

impl SentrySettings {
    /// Returns the resolved DSN, if any. A `None` DSN initializes a disabled
    /// client.
    pub fn dsn(&self) -> Option<&SecureString> {
        self.dsn.as_ref()
    }

    /// Reports whether the log-forwarding handler should be installed.
    pub fn configure_logging(&self) -> bool {
        self.configure_logging
    }

    /// Returns the severity delivered to the forwarder and carried by the
    /// logging integration.
    pub fn log_level(&self) -> Severity {
        self.log_level
    }
}

impl AsRef<SentrySettings> for SentrySettings {
    fn as_ref(&self) -> &SentrySettings {
        self
    }
}
