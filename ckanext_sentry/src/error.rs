use sentry::types::ParseDsnError;
use thiserror::Error;

/// Represents the ways in which wiring telemetry into the host can fail.
///
/// Nothing here is caught inside the plugin: a wiring failure propagates to
/// the host's startup sequence, which is expected to abort startup. A
/// misconfigured telemetry system should not silently pretend to work.
///
/// A blank or absent DSN is deliberately **not** a failure — it yields a
/// disabled client instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WiringError {
    /// The resolved DSN string could not be parsed.
    ///
    /// The offending value is withheld from the message: a malformed DSN is
    /// frequently a mangled real one, and the secret key inside it does not
    /// belong in logs.
    #[error("failed to parse the resolved Sentry DSN")]
    Dsn {
        /// The underlying parse failure.
        #[source]
        source: ParseDsnError,
    },

    /// The resolved log level names a severity the host does not recognize.
    #[error("unrecognized Sentry log level '{value}'")]
    Level {
        /// The offending level name.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_message_names_the_offender() {
        // Given
        let error = WiringError::Level {
            value: "LOUD".to_owned(),
        };

        // Then
        assert_eq!("unrecognized Sentry log level 'LOUD'", error.to_string());
    }

    #[test]
    fn dsn_message_withholds_the_value() {
        // Given
        let source = "not a dsn".parse::<sentry::types::Dsn>().unwrap_err();
        let error = WiringError::Dsn { source };

        // Then
        assert!(!error.to_string().contains("not a dsn"));
    }
}
