use crate::error::WiringError;
use log::LevelFilter;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// An ordered logging severity tier, spelled the way the hosting framework
/// spells its levels.
///
/// A severity is "higher" if it is more severe: [`Critical`](Severity::Critical)
/// is higher than [`Error`](Severity::Error), which is higher than
/// [`Warning`](Severity::Warning), and so on down to
/// [`Debug`](Severity::Debug).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Diagnostic detail; the most verbose tier.
    Debug,

    /// Routine operational messages. The default tier.
    Info,

    /// Something unexpected that the application worked around.
    Warning,

    /// A failure that affected the current operation.
    Error,

    /// A failure that affects the whole application.
    Critical,
}

impl Default for Severity {
    /// Defines the severity assumed when the host does not configure one.
    fn default() -> Self {
        Self::Info
    }
}

impl Severity {
    /// Exposes the canonical host spelling of this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Translates this severity to the `log` crate's [`LevelFilter`].
    ///
    /// The `log` crate has no tier above [`Error`](log::Level::Error), so
    /// [`Critical`](Severity::Critical) maps to
    /// [`LevelFilter::Error`] as the nearest gate.
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            Self::Debug => LevelFilter::Debug,
            Self::Info => LevelFilter::Info,
            Self::Warning => LevelFilter::Warn,
            Self::Error | Self::Critical => LevelFilter::Error,
        }
    }

    /// Translates this severity to the `tracing` crate's level filter.
    #[cfg(feature = "tracing")]
    pub fn to_tracing_level_filter(&self) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter as TracingLevelFilter;

        match self {
            Self::Debug => TracingLevelFilter::DEBUG,
            Self::Info => TracingLevelFilter::INFO,
            Self::Warning => TracingLevelFilter::WARN,
            Self::Error | Self::Critical => TracingLevelFilter::ERROR,
        }
    }
}

impl FromStr for Severity {
    type Err = WiringError;

    /// Parses the host's severity names, case-insensitively, including the
    /// `WARN` and `FATAL` aliases the host recognizes.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" | "FATAL" => Ok(Self::Critical),
            _ => Err(WiringError::Level {
                value: value.to_owned(),
            }),
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Severity> for LevelFilter {
    fn from(value: Severity) -> Self {
        value.to_level_filter()
    }
}

impl From<&Severity> for LevelFilter {
    fn from(value: &Severity) -> Self {
        value.to_level_filter()
    }
}
