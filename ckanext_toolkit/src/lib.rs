#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(test, deny(warnings))]

/// Mutable, string-keyed settings map handed to extensions by the host.
mod settings;
pub use self::settings::{truthy, HostSettings};

/// Capabilities reported by the hosting framework.
mod support;
pub use self::support::HostCapabilities;

/// One-shot tap of the host's `.env` file.
mod envfile;
pub use self::envfile::EnvFile;
