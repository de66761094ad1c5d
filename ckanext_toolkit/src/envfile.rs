use std::path::Path;
use std::sync::Once;

const FILE_DOT_ENV: &str = ".env";

/// A facade for loading environment variables from the host's `.env` file.
///
/// The host reads its configuration during startup, and development
/// environments commonly keep the relevant variables in a `.env` file next
/// to the application instead of exporting them by hand. Tapping the file
/// makes those variables visible to everything that resolves configuration
/// from the environment afterwards.
///
/// Use [`tap`](EnvFile::tap) for a safe, one-time load, or
/// [`load`](EnvFile::load) to perform the operation directly.
pub struct EnvFile;

impl EnvFile {
    /// Ensures environment variables from the `.env` file are loaded.
    ///
    /// The loading operation is performed at most once during the process
    /// lifetime; subsequent calls have no effect.
    pub fn tap() {
        static INIT: Once = Once::new();

        INIT.call_once(Self::load);
    }

    /// Loads environment variables from the `.env` file in the current
    /// working directory.
    ///
    /// Variables that are already set in the process environment are left
    /// untouched. A missing file is silently ignored.
    pub fn load() {
        if dotenvy::from_path(Path::new(FILE_DOT_ENV)).is_ok() {
            tracing::debug!("Loaded environment variables from {}", FILE_DOT_ENV);
        }
    }
}
