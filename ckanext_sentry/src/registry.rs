use crate::config::Severity;
use log::Log;

/// The process-wide logging system, as seen by the plugin.
///
/// The plugin never reaches for the `log` crate globals directly; it goes
/// through this trait on a handle it owns. The default handle is
/// [`GlobalLogRegistry`]. Tests (and hosts that manage their own logging)
/// substitute a recording or delegating implementation via
/// [`SentryPlugin::with_registry`](crate::SentryPlugin::with_registry).
pub trait LogRegistry: Send + Sync {
    /// Installs the given handler as the process-wide logger.
    ///
    /// A registry that already carries a logger keeps it. Installation is a
    /// best-effort, non-erroring operation.
    fn install(&self, handler: Box<dyn Log>);

    /// Ensures records up to the given severity reach the installed handler.
    ///
    /// Implementations only ever widen the flow of records. Lowering the
    /// registry below its current verbosity is not this plugin's call to
    /// make.
    fn set_max_severity(&self, severity: Severity);
}

/// The [`LogRegistry`] over the `log` crate's process-wide globals.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalLogRegistry;

impl LogRegistry for GlobalLogRegistry {
    fn install(&self, handler: Box<dyn Log>) {
        if log::set_boxed_logger(handler).is_err() {
            log::warn!("A process-wide logger is already installed; leaving it in place");
        }
    }

    fn set_max_severity(&self, severity: Severity) {
        let floor = severity.to_level_filter();

        if log::max_level() < floor {
            log::set_max_level(floor);
        }
    }
}
