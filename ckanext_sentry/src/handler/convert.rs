use log::Record;
use sentry::protocol::Event;
use sentry::{Breadcrumb, Level};

/// Maps a record level onto the closest telemetry level.
pub(crate) fn level_for(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

/// Builds a breadcrumb out of the given record.
pub(crate) fn breadcrumb_for(record: &Record<'_>) -> Breadcrumb {
    Breadcrumb {
        ty: "log".into(),
        level: level_for(record.level()),
        category: Some(record.target().into()),
        message: Some(format!("{}", record.args())),
        ..Default::default()
    }
}

/// Builds a capturable event out of the given record.
pub(crate) fn event_for(record: &Record<'_>) -> Event<'static> {
    Event {
        logger: Some(record.target().into()),
        level: level_for(record.level()),
        message: Some(format!("{}", record.args())),
        ..Default::default()
    }
}
