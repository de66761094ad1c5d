use crate::config::Severity;
use sentry_tracing::{EventMapping, SentryLayer};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Creates a [`SentryLayer`] that applies the same routing as the
/// [log-forwarding handler](crate::SentryForwarder), for hosts that log
/// through the [`tracing`](::tracing) ecosystem instead of the `log` crate.
///
/// Error-level events are sent to Sentry as full events. Events at or above
/// the given severity are recorded as breadcrumbs on the current scope.
/// Everything below the severity is ignored by this layer; other layers of
/// the subscriber still process it.
///
/// This layer should be included in the global default [`Subscriber`]
/// alongside whatever console or file layers the host already runs.
///
/// ## Examples
///
/// ```
/// use ckanext_sentry::Severity;
/// use tracing_subscriber::layer::SubscriberExt;
///
/// let layer = ckanext_sentry::tracing::make_layer(Severity::Warning);
/// let subscriber = tracing_subscriber::registry().with(layer);
///
/// tracing::subscriber::with_default(subscriber, || {
///     // Sent to Sentry as a full event
///     tracing::error!("background worker crashed");
///
///     // Recorded as a breadcrumb at this severity
///     tracing::warn!("retrying the job queue connection");
///
///     // Ignored by this layer
///     tracing::debug!("polling the queue");
/// });
/// ```
pub fn make_layer<S>(severity: Severity) -> SentryLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let cutoff = severity.to_tracing_level_filter();

    sentry_tracing::layer().event_mapper(move |event, ctx| route_event(event, ctx, cutoff))
}

/// Classifies a single tracing event against the severity cutoff.
fn route_event<S>(event: &Event, ctx: Context<'_, S>, cutoff: LevelFilter) -> EventMapping
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let level = *event.metadata().level();

    if level == Level::ERROR {
        EventMapping::Event(sentry_tracing::event_from_event(event, &ctx))
    } else if level <= cutoff {
        EventMapping::Breadcrumb(sentry_tracing::breadcrumb_from_event(event, &ctx))
    } else {
        EventMapping::Ignore
    }
}
