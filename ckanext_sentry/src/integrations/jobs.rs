use sentry::protocol::{Context, Event, Value};
use sentry::{ClientOptions, Integration};

/// The background-job adapter attached to the client at initialization.
///
/// Events captured while a job is being processed tend to arrive without a
/// transaction name, which makes them hard to group. When the event carries
/// a `job` context (as recorded by job-queue workers), this adapter adopts
/// the job's `name` as the event transaction. Events that already name a
/// transaction are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct JobQueueIntegration;

impl JobQueueIntegration {
    /// Creates a new background-job adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Integration for JobQueueIntegration {
    fn name(&self) -> &'static str {
        "jobs"
    }

    fn process_event(
        &self,
        mut event: Event<'static>,
        _cfg: &ClientOptions,
    ) -> Option<Event<'static>> {
        if event.transaction.is_none() {
            if let Some(Context::Other(values)) = event.contexts.get("job") {
                if let Some(Value::String(name)) = values.get("name") {
                    event.transaction = Some(name.clone());
                }
            }
        }

        Some(event)
    }
}
