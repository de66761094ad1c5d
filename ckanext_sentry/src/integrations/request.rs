use sentry::{ClientOptions, Integration};

/// The request-lifecycle adapter attached to the client at initialization.
///
/// Marks the frames of the common HTTP plumbing crates as not-in-app, so
/// that stack traces captured during request handling point at the host's
/// handlers rather than at the middleware chain around them.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIntegration;

impl RequestIntegration {
    /// Creates a new request-lifecycle adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Integration for RequestIntegration {
    fn name(&self) -> &'static str {
        "request"
    }

    fn setup(&self, options: &mut ClientOptions) {
        options.in_app_exclude.push("tower::");
        options.in_app_exclude.push("hyper::");
        options.in_app_exclude.push("http::");
    }
}
