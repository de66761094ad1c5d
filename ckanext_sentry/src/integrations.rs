mod jobs;
pub use self::jobs::JobQueueIntegration;

mod logging;
pub use self::logging::LoggingIntegration;

mod request;
pub use self::request::RequestIntegration;
