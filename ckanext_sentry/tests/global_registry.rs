#[cfg(test)]
mod tests {
    use ckanext_sentry::{ConsoleSink, GlobalLogRegistry, LogRegistry, Severity};
    use log::LevelFilter;
    use pretty_assertions::assert_eq;

    #[test]
    fn registry_over_process_globals() {
        // Given
        let registry = GlobalLogRegistry;

        // When
        registry.set_max_severity(Severity::Warning);

        // Then
        assert_eq!(LevelFilter::Warn, log::max_level());

        // When: a quieter severity comes along
        registry.set_max_severity(Severity::Error);

        // Then: the record flow is not narrowed
        assert_eq!(LevelFilter::Warn, log::max_level());

        // When: a handler is installed twice over
        registry.install(Box::new(ConsoleSink));
        registry.install(Box::new(ConsoleSink));

        // Then: the second install leaves the first handler in place
        assert!(log::logger().enabled(
            &log::Metadata::builder().level(log::Level::Error).build(),
        ));
    }
}
