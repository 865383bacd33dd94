use heritage_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_writes_no_files() {
    let logger = Logger::builder("heritage-console-only")
        .level(LevelFilter::DEBUG)
        .directive("heritage=debug")
        .init()
        .expect("logger should initialize");

    assert_eq!(logger.name(), "heritage-console-only");
    assert!(!logger.writes_files(), "console-only logger should not hold a file guard");
}
