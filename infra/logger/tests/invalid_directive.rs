use heritage_logger::{Logger, LoggerError};
use tempfile::tempdir;

#[test]
fn bad_directive_fails_before_touching_disk() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let err = Logger::builder("heritage-bad-directive")
        .console(false)
        .directory(&log_dir)
        .directive("heritage=loudest")
        .init()
        .expect_err("malformed directive must fail");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    assert!(!log_dir.exists(), "log directory should not be created");

    // Nothing was installed, so a valid logger still initializes.
    let logger = Logger::builder("heritage-bad-directive").console(true).init()?;
    assert!(!logger.writes_files());

    Ok(())
}
