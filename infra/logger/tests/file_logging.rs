use heritage_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

fn log_files(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn json_file_logging_creates_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder("heritage-file-logging")
        .console(false)
        .directory(&log_dir)
        .json(true)
        .level(LevelFilter::INFO)
        .init()?;
    assert!(logger.writes_files());

    tracing::info!(page = "archives", "favorite toggled");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let files = log_files(&log_dir);
    let log_file = files.first().expect("log file should be created");
    let content = fs::read_to_string(log_file)?;
    assert!(content.contains("favorite toggled"), "log line should be written");
    assert!(content.trim_start().starts_with('{'), "json output expected");

    Ok(())
}
