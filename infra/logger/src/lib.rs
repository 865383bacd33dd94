//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for native launch targets.
//! Console output is compact and coloured; file output goes through a
//! non-blocking rolling appender and can be switched to JSON lines.
//!
//! `RUST_LOG` is honoured unless an explicit directive is supplied with
//! [`LoggerBuilder::directive`].
//!
//! ## Example
//!
//! ```rust
//! # use heritage_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder("heritage-desktop")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Parses a level name such as `"info"` or `"DEBUG"`.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown level names.
pub fn parse_level(name: &str) -> Result<LevelFilter, LoggerError> {
    name.trim().parse::<LevelFilter>().map_err(|_| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{name}'").into(),
        context: None,
    })
}

#[derive(Debug, Clone)]
struct FileSink {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

/// Configures and installs the global subscriber.
#[derive(Debug)]
#[must_use = "call .init() to install the subscriber"]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    directive: Option<String>,
    file: Option<FileSink>,
}

impl LoggerBuilder {
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Programmatic filter directive (e.g. `heritage_tour=trace,dioxus=warn`).
    ///
    /// Takes precedence over `RUST_LOG`.
    pub fn directive(mut self, directive: impl Into<String>) -> Self {
        self.directive = Some(directive.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Writes logs into `directory` as `<name>.<date>.log` files.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.file = Some(FileSink {
            directory: directory.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// No-op unless a directory was set.
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// No-op unless a directory was set.
    pub fn max_files(mut self, max_files: usize) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.max_files = max_files;
        }
        self
    }

    /// Emits JSON lines in the log file. No-op unless a directory was set.
    pub fn json(mut self, enabled: bool) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.json = enabled;
        }
        self
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(invalid("Logger name cannot be empty"));
        }
        if self.file.as_ref().is_some_and(|f| f.max_files == 0) {
            return Err(invalid("max_files must be greater than zero"));
        }
        if !self.console && self.file.is_none() {
            return Err(invalid("Neither console nor file output is enabled"));
        }
        Ok(())
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.directive {
            None => Ok(builder.from_env_lossy()),
            Some(directive) => builder.parse(directive).map_err(|e| {
                LoggerError::InvalidConfiguration {
                    message: format!("Invalid filter directive '{directive}': {e}").into(),
                    context: None,
                }
            }),
        }
    }

    fn file_layer(&self, sink: &FileSink) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
        fs::create_dir_all(&sink.directory).map_err(|e| LoggerError::Internal {
            message: e.to_string().into(),
            context: Some(format!("Creating log directory {}", sink.directory.display()).into()),
        })?;

        let appender = RollingFileAppender::builder()
            .rotation(sink.rotation.clone())
            .filename_prefix(&self.name)
            .filename_suffix(LOG_FILE_SUFFIX)
            .max_log_files(sink.max_files)
            .build(&sink.directory)
            .context("Building rolling file appender")?;

        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_writer(writer).with_ansi(false);
        let layer = if sink.json { layer.json().boxed() } else { layer.boxed() };

        Ok((layer, guard))
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the lifetime of the process; dropping it
    /// stops the background file writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   no enabled output, or an unparsable directive. Nothing is created on disk
    ///   in that case.
    /// * [`LoggerError::Appender`] when the log directory cannot be used.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.env_filter()?;

        let mut layers: Vec<BoxedLayer> = Vec::new();
        if self.console {
            layers.push(fmt::layer().compact().with_ansi(true).boxed());
        }

        let guard = match &self.file {
            Some(sink) => {
                let (layer, guard) = self.file_layer(sink)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;

        tracing::debug!(name = %self.name, file = guard.is_some(), "Logger installed");
        Ok(Logger { name: self.name, guard })
    }
}

const fn invalid(message: &'static str) -> LoggerError {
    LoggerError::InvalidConfiguration { message: std::borrow::Cow::Borrowed(message), context: None }
}

/// Handle to the installed subscriber.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    name: String,
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring a logger. `name` prefixes rolling log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            level: LevelFilter::INFO,
            directive: None,
            file: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether log lines are also written to files.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder("heritage-test");
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.directive.is_none());
        assert!(builder.file.is_none());
    }

    #[test]
    fn file_options_apply_after_directory() {
        let builder = Logger::builder("heritage-test")
            .max_files(3)
            .directory("logs")
            .max_files(5)
            .json(true)
            .rotation(Rotation::HOURLY);

        let file = builder.file.expect("directory should enable file output");
        assert_eq!(file.max_files, 5);
        assert!(file.json);
        assert_eq!(file.rotation, Rotation::HOURLY);
    }

    #[test]
    fn validation_rejects_empty_name() {
        let err = Logger::builder("  ").validate().expect_err("empty name must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn validation_rejects_no_outputs() {
        let err = Logger::builder("heritage-test")
            .console(false)
            .validate()
            .expect_err("no outputs must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn validation_rejects_zero_max_files() {
        let err = Logger::builder("heritage-test")
            .directory("logs")
            .max_files(0)
            .validate()
            .expect_err("zero max files must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn invalid_directive_is_reported() {
        let err = Logger::builder("heritage-test")
            .directive("heritage=loudest")
            .env_filter()
            .expect_err("malformed directive must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn parses_level_names() {
        assert_eq!(parse_level("debug").ok(), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level(" WARN ").ok(), Some(LevelFilter::WARN));
        assert!(parse_level("loud").is_err());
    }
}
