use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use heritage::domain::config::{AppConfig, LoggingConfig, UiConfig};
use heritage_logger::{Logger, LoggerError, parse_level};
use std::any::Any;
use tracing::debug;

/// Installs the subscriber described by the `[logging]` section.
///
/// Config loading runs before this, so its own log lines are not captured;
/// log what matters about the loaded config afterwards.
///
/// # Errors
/// Fails on an unknown level, a malformed filter directive, an unusable log
/// directory, or when a subscriber is already installed.
pub fn init_logging(name: &str, cfg: &LoggingConfig) -> Result<Logger, LoggerError> {
    let mut builder = Logger::builder(name).level(parse_level(&cfg.level)?);
    if let Some(filter) = &cfg.filter {
        builder = builder.directive(filter);
    }
    if let Some(directory) = &cfg.directory {
        builder = builder.directory(directory).json(cfg.json);
    }
    builder.init()
}

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    ui: UiConfig,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Window geometry and UI preferences taken from the loaded configuration.
    #[must_use]
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            title: cfg.window.title.clone(),
            width: cfg.window.width,
            height: cfg.window.height,
            ui: cfg.ui,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The entry point for launching the app
    pub fn launch(self, root: fn() -> Element) {
        debug!(title = %self.title, width = self.width, height = self.height, "Opening window");

        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        let ui = self.ui;
        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(ui) as Box<dyn Any>)
            .launch(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heritage::domain::GuideLanguage;

    #[test]
    fn window_follows_config() {
        let mut cfg = AppConfig::default();
        cfg.window.title = "Rumtek Kiosk".to_owned();
        cfg.window.width = 1024.0;
        cfg.ui.language = GuideLanguage::Tibetan;

        let app = DesktopApp::from_config(&cfg);
        assert_eq!(app.title, "Rumtek Kiosk");
        assert!((app.width - 1024.0).abs() < f64::EPSILON);
        assert_eq!(app.ui.language, GuideLanguage::Tibetan);
    }

    #[test]
    fn logging_rejects_bad_settings_before_install() {
        let mut cfg = LoggingConfig { level: "loud".to_owned(), ..LoggingConfig::default() };
        let err = init_logging("heritage-desktop-test", &cfg).expect_err("unknown level");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        cfg.level = "debug".to_owned();
        cfg.filter = Some("heritage=loudest".to_owned());
        let err = init_logging("heritage-desktop-test", &cfg).expect_err("bad directive");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn builder_overrides() {
        let app = DesktopApp::new().with_title("Archive Viewer").with_size(800.0, 600.0);
        assert_eq!(app.title, "Archive Viewer");
        assert!((app.height - 600.0).abs() < f64::EPSILON);
    }
}
