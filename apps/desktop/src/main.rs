use anyhow::Context;
use heritage::client::App;
use heritage::domain::config::AppConfig;
use heritage::kernel::config::{DEFAULT_CONFIG_PATH, load_config};
use heritage_desktop::{DesktopApp, init_logging};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cfg: AppConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _log = init_logging(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    info!(path = DEFAULT_CONFIG_PATH, level = %cfg.logging.level, "Configuration loaded");
    info!(features = ?heritage::features::ENABLED, language = ?cfg.ui.language, "Launching desktop app");

    DesktopApp::from_config(&cfg).launch(App);

    Ok(())
}
