use std::path::Path;

use anyhow::Context;
use stride_cli::{SETTINGS_FILE, Settings, run, sample_packages};

fn main() -> anyhow::Result<()> {
    stride_cli::log::init(Settings::default().log_level).context("failed to initialize logger")?;

    let settings = Settings::load(Path::new(SETTINGS_FILE)).context("failed to load settings")?;
    log::set_max_level(settings.log_level);

    run(&sample_packages(), settings.locale, &mut std::io::stdout().lock())
}
