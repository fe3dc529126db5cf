use anyhow::{Context, bail};
use halport_config::PortConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered configuration plus the `--config` file.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PortConfig> {
    if let Some(path) = flags.config.as_deref()
        && !path.is_file()
    {
        bail!("config file '{}' does not exist", path.display());
    }

    let config = PortConfig::load_with_dotenv(flags.config.as_deref())
        .context("failed to load halport configuration")?;
    tracing::debug!(prefix = %config.api.prefix, "configuration loaded");
    Ok(config)
}
