//! CLI subcommands.

pub mod check;
pub mod config;
pub mod process;

use fiscan_core::models::config::FiscanConfig;

/// Load configuration from an explicit path, the default location, or
/// built-in defaults.
pub(crate) fn load_config(path: Option<&str>) -> anyhow::Result<FiscanConfig> {
    match path {
        Some(p) => Ok(FiscanConfig::from_file(std::path::Path::new(p))?),
        None => {
            let default = config::default_config_path();
            if default.exists() {
                Ok(FiscanConfig::from_file(&default)?)
            } else {
                Ok(FiscanConfig::default())
            }
        }
    }
}
