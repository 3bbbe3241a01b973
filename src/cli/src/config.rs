use std::{fs, path::Path};

use color_eyre::eyre::WrapErr;
use serde::{Deserialize, Serialize};

/// Settings read from the optional TOML configuration file. Flags given on
/// the command line take precedence.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub scramble: ScrambleConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Print stickers with ANSI background colors.
    pub color: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrambleConfig {
    /// Seed for reproducible scrambles.
    pub seed: Option<u64>,
}

impl Config {
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;

        toml::from_str(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))
    }
}
