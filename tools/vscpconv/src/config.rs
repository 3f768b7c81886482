//! vscpconv configuration
//!
//! Layered with figment: built-in defaults, then a YAML file, then
//! `VSCPCONV_*` environment variables. Command-line flags are applied on top
//! by the caller.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use vscp_codec::SignMode;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "vscpconv.yaml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "VSCPCONV_";

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Decimal values, space separated bytes
    #[default]
    Plain,
    /// Bytes as two-digit hex
    Hex,
    /// One JSON object per result
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub output: OutputFormat,

    #[serde(default)]
    pub sign_mode: SignMode,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            sign_mode: SignMode::default(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, `vscpconv.yaml` in the
    /// working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => {
                if !p.is_file() {
                    bail!("Config file not found: {}", p.display());
                }
                p
            },
            None => Path::new(DEFAULT_CONFIG_FILE),
        };

        Self::figment(file)
            .extract()
            .with_context(|| format!("Failed to load configuration from {}", file.display()))
    }

    fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(CliConfig::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}
