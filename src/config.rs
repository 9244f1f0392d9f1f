//! Tool configuration: a `designkit.toml` snapshot of defaults for the CLI.
//! Missing file means defaults; the engine itself never reads config.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const CONFIG_FILE: &str = "designkit.toml";
pub const DEFAULT_SOURCE_URL: &str = "https://github.com/designkit/designkit";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default accent name used when the CLI is not given one.
    pub accent: String,
    /// Custom hex color; implies the custom accent when set.
    pub custom_color: Option<String>,
    /// URL embedded in the generated setup guide.
    pub source_url: String,
    /// Directory containing the component corpus.
    pub components: PathBuf,
    /// Directory export bundles are written under.
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accent: "blue".to_string(),
            custom_color: None,
            source_url: DEFAULT_SOURCE_URL.to_string(),
            components: PathBuf::from("components/ui"),
            output: PathBuf::from("dist"),
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
