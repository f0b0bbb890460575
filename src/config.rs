use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG: &str = "koyomi.toml";

/// Top-level Koyomi configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KoyomiConfig {
    /// Year document generation settings.
    #[serde(default)]
    pub generate: GenerateToml,

    /// Multi-year merge settings.
    #[serde(default)]
    pub merge: MergeToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateToml {
    #[serde(default = "default_generate_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub table: Option<PathBuf>,
}

impl Default for GenerateToml {
    fn default() -> Self {
        Self {
            output: default_generate_output(),
            table: None,
        }
    }
}

fn default_generate_output() -> PathBuf {
    PathBuf::from("public/calendar_data.json")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeToml {
    #[serde(default = "default_search_dirs")]
    pub search_dirs: Vec<PathBuf>,
    #[serde(default = "default_merge_outputs")]
    pub outputs: Vec<PathBuf>,
}

impl Default for MergeToml {
    fn default() -> Self {
        Self {
            search_dirs: default_search_dirs(),
            outputs: default_merge_outputs(),
        }
    }
}

fn default_search_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("public"), PathBuf::from("src")]
}
fn default_merge_outputs() -> Vec<PathBuf> {
    vec![
        PathBuf::from("src/calendar_data.json"),
        PathBuf::from("public/calendar_data.json"),
    ]
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG`] is read
/// when present and built-in defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<KoyomiConfig> {
    let path = match path {
        Some(p) => p,
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            if !default.is_file() {
                debug!("no {DEFAULT_CONFIG} found, using defaults");
                return Ok(KoyomiConfig::default());
            }
            default
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: KoyomiConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
