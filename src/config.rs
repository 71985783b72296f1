use std::fs;

use anyhow::{Context, Result, anyhow, bail};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

const APP_DIR: &str = "goscaffold";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_GO_BINARY: &str = "go";

/// Settings loaded from `~/.config/goscaffold/config.toml` by default.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Program used for `mod init`; a bare name is looked up on `PATH`.
    pub go_binary: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            go_binary: DEFAULT_GO_BINARY.to_owned(),
        }
    }
}

impl ScaffoldConfig {
    pub fn validate(&self) -> Result<()> {
        if self.go_binary.trim().is_empty() {
            bail!("go_binary cannot be empty");
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigSource {
    Explicit(Utf8PathBuf),
    UserDefault(Utf8PathBuf),
    BuiltIn,
}

impl ConfigSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigSource::Explicit(_) => "explicit",
            ConfigSource::UserDefault(_) => "user-default",
            ConfigSource::BuiltIn => "built-in",
        }
    }

    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::UserDefault(path) => Some(path.as_path()),
            ConfigSource::BuiltIn => None,
        }
    }
}

/// Load a configuration file from disk and deserialize it.
pub fn load_from_path(path: &Utf8Path) -> Result<ScaffoldConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path))?;
    let config: ScaffoldConfig =
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path))?;
    config
        .validate()
        .with_context(|| format!("validating config {}", path))?;
    Ok(config)
}

pub fn default_path() -> Option<Utf8PathBuf> {
    let dir = dirs::config_dir()?;
    Utf8PathBuf::from_path_buf(dir.join(APP_DIR).join(CONFIG_FILE)).ok()
}

/// An explicit path must exist; the per-user file is optional.
pub fn resolve(explicit: Option<&Utf8Path>) -> Result<(ScaffoldConfig, ConfigSource)> {
    resolve_with_default(explicit, default_path())
}

fn resolve_with_default(
    explicit: Option<&Utf8Path>,
    user_default: Option<Utf8PathBuf>,
) -> Result<(ScaffoldConfig, ConfigSource)> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(anyhow!("config file {} does not exist", path));
        }
        let config = load_from_path(path)?;
        return Ok((config, ConfigSource::Explicit(path.to_owned())));
    }

    match user_default {
        Some(path) if path.is_file() => {
            let config = load_from_path(&path)?;
            Ok((config, ConfigSource::UserDefault(path)))
        }
        _ => Ok((ScaffoldConfig::default(), ConfigSource::BuiltIn)),
    }
}
