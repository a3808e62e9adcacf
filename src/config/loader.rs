//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use figment::providers::{Env, Format, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};

/// Prefix of environment variables that override config file values.
pub const ENV_PREFIX: &str = "ENVSPLIT_";

/// Section name for configs embedded in a larger file (`[envsplit]`).
const NESTED_SECTION: &str = "envsplit";

/// Load settings with precedence env > file > defaults.
///
/// An explicit `config_path` must exist and parse; an auto-discovered file in
/// `dir` that fails is logged and ignored.
pub fn load_config(dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(dir),
    };

    let figment = match discovered {
        None => Figment::new(),
        Some(config_file) => match file_figment(&config_file) {
            Ok(figment) => figment,
            Err(e) => {
                if config_path_provided {
                    return Err(e);
                }
                tracing::warn!(
                    "Ignoring auto-discovered config {}: {:#}",
                    config_file.display(),
                    e
                );
                Figment::new()
            }
        },
    };

    figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .with_context(|| format!("Invalid {}* environment variables", ENV_PREFIX))
}

fn file_figment(config_file: &Path) -> Result<Figment> {
    if !config_file.is_file() {
        anyhow::bail!("Config file not found: {}", config_file.display());
    }

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    let figment = match ext.as_str() {
        "toml" => Figment::from(Toml::file(config_file)),
        "yaml" | "yml" => Figment::from(Yaml::file(config_file)),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    };

    let figment = if figment.find_value(NESTED_SECTION).is_ok() {
        figment.focus(NESTED_SECTION)
    } else {
        figment
    };

    figment
        .extract::<Config>()
        .with_context(|| format!("Invalid config file: {}", config_file.display()))?;
    Ok(figment)
}

fn discover_config(dir: &Path) -> Option<PathBuf> {
    let candidates = [
        "envsplit.toml",
        ".envsplit.toml",
        "envsplit.yml",
        ".envsplit.yml",
        "envsplit.yaml",
        ".envsplit.yaml",
    ];

    candidates.iter().map(|candidate| dir.join(candidate)).find(|path| path.exists())
}
