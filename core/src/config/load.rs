use std::path::{Path, PathBuf};

use anyhow::Context;

use super::types::AppConfig;
use crate::error::ConfigError;

/// Get the default taskline data directory: ~/.taskline
pub fn get_taskline_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".taskline"))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let mut cfg = toml::from_str::<AppConfig>(&s)
        .with_context(|| format!("parse config {}", path.display()))?;
    apply_env_overrides(&mut cfg)?;
    cfg.parser.validate()?;
    Ok(cfg)
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.taskline/config.toml
    let home_config = get_taskline_data_dir().ok().map(|d| d.join("config.toml"));

    // Priority 2: ./config.toml
    let local_config = Path::new("config.toml");

    let mut cfg = match home_config {
        Some(ref p) if p.exists() => {
            let s = std::fs::read_to_string(p)?;
            toml::from_str::<AppConfig>(&s)?
        }
        _ if local_config.exists() => {
            let s = std::fs::read_to_string(local_config)?;
            toml::from_str::<AppConfig>(&s)?
        }
        _ => AppConfig::default(),
    };

    // Environment variable overrides (highest)
    apply_env_overrides(&mut cfg)?;
    cfg.parser.validate()?;
    Ok(cfg)
}

fn apply_env_overrides(cfg: &mut AppConfig) -> Result<(), ConfigError> {
    if let Some(v) = env_usize("TASKLINE_MAX_LINE")? {
        cfg.parser.max_line = v;
    }
    if let Some(v) = env_usize("TASKLINE_MAX_ARGS")? {
        cfg.parser.max_args = v;
    }
    if let Ok(v) = std::env::var("TASKLINE_LOG_LEVEL") {
        if !v.trim().is_empty() {
            cfg.logging.level = v;
        }
    }
    Ok(())
}

fn env_usize(var: &'static str) -> Result<Option<usize>, ConfigError> {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value: v }),
        _ => Ok(None),
    }
}
