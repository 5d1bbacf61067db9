// quillsql-core/src/infrastructure/config/settings.rs

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::domain::settings::AppConfig;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::read_text_file;

const CONFIG_CANDIDATES: [&str; 2] = ["quillsql.yaml", "quillsql.yml"];

/// Load settings: YAML file (explicit path, or discovered in `dir`), then
/// `QUILLSQL_*` environment overrides, then validation.
///
/// A missing discovered file means defaults; a missing explicit file is an error.
#[instrument(skip(dir))]
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<AppConfig, InfrastructureError> {
    let path = match explicit {
        Some(p) if !p.exists() => {
            return Err(InfrastructureError::ConfigNotFound(p.display().to_string()));
        }
        Some(p) => Some(p.to_path_buf()),
        None => find_config(dir),
    };

    let mut config = match &path {
        Some(p) => {
            info!(path = ?p, "Loading configuration");
            parse_config(&read_text_file(p)?)?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    config
        .check()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;

    Ok(config)
}

fn find_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
}

fn parse_config(content: &str) -> Result<AppConfig, InfrastructureError> {
    // An empty file is a valid "all defaults" config
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Layer `QUILLSQL_*` variables over the file values.
fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("QUILLSQL_MODEL") {
        info!(old = ?config.llm.model, new = ?val, "Overriding model via ENV");
        config.llm.model = val;
    }
    if let Some(val) = lookup("QUILLSQL_API_BASE") {
        info!(old = ?config.llm.api_base, new = ?val, "Overriding API base via ENV");
        config.llm.api_base = val;
    }
    if let Some(val) = lookup("QUILLSQL_DATABASE_URL") {
        info!(old = ?config.database.url, new = ?val, "Overriding database URL via ENV");
        config.database.url = val;
    }
    if let Some(val) = lookup("QUILLSQL_TOP_K") {
        config.database.top_k = val.trim().parse().map_err(|_| {
            InfrastructureError::ConfigError(format!("QUILLSQL_TOP_K must be an integer, got '{}'", val))
        })?;
    }
    Ok(())
}
