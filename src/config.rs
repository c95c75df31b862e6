//! Configuration file support for errata-roundtrip.
//!
//! Provides TOML-based configuration through `errata-roundtrip.toml` files,
//! including data structures, file loading, and validation.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::error::RoundtripError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "errata-roundtrip.toml";

/// The known upstream issue gating the reboot_suggested omission check.
pub const DEFAULT_KNOWN_ISSUE: u32 = 1782;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Server root URL, e.g. `https://pulp.example.com`.
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Verify the server's TLS certificate (default true).
    pub verify_tls: Option<bool>,
    /// Root URL of the Redmine-style issue tracker used for known-issue
    /// lookups. Absent means no lookups.
    pub issue_tracker_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Err(RoundtripError::ConfigNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| RoundtripError::ConfigRead {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&content).map_err(|e| RoundtripError::ConfigParse {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(url) = &config.base_url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(RoundtripError::Validation {
                message: format!(
                    "base_url must start with http:// or https://, got {url:?}"
                ),
            }
            .into());
        }
    }
    if config.username.is_some() != config.password.is_some() {
        return Err(RoundtripError::Validation {
            message: "username and password must be provided together".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
