//! aulakit configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use aulakit_core::allocator::AllocationProfile;

/// Catalog service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the course catalog service.
    #[serde(default = "default_catalog_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_catalog_url() -> String {
    "http://localhost:8002".to_string()
}

fn default_timeout() -> u64 {
    3
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Progress-allocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocatorConfig {
    /// Profile used for first-access bootstrap: "bootstrap" or "reassign".
    ///
    /// The two profiles preserve the historically divergent completion
    /// ranges and grade thresholds of the two allocation paths.
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Fixed RNG seed for reproducible allocation; omit for OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_profile() -> String {
    "bootstrap".to_string()
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            seed: None,
        }
    }
}

impl AllocatorConfig {
    /// Resolve the configured profile name.
    pub fn allocation_profile(&self) -> Result<AllocationProfile> {
        match self.profile.as_str() {
            "bootstrap" => Ok(AllocationProfile::bootstrap()),
            "reassign" => Ok(AllocationProfile::reassign()),
            other => anyhow::bail!("unknown allocation profile: {other}"),
        }
    }
}

/// Top-level aulakit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AulakitConfig {
    /// Catalog service settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Allocation settings.
    #[serde(default)]
    pub allocator: AllocatorConfig,
    /// Directory for locally persisted state (progress records).
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
}

fn default_state_dir() -> PathBuf {
    PathBuf::from("./aulakit-state")
}

impl Default for AulakitConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            allocator: AllocatorConfig::default(),
            state_dir: default_state_dir(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `aulakit.toml` in the current directory
/// 2. `~/.config/aulakit/config.toml`
///
/// Environment variable override: `AULAKIT_CATALOG_URL`.
pub fn load_config() -> Result<AulakitConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<AulakitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("aulakit.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<AulakitConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => AulakitConfig::default(),
    };

    if let Ok(url) = std::env::var("AULAKIT_CATALOG_URL") {
        config.catalog.base_url = url;
    }
    config.catalog.base_url = resolve_env_vars(&config.catalog.base_url);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("aulakit"))
}
