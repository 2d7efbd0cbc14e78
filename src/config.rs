use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

// Every field has a default, so a partial file (or none at all) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Storage key holding the serialized post list.
    pub posts_key: String,
    /// Storage key holding the admin flag.
    pub admin_key: String,
    /// Compared verbatim by the admin gate. Not a secret.
    pub admin_password: String,
    pub default_author: String,
    pub default_read_time: String,
    pub placeholder_image: String,
    pub related_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            posts_key: "blogPosts".into(),
            admin_key: "isAdmin".into(),
            admin_password: "admin123".into(),
            default_author: "Admin".into(),
            default_read_time: "5 min read".into(),
            placeholder_image: "https://via.placeholder.com/800x400".into(),
            related_limit: 3,
        }
    }
}

impl StoreConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
