use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allowed origins. Empty disables cross-origin requests.
    #[serde(default)]
    pub allow_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

fn default_cors_max_age() -> u64 {
    3600
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: Vec::new(),
            max_age: default_cors_max_age(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Firmware upload handling.
#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    /// Largest accepted firmware image in bytes. Default: 512 MiB.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    /// Directory in which per-request upload directories are created.
    /// Default: the system temp directory.
    #[serde(default)]
    pub tmp_dir: Option<PathBuf>,
}

fn default_max_file_size() -> u64 {
    512 * 1024 * 1024
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            tmp_dir: None,
        }
    }
}

impl UploadConfig {
    pub fn tmp_root(&self) -> PathBuf {
        self.tmp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Request body limit: the file plus headroom for the metadata fields.
    pub fn body_limit(&self) -> usize {
        usize::try_from(self.max_file_size)
            .unwrap_or(usize::MAX)
            .saturating_add(1024 * 1024)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., FIRMAMENT__UPLOAD__MAX_FILE_SIZE)
            .add_source(Environment::with_prefix("FIRMAMENT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
