use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Browser User-Agent sent with every request; some publishers block bot agents
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Extraction settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExtractConfig {
    /// Directory downloaded images are written into (created on demand)
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    /// Root-relative prefix recorded in `Recipe::image`
    #[serde(default = "default_image_url_prefix")]
    pub image_url_prefix: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User-Agent header for page and image requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
            image_url_prefix: default_image_url_prefix(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ExtractConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`] for the lookup order.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

// Default value functions
fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_image_url_prefix() -> String {
    "/images".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RECIPE__IMAGES_DIR
pub fn load_config() -> Result<ExtractConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("RECIPE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_values() {
        let config = ExtractConfig::default();
        assert_eq!(config.images_dir, PathBuf::from("images"));
        assert_eq!(config.image_url_prefix, "/images");
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_load_config_env_override() {
        env::set_var("RECIPE__TIMEOUT", "5");
        env::set_var("RECIPE__IMAGES_DIR", "/tmp/recipe-images");

        let config = load_config().unwrap();

        env::remove_var("RECIPE__TIMEOUT");
        env::remove_var("RECIPE__IMAGES_DIR");

        assert_eq!(config.timeout, 5);
        assert_eq!(config.images_dir, PathBuf::from("/tmp/recipe-images"));
        assert_eq!(config.image_url_prefix, "/images");
    }
}
