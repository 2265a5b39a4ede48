use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub openrouter: OpenRouterConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_vision_model")]
    pub vision_model: String,
    #[serde(default = "default_nutrition_model")]
    pub nutrition_model: String,
    /// Sent as `HTTP-Referer` for OpenRouter app attribution.
    #[serde(default)]
    pub referer: Option<String>,
    /// Sent as `X-Title` for OpenRouter app attribution.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Where uploaded photos are staged; the OS temp dir when unset.
    #[serde(default)]
    pub upload_dir: Option<PathBuf>,
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Config {
    pub fn validate(&self) -> crate::Result<()> {
        if self.openrouter.base_url.trim().is_empty() {
            return Err(crate::Error::config("openrouter.base_url must not be empty"));
        }
        if self.openrouter.vision_model.trim().is_empty() {
            return Err(crate::Error::config(
                "openrouter.vision_model must not be empty",
            ));
        }
        if self.openrouter.nutrition_model.trim().is_empty() {
            return Err(crate::Error::config(
                "openrouter.nutrition_model must not be empty",
            ));
        }
        if self.server.max_image_bytes == 0 {
            return Err(crate::Error::config(
                "server.max_image_bytes must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl ServerConfig {
    pub fn upload_dir(&self) -> PathBuf {
        self.upload_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            vision_model: default_vision_model(),
            nutrition_model: default_nutrition_model(),
            referer: None,
            title: None,
            timeout_secs: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            upload_dir: None,
            max_image_bytes: default_max_image_bytes(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_vision_model() -> String {
    "google/gemini-pro-vision".to_string()
}

fn default_nutrition_model() -> String {
    "mistralai/mistral-small-24b-instruct-2501".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_image_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}
