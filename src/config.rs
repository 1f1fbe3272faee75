use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ScribeError};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScribeConfig {
   /// Length bound for the description segment and for advisory candidates
   /// (total message length)
   pub max_length: usize,

   /// Advisory overlay settings
   pub advisory: AdvisoryConfig,
}

/// Settings for the optional LLM advisory overlay. The pipeline never
/// requires the overlay; these only matter when it is enabled.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
   /// Consult the overlay at all (also switchable via --advisory)
   pub enabled: bool,

   /// OpenAI-compatible endpoint base URL
   pub api_base_url: String,

   /// Optional API key (overridden by `DIFFSCRIBE_API_KEY` env var)
   pub api_key: Option<String>,

   pub model: String,

   /// HTTP request timeout in seconds
   pub request_timeout_secs: u64,

   /// HTTP connection timeout in seconds
   pub connect_timeout_secs: u64,

   pub temperature: f32,

   pub max_retries: u32,

   pub initial_backoff_ms: u64,
}

impl Default for ScribeConfig {
   fn default() -> Self {
      Self { max_length: 50, advisory: AdvisoryConfig::default() }
   }
}

impl Default for AdvisoryConfig {
   fn default() -> Self {
      Self {
         enabled:              false,
         api_base_url:         "http://localhost:11434/v1".to_string(),
         api_key:              None,
         model:                "llama3".to_string(),
         request_timeout_secs: 15,
         connect_timeout_secs: 5,
         temperature:          0.2, // Low temperature for consistent output
         max_retries:          2,
         initial_backoff_ms:   500,
      }
   }
}

impl ScribeConfig {
   /// Load config from the default location
   /// (~/.config/diffscribe/config.toml), or the path in `DIFFSCRIBE_CONFIG`.
   /// Falls back to `Default` when no file exists. Environment variables
   /// override file values:
   /// - `DIFFSCRIBE_API_URL` overrides `advisory.api_base_url`
   /// - `DIFFSCRIBE_API_KEY` overrides `advisory.api_key`
   pub fn load() -> Result<Self> {
      let config_path = if let Ok(custom_path) = std::env::var("DIFFSCRIBE_CONFIG") {
         PathBuf::from(custom_path)
      } else {
         Self::default_config_path().unwrap_or_else(|_| PathBuf::new())
      };

      let mut config = if config_path.exists() {
         Self::from_file(&config_path)?
      } else {
         Self::default()
      };

      Self::apply_env_overrides(&mut config);
      Ok(config)
   }

   /// Load config from a specific file
   pub fn from_file(path: &Path) -> Result<Self> {
      let contents = std::fs::read_to_string(path)
         .map_err(|e| ScribeError::ConfigError(format!("Failed to read config: {e}")))?;
      let mut config: Self = toml::from_str(&contents)
         .map_err(|e| ScribeError::ConfigError(format!("Failed to parse config: {e}")))?;

      Self::apply_env_overrides(&mut config);
      Ok(config)
   }

   fn apply_env_overrides(config: &mut Self) {
      if let Ok(api_url) = std::env::var("DIFFSCRIBE_API_URL") {
         config.advisory.api_base_url = api_url;
      }

      if let Ok(api_key) = std::env::var("DIFFSCRIBE_API_KEY") {
         config.advisory.api_key = Some(api_key);
      }
   }

   /// Get default config path (platform-safe)
   /// Tries HOME (Unix/Linux/macOS) then USERPROFILE (Windows)
   pub fn default_config_path() -> Result<PathBuf> {
      if let Ok(home) = std::env::var("HOME") {
         return Ok(PathBuf::from(home).join(".config/diffscribe/config.toml"));
      }

      if let Ok(home) = std::env::var("USERPROFILE") {
         return Ok(PathBuf::from(home).join(".config/diffscribe/config.toml"));
      }

      Err(ScribeError::ConfigError(
         "No home directory found (tried HOME and USERPROFILE)".to_string(),
      ))
   }
}
