use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScribeError {
   #[error("Git command failed: {0}")]
   GitError(String),

   #[error("Advisory request failed (HTTP {status}): {body}")]
   AdvisoryError { status: u16, body: String },

   #[error("Advisory returned no usable content")]
   AdvisoryEmpty,

   #[error("Config error: {0}")]
   ConfigError(String),

   #[error("IO error: {0}")]
   IoError(#[from] std::io::Error),

   #[error("JSON error: {0}")]
   JsonError(#[from] serde_json::Error),

   #[error("HTTP error: {0}")]
   HttpError(#[from] reqwest::Error),

   #[error("Clipboard error: {0}")]
   ClipboardError(#[from] arboard::Error),
}

pub type Result<T> = std::result::Result<T, ScribeError>;
