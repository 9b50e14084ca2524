//! Error types for roadmap-studio

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("API request failed with status {status}: {message}")]
    ApiRequest { status: u16, message: String },

    #[error("HTTP transport error: {0}")]
    Transport(String),

    #[error("Not logged in - no access token stored")]
    TokenNotFound,

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, StudioError>;
