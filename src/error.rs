use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeolensError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("unsupported page {0}: open a regular webpage to analyze its SEO")]
    UnsupportedPage(String),

    #[error("invalid signals: {0}")]
    InvalidSignals(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SeolensError>;
