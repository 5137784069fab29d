use thiserror::Error;

/// Errors raised by the fallible edges of the bot: configuration loading and
/// scenario decoding. The per-tick decision path itself never fails.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig { field: &'static str, value: f32, reason: &'static str },

    #[error("Unsupported config format: {path}")]
    UnsupportedFormat { path: String },

    #[error("Schema version mismatch: found {found}, expected {expected}")]
    SchemaMismatch { found: u8, expected: u8 },

    #[error("Too many ticks: {requested} (max {max})")]
    TickLimit { requested: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, BotError>;
