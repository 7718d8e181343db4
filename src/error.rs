use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum AccessoryError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse accessory config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AccessoryError>;
