use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Share error: {0}")]
    Share(String),

    #[error("Could not open link: {0}")]
    Open(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown country: {0}")]
    UnknownCountry(String),

}

pub type Result<T> = std::result::Result<T, WalinkError>;
