use footprint::ParseProfileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcoError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Capture error: {0}")]
    Capture(String),

    #[error("Profile error: {0}")]
    Profile(#[from] ParseProfileError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EcoError>;
