// Every variant states *where* things went wrong.
// Painting itself never fails; only setup, config, the window and touch polling can.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Pushing the frame to the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// A single touch poll failed (transient; the loop skips the sample)
    #[error("Touch read error: {0}")]
    TouchRead(String),

    /// Reading the config file failed
    #[error("Config read error: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// The config file is not valid TOML for `Config`
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The config parsed but describes an impossible layout
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
