use std::path::PathBuf;

use thiserror::Error;

use crate::validator::ValidationError;

/// Errors surfaced by the settings panel.
///
/// `UserInput`, `Validation` and `Persistence` are recovered at the handler
/// boundary and shown as toasts. `Config` and `Terminal` abort startup.
#[derive(Error, Debug)]
pub enum PanelError {
    #[error("{0}")]
    UserInput(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Terminal initialization failed: {0}")]
    Terminal(String),
}

pub type Result<T> = std::result::Result<T, PanelError>;
