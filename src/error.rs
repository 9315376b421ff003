//! Error types for zenity-dialogs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZenityError {
    #[error("Unsupported dialog kind: {0}")]
    UnsupportedDialogKind(String),

    #[error("Invalid form field type: {0} (expected entry, password or calendar)")]
    InvalidFieldType(String),

    #[error("Dialog process has not been started")]
    NotStarted,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ZenityError>;
