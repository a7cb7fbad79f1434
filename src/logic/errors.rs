use anyhow::Error;
use std::io;

/// Errors raised by the path selector itself (never by the vault)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// Internal contract violation; reaching it means the level gating is broken
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// User input that must be corrected before anything touches the vault
    #[error("{0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    AlreadyExists,
    MissingParent,
    PermissionDenied,
    InvalidArgument,
    Other,
}

/// Classify a creation failure by walking its error chain
pub fn classify_error(error: &Error) -> ErrorType {
    for cause in error.chain() {
        if let Some(selector_err) = cause.downcast_ref::<SelectorError>() {
            return match selector_err {
                SelectorError::InvalidArgument(_) => ErrorType::InvalidArgument,
                SelectorError::Validation(_) => ErrorType::Other,
            };
        }
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            return match io_err.kind() {
                io::ErrorKind::AlreadyExists => ErrorType::AlreadyExists,
                io::ErrorKind::NotFound => ErrorType::MissingParent,
                io::ErrorKind::PermissionDenied => ErrorType::PermissionDenied,
                _ => ErrorType::Other,
            };
        }
    }

    ErrorType::Other
}

/// Format error message for the user - the deepest cause in the chain
pub fn format_error_message(error: &Error) -> String {
    error
        .chain()
        .last()
        .map(ToString::to_string)
        .unwrap_or_else(|| error.to_string())
}
