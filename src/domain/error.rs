//! Error taxonomy for marketplace operations.
//!
//! Every variant is recoverable: callers show [`MarketError::user_message`]
//! and let the user retry. Nothing here is fatal to the process.

use thiserror::Error;

/// A form rule that rejected user input.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please enter email and password")]
    MissingCredentials,

    #[error("Please enter a title")]
    MissingTitle,

    #[error("Please enter a price")]
    MissingPrice,

    #[error("Please enter a valid price")]
    InvalidPrice,

    #[error("Please enter a description")]
    MissingDescription,
}

/// Failure of a marketplace operation.
#[derive(Debug, Error)]
pub enum MarketError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Please login first")]
    NotLoggedIn,

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("storage failure during {operation}: {source:#}")]
    Storage {
        operation: &'static str,
        source: anyhow::Error,
    },
}

impl MarketError {
    // ---
    pub fn storage(operation: &'static str, source: impl Into<anyhow::Error>) -> Self {
        // ---
        MarketError::Storage {
            operation,
            source: source.into(),
        }
    }

    /// Text suitable for showing to the end user.
    ///
    /// Storage failures collapse to a generic retry message so backend
    /// details never reach the presentation layer.
    pub fn user_message(&self) -> String {
        // ---
        match self {
            MarketError::Storage { operation, .. } => {
                format!("{} failed. Please try again.", capitalize(operation))
            }
            MarketError::NotFound { kind, .. } => format!("{} not found", capitalize(kind)),
            other => other.to_string(),
        }
    }
}

fn capitalize(word: &str) -> String {
    // ---
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convenience alias for marketplace results.
pub type MarketResult<T> = std::result::Result<T, MarketError>;
