// src/error.rs

//! Unified error handling for the atlas client.

use std::fmt;

use thiserror::Error;

/// Result type alias for atlas operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested year is outside the supported set
    #[error("Invalid year {year}. Only {supported:?} are supported.")]
    InvalidYear { year: u16, supported: Vec<u16> },

    /// HTTP request failed (transport error or non-2xx status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Expected table(s) not found in an otherwise successful response
    #[error("Required tables not found for {context}")]
    MissingTable { context: String },

    /// Report body could not be parsed
    #[error("Parse error for {context}: {message}")]
    Parse { context: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a missing-table error.
    pub fn missing_table(context: impl Into<String>) -> Self {
        Self::MissingTable {
            context: context.into(),
        }
    }

    /// Create a parse error with context.
    pub fn parse(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Parse {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid-year error.
    pub fn invalid_year(year: u16, supported: &[u16]) -> Self {
        Self::InvalidYear {
            year,
            supported: supported.to_vec(),
        }
    }
}
