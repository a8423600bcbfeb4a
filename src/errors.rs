//! Unified error types for the debt ledger.
//!
//! Every core operation returns [`Result`], and each failure falls into one of the
//! ledger categories (validation, not found, conflict, storage) or an ambient
//! category (configuration, environment, I/O, Discord framework). The bot layer
//! renders these to users without the core knowing anything about Discord.

use thiserror::Error;

/// Errors produced by the ledger core and its surrounding layers.
#[derive(Debug, Error)]
pub enum Error {
    /// A mandatory field is missing or a value is out of range
    #[error("Validation failed: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// A referenced debt or client does not exist
    #[error("{entity} {id} not found")]
    NotFound {
        /// Kind of record that was looked up ("debt", "client")
        entity: &'static str,
        /// The identifier that had no matching row
        id: i64,
    },

    /// A concurrent write won a unique-constraint race; retry the lookup
    #[error("Conflict: {message}")]
    Conflict {
        /// Description of the conflicting write
        message: String,
    },

    /// Underlying store failure (connection loss, transaction abort, constraint)
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Required environment variable missing
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Filesystem failure (photo storage, config reading)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serenity/Poise failure while talking to Discord
    #[error("Discord framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl Error {
    /// Shorthand for building a [`Error::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether the caller should repeat the operation (currently only conflicts).
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
