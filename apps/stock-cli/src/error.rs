//! # Application Error Type
//!
//! Unified error type for menu flows.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in a Menu Flow                            │
//! │                                                                         │
//! │  parse_quantity("ten") ── ValidationError ──┐                          │
//! │                                             │                          │
//! │  store.add(..) ── DbError::UniqueViolation ─┼──► AppError              │
//! │  store.delete(..) ── DbError::NotFound ─────┤        │                 │
//! │  store.list() ── DbError::QueryFailed ──────┘        │                 │
//! │                                                      ▼                 │
//! │                               ┌──────────────────────────────────┐     │
//! │                               │ Io?  → end the session           │     │
//! │                               │ else → print message, keep going │     │
//! │                               └──────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use stock_core::ValidationError;
use stock_db::DbError;

/// Errors a menu flow can end with.
#[derive(Debug, Error)]
pub enum AppError {
    /// Typed input could not be coerced (bad number, blank name).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A product with this name already exists.
    #[error("Product '{name}' already exists")]
    DuplicateName { name: String },

    /// The id does not match any product.
    #[error("Product not found: {id}")]
    NotFound { id: String },

    /// The database failed underneath the operation.
    #[error("Storage failure: {0}")]
    Storage(DbError),

    /// Startup configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading input or writing output failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Categorizes database errors.
///
/// ## Error Mapping
/// ```text
/// DbError::UniqueViolation → AppError::DuplicateName
/// DbError::NotFound        → AppError::NotFound
/// anything else            → AppError::Storage
/// ```
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation { value, .. } => AppError::DuplicateName { name: value },
            DbError::NotFound { id, .. } => AppError::NotFound { id },
            other => AppError::Storage(other),
        }
    }
}

impl AppError {
    /// Creates a NotFound error for a product id.
    pub fn not_found(id: i64) -> Self {
        AppError::NotFound { id: id.to_string() }
    }

    /// Whether the menu can report this error and keep running.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Io(_) | AppError::Config(_))
    }

    /// The line shown to the user.
    ///
    /// Storage faults get a generic message; their detail goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(err) => format!("Error: {}.", err),
            AppError::DuplicateName { name } => {
                format!("Error: a product named '{}' already exists!", name)
            }
            AppError::NotFound { id } => format!("Error: no product with ID {} exists.", id),
            AppError::Storage(_) => {
                "❌ Error: the operation could not be completed. Please try again.".to_string()
            }
            AppError::Config(err) => format!("Error: {}.", err),
            AppError::Io(err) => format!("Error: {}.", err),
        }
    }
}

/// Result type for menu flows.
pub type AppResult<T> = Result<T, AppError>;
