//! Error types for selector operations
//!
//! Every error is local to the single event being handled. The container
//! decides how each one surfaces: `NotFound` becomes an error toast,
//! `InvalidGeometry` is a silent no-op, configuration errors only come out of
//! the config-file layer.

use crate::types::ItemId;
use thiserror::Error;

/// Errors that can occur while handling selector events
#[derive(Error, Debug)]
pub enum SelectorError {
    /// A referenced item id does not exist in the current collection
    /// (stale id, or a drag that started in another container)
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// Positional data from the platform is missing or malformed
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A canvas configuration without explicit dimensions
    #[error("configuration missing: {0}")]
    ConfigurationMissing(&'static str),

    /// Config JSON could not be parsed
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error while reading a config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for selector operations
pub type SelectorResult<T> = Result<T, SelectorError>;

impl SelectorError {
    /// Whether this error should interrupt the user with a notification.
    ///
    /// Only out-of-scope drops do; geometry problems stay silent.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, SelectorError::NotFound(_))
    }
}
