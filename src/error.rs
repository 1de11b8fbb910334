//! Error types for connection resolution and caching.

use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors that can occur while resolving or establishing a connection.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Service-registry mode is active but no bound service matches the
    /// requested logical name.
    #[error("Cannot find mongo service '{0}'")]
    ServiceNotFound(String),

    /// The service-registry document failed to parse.
    #[error("service registry error: {0}")]
    Registry(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// MongoDB driver error.
    #[error("mongodb error: {0}")]
    Driver(#[from] mongodb::error::Error),
}

impl CacheError {
    /// Create a service-not-found error for a logical name.
    pub fn service_not_found(name: impl Into<String>) -> Self {
        Self::ServiceNotFound(name.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a service-not-found error.
    pub fn is_service_not_found(&self) -> bool {
        matches!(self, Self::ServiceNotFound(_))
    }

    /// Check if this is a registry parse error.
    pub fn is_registry_error(&self) -> bool {
        matches!(self, Self::Registry(_))
    }
}
