//! Typed connection options and override merging.

use mongodb::options::ClientOptions;

use crate::error::{CacheError, CacheResult};

/// Options applied when establishing a connection.
///
/// Every field has a fixed default; callers override individual fields
/// through [`OptionOverrides`] on the first call for a logical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOptions {
    /// Maximum connection pool size.
    pub pool_size: u32,
    /// Reconnect automatically when the connection drops. Legacy driver
    /// flag with no counterpart in mongodb 2.x; carried for compatibility.
    pub auto_reconnect: bool,
    /// Use the strict connection-string parser. Legacy driver flag, same
    /// status as `auto_reconnect`.
    pub use_new_url_parser: bool,
    /// Application name (shown in server logs).
    pub app_name: Option<String>,
    /// Replica set name. Only honored in service-registry mode.
    pub replica_set: Option<String>,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            pool_size: 10,
            auto_reconnect: true,
            use_new_url_parser: true,
            app_name: None,
            replica_set: None,
        }
    }
}

impl ConnectOptions {
    /// Merge caller overrides over the defaults, field by field. A field
    /// the caller did not set keeps its default.
    pub fn merged(overrides: OptionOverrides) -> Self {
        let defaults = Self::default();
        Self {
            pool_size: overrides.pool_size.unwrap_or(defaults.pool_size),
            auto_reconnect: overrides.auto_reconnect.unwrap_or(defaults.auto_reconnect),
            use_new_url_parser: overrides
                .use_new_url_parser
                .unwrap_or(defaults.use_new_url_parser),
            app_name: overrides.app_name.or(defaults.app_name),
            replica_set: overrides.replica_set.or(defaults.replica_set),
        }
    }

    /// Convert to driver [`ClientOptions`] for a resolved connection URL.
    pub async fn to_client_options(&self, url: &str) -> CacheResult<ClientOptions> {
        let mut options = ClientOptions::parse(url)
            .await
            .map_err(|e| CacheError::config(format!("failed to parse URI: {}", e)))?;

        options.max_pool_size = Some(self.pool_size);

        if let Some(ref app_name) = self.app_name {
            options.app_name = Some(app_name.clone());
        }

        if let Some(ref replica_set) = self.replica_set {
            options.repl_set_name = Some(replica_set.clone());
        }

        // auto_reconnect and use_new_url_parser are not available in
        // mongodb 2.x; the driver manages both internally.
        let _ = self.auto_reconnect;
        let _ = self.use_new_url_parser;

        Ok(options)
    }
}

/// Caller-supplied partial options, merged over [`ConnectOptions`]
/// defaults with caller values taking precedence per field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionOverrides {
    pub pool_size: Option<u32>,
    pub auto_reconnect: Option<bool>,
    pub use_new_url_parser: Option<bool>,
    pub app_name: Option<String>,
    pub replica_set: Option<String>,
}

impl OptionOverrides {
    /// Create an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the maximum pool size.
    pub fn pool_size(mut self, size: u32) -> Self {
        self.pool_size = Some(size);
        self
    }

    /// Override the auto-reconnect flag.
    pub fn auto_reconnect(mut self, enabled: bool) -> Self {
        self.auto_reconnect = Some(enabled);
        self
    }

    /// Override the URL-parser flag.
    pub fn use_new_url_parser(mut self, enabled: bool) -> Self {
        self.use_new_url_parser = Some(enabled);
        self
    }

    /// Set the application name.
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Set the replica set name.
    pub fn replica_set(mut self, name: impl Into<String>) -> Self {
        self.replica_set = Some(name.into());
        self
    }
}
