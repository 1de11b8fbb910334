//! Lazy, name-keyed cache of database handles.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::debug;

use crate::config::{ConnectOptions, OptionOverrides};
use crate::connect::{Connect, MongoConnector};
use crate::error::CacheResult;
use crate::resolve::{resolve_url, Env, DEFAULT_NAME};

/// Cache backed by the production MongoDB connector.
pub type MongoCache = DbCache<MongoConnector>;

impl MongoCache {
    /// Cache over the current process environment.
    pub fn from_process_env() -> Self {
        Self::new(MongoConnector, Env::from_process())
    }
}

/// A process-local cache of database handles, keyed by logical name.
///
/// Handles are created lazily on first request and reused until
/// [`clear`](DbCache::clear). Connection options are only consulted on
/// the call that establishes the connection; later calls for the same
/// name return the cached handle and ignore their overrides.
pub struct DbCache<C: Connect> {
    connector: C,
    env: Env,
    handles: Mutex<HashMap<String, C::Handle>>,
}

impl<C: Connect> DbCache<C> {
    /// Create an empty cache over a connector and an environment snapshot.
    pub fn new(connector: C, env: Env) -> Self {
        Self {
            connector,
            env,
            handles: Mutex::new(HashMap::new()),
        }
    }

    /// Get the handle for the `"default"` logical name.
    pub async fn default_database(&self, overrides: OptionOverrides) -> CacheResult<C::Handle> {
        self.get_database(DEFAULT_NAME, overrides).await
    }

    /// Get the handle for a logical name, connecting on first request.
    ///
    /// On a miss the URL is resolved from the environment snapshot, the
    /// overrides are merged over the option defaults, and the connector
    /// is invoked; the handle is cached only on success. Outside
    /// service-registry mode a `replica_set` override is stripped before
    /// the merge (compatibility rule; the driver honors it only for
    /// registry-bound services).
    ///
    /// There is no in-flight de-duplication: two racing first requests
    /// for the same name may both connect, and the last insert wins.
    pub async fn get_database(
        &self,
        name: &str,
        overrides: OptionOverrides,
    ) -> CacheResult<C::Handle> {
        if let Some(handle) = self.handles.lock().get(name) {
            debug!(name = %name, "cache hit");
            return Ok(handle.clone());
        }

        let mut overrides = overrides;
        if !self.env.service_registry_active() {
            overrides.replica_set = None;
        }

        let url = resolve_url(&self.env, name)?;
        let options = ConnectOptions::merged(overrides);

        let handle = self.connector.connect(&url, &options).await?;

        self.handles.lock().insert(name.to_string(), handle.clone());
        debug!(name = %name, url = %url, "cached new connection");

        Ok(handle)
    }

    /// Drop every cached handle.
    ///
    /// This does not close connections; callers must close cached handles
    /// through the driver first to avoid leaking them.
    pub fn clear(&self) {
        self.handles.lock().clear();
        debug!("cache cleared");
    }

    /// Number of cached handles.
    pub fn len(&self) -> usize {
        self.handles.lock().len()
    }

    /// Whether the cache holds no handles.
    pub fn is_empty(&self) -> bool {
        self.handles.lock().is_empty()
    }
}
