//! The narrow seam to the external database client.

use async_trait::async_trait;
use bson::doc;
use mongodb::{Client, Database};
use tracing::info;

use crate::config::ConnectOptions;
use crate::error::{CacheError, CacheResult};

/// Establishes a connection for a resolved URL and returns a handle to
/// the database named in it.
///
/// The cache depends on the driver exclusively through this trait, so
/// tests can substitute a recording implementation.
#[async_trait]
pub trait Connect: Send + Sync {
    /// Handle returned to callers and stored in the cache.
    type Handle: Clone + Send + Sync;

    async fn connect(&self, url: &str, options: &ConnectOptions) -> CacheResult<Self::Handle>;
}

/// Production connector backed by the MongoDB driver.
///
/// The driver connects lazily, so after creating the client this pings
/// the server to surface connection failures at connect time rather than
/// on the first query.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConnector;

#[async_trait]
impl Connect for MongoConnector {
    type Handle = Database;

    async fn connect(&self, url: &str, options: &ConnectOptions) -> CacheResult<Database> {
        let client_options = options.to_client_options(url).await?;

        let client = Client::with_options(client_options)?;

        let database = client.default_database().ok_or_else(|| {
            CacheError::config(format!("connection string '{}' does not name a database", url))
        })?;

        database.run_command(doc! { "ping": 1 }, None).await?;

        info!(database = %database.name(), "MongoDB connection established");

        Ok(database)
    }
}
