//! # mongo-cache
//!
//! A process-local cache of MongoDB database handles, with the connection
//! URL resolved from the runtime environment. Connect once per logical
//! name, reuse the handle everywhere.
//!
//! Three resolution modes, in priority order:
//! - **Service-registry mode** — `VCAP_SERVICES` is set (Cloud Foundry).
//!   The default name selects the first bound mongodb service; any other
//!   name must match a bound service's name. No match is an error.
//! - **Prefix-URL mode** — `MONGODB_URL` is set. The logical name is
//!   appended: `<MONGODB_URL>/<name>`.
//! - **Default mode** — neither is set. `mongodb://localhost:27017/<name>`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mongo_cache::{MongoCache, OptionOverrides};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cache = MongoCache::from_process_env();
//!
//!     // First call connects; options apply only here.
//!     let db = cache
//!         .default_database(OptionOverrides::new().pool_size(1))
//!         .await?;
//!
//!     // Later calls return the cached handle and ignore overrides.
//!     let same = cache.default_database(OptionOverrides::new()).await?;
//!
//!     let users = db.collection::<bson::Document>("users");
//!     Ok(())
//! }
//! ```
//!
//! Connect as early as possible (before binding your listener, say) so a
//! bad environment fails the process fast; every later call is a cheap
//! cache hit.
//!
//! [`DbCache::clear`] empties the cache but closes nothing; close cached
//! handles through the driver first to avoid leaking connections.

pub mod cache;
pub mod config;
pub mod connect;
pub mod error;
pub mod resolve;

pub use cache::{DbCache, MongoCache};
pub use config::{ConnectOptions, OptionOverrides};
pub use connect::{Connect, MongoConnector};
pub use error::{CacheError, CacheResult};
pub use resolve::{Env, DEFAULT_NAME, MONGODB_URL, VCAP_SERVICES};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cache::{DbCache, MongoCache};
    pub use crate::config::{ConnectOptions, OptionOverrides};
    pub use crate::connect::{Connect, MongoConnector};
    pub use crate::error::{CacheError, CacheResult};
    pub use crate::resolve::{Env, DEFAULT_NAME};
}
