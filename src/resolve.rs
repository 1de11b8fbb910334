//! Connection URL resolution from the process environment.
//!
//! Three modes, consulted in fixed priority order:
//! 1. service-registry mode (`VCAP_SERVICES` set) — look the logical name
//!    up among the bound services,
//! 2. prefix-URL mode (`MONGODB_URL` set) — append the logical name to the
//!    base URL,
//! 3. default mode — local mongod, `mongodb://localhost:27017/<name>`.

use serde::Deserialize;

use crate::error::{CacheError, CacheResult};

/// Environment variable holding the Cloud Foundry service registry.
pub const VCAP_SERVICES: &str = "VCAP_SERVICES";

/// Environment variable holding the base connection URL.
pub const MONGODB_URL: &str = "MONGODB_URL";

/// Logical name used when the caller does not supply one.
pub const DEFAULT_NAME: &str = "default";

const LOCAL_URL: &str = "mongodb://localhost:27017";

/// Snapshot of the environment state the resolver consults.
///
/// Captured once via [`Env::from_process`]; tests construct it directly.
#[derive(Debug, Clone, Default)]
pub struct Env {
    /// Raw `VCAP_SERVICES` JSON document, if set.
    pub vcap_services: Option<String>,
    /// Base connection URL from `MONGODB_URL`, if set.
    pub mongodb_url: Option<String>,
}

impl Env {
    /// Capture the relevant variables from the process environment.
    pub fn from_process() -> Self {
        Self {
            vcap_services: std::env::var(VCAP_SERVICES).ok(),
            mongodb_url: std::env::var(MONGODB_URL).ok(),
        }
    }

    /// Whether service-registry mode is active.
    pub fn service_registry_active(&self) -> bool {
        self.vcap_services.is_some()
    }
}

/// The subset of a `VCAP_SERVICES` document this crate reads. Other
/// service types and extra fields are ignored.
#[derive(Debug, Deserialize)]
struct ServiceRegistry {
    #[serde(default)]
    mongodb: Vec<ServiceBinding>,
}

#[derive(Debug, Deserialize)]
struct ServiceBinding {
    name: String,
    credentials: Credentials,
}

#[derive(Debug, Deserialize)]
struct Credentials {
    uri: String,
}

/// Resolve the connection URL for a logical name.
///
/// Pure over the snapshot. In service-registry mode the name `"default"`
/// selects the first bound mongodb service regardless of its own name;
/// any other name must match a binding's `name` exactly. A malformed
/// registry document propagates as [`CacheError::Registry`].
pub fn resolve_url(env: &Env, name: &str) -> CacheResult<String> {
    if let Some(raw) = &env.vcap_services {
        let registry: ServiceRegistry = serde_json::from_str(raw)?;
        let mut descriptors = registry.mongodb.into_iter();
        let descriptor = if name == DEFAULT_NAME {
            descriptors.next()
        } else {
            descriptors.find(|service| service.name == name)
        };
        return descriptor
            .map(|service| service.credentials.uri)
            .ok_or_else(|| CacheError::service_not_found(name));
    }

    if let Some(base) = &env.mongodb_url {
        return Ok(format!("{}/{}", base, name));
    }

    Ok(format!("{}/{}", LOCAL_URL, name))
}
