//! Persistence gateway for person records.
//!
//! A single logical collection of person documents. The gateway offers exactly two operations,
//! insert and list-all; there are no updates, deletes, transactions or secondary indexes. The
//! store assigns each document its identity at insert time.
//!
//! The gateway is an injected trait object so the service layer never touches a process-wide
//! connection:
//!
//! - [`MongoStore`] for `mongodb://` and `mongodb+srv://` connection strings
//! - [`MemoryStore`] for `memory://`, and for tests

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::config::CoreConfig;
use crate::constants::MEMORY_STORE_URI;
use crate::persons::NewPerson;
use crate::CoreResult;
use api_shared::Person;
use async_trait::async_trait;
use std::sync::Arc;

/// Store-assigned identity of a person document.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Persist a validated person and return the identity the store assigned to it.
    async fn insert(&self, person: &NewPerson) -> CoreResult<PersonId>;

    /// Every stored person, in storage order (insertion order; no sort is applied).
    async fn find_all(&self) -> CoreResult<Vec<Person>>;
}

/// Open the store named by the configured connection string.
///
/// The connection is established (and for MongoDB, verified with a ping) before returning, so a
/// bad connection string or unreachable server fails here rather than on the first request.
///
/// # Errors
///
/// Returns `CoreError::StorageConnect` if the store cannot be reached.
pub async fn connect(cfg: &CoreConfig) -> CoreResult<Arc<dyn PersonStore>> {
    if cfg.mongo_uri() == MEMORY_STORE_URI {
        tracing::warn!("using in-memory person store; records will not survive a restart");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let store =
        MongoStore::connect(cfg.mongo_uri(), cfg.database_name(), cfg.collection_name()).await?;
    Ok(Arc::new(store))
}
