//! Persistence seam for contact records.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryContactStore;
pub use postgres::PostgresContactStore;

use crate::domain::{Contact, NewContact};
use anyhow::Result;
use async_trait::async_trait;

/// The operations the contact service needs from a record store.
///
/// Implementations own their concurrency control; callers issue one call per logical action.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>>;

    /// All records, ascending by id.
    async fn find_all(&self) -> Result<Vec<Contact>>;

    /// Inserts or overwrites a record.
    ///
    /// `None` lets the store assign the id. `Some(id)` writes at exactly that id, creating the
    /// row if it is absent; later store-assigned ids must not collide with it.
    async fn save(&self, id: Option<i64>, contact: &NewContact) -> Result<Contact>;

    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Cheap liveness probe.
    async fn ping(&self) -> Result<()>;
}
