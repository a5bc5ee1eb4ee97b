//! Process-local contact store. Used by tests and `STORE_BACKEND=memory` runs.

use super::ContactStore;
use crate::domain::{Contact, NewContact};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Contact>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryContactStore {
    inner: RwLock<Inner>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Contact>> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn save(&self, id: Option<i64>, contact: &NewContact) -> Result<Contact> {
        let mut inner = self.inner.write().await;
        let id = match id {
            Some(id) => id,
            None => inner
                .next_id
                .max(0)
                .checked_add(1)
                .ok_or_else(|| anyhow!("contact id space exhausted"))?,
        };
        inner.next_id = inner.next_id.max(id);
        let saved = contact.clone().with_id(id);
        inner.rows.insert(id, saved.clone());
        Ok(saved)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.inner.read().await.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> NewContact {
        NewContact::new("Alice Johnson", "1234567890", "alice@example.com")
    }

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let store = InMemoryContactStore::new();
        let a = store.save(None, &alice()).await.unwrap();
        let b = store.save(None, &alice()).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn explicit_id_is_skipped_by_later_inserts() {
        let store = InMemoryContactStore::new();
        store.save(Some(10), &alice()).await.unwrap();
        let next = store.save(None, &alice()).await.unwrap();
        assert_eq!(next.id, 11);
    }

    #[tokio::test]
    async fn insert_after_max_id_fails_without_wrapping() {
        let store = InMemoryContactStore::new();
        store.save(Some(i64::MAX), &alice()).await.unwrap();
        assert!(store.save(None, &alice()).await.is_err());
        let ids: Vec<i64> = store.find_all().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![i64::MAX]);
        // The lock is still usable afterwards.
        assert!(store.exists_by_id(i64::MAX).await.unwrap());
    }

    #[tokio::test]
    async fn explicit_id_overwrites() {
        let store = InMemoryContactStore::new();
        let created = store.save(None, &alice()).await.unwrap();
        let bob = NewContact::new("Bob Smith", "0987654321", "bob@example.com");
        store.save(Some(created.id), &bob).await.unwrap();
        let fetched = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, bob.with_id(created.id));
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let store = InMemoryContactStore::new();
        let created = store.save(None, &alice()).await.unwrap();
        assert!(store.exists_by_id(created.id).await.unwrap());
        store.delete_by_id(created.id).await.unwrap();
        assert!(!store.exists_by_id(created.id).await.unwrap());
        assert!(store.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let store = InMemoryContactStore::new();
        store.save(Some(5), &alice()).await.unwrap();
        store.save(Some(2), &alice()).await.unwrap();
        store.save(None, &alice()).await.unwrap();
        let ids: Vec<i64> = store.find_all().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 5, 6]);
    }
}
