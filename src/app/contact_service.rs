//! The contact service.
//!
//! This module sits between the HTTP layer and the record store. It is responsible for:
//! 1.  Running field validation before any write reaches the store.
//! 2.  Turning store misses into `NotFound` errors with caller-facing messages.
//! 3.  Loading the sample contacts on an empty store when asked to.
//!
//! It holds no per-request state; one instance is shared by all requests.

use crate::domain::validation::{describe, validate};
use crate::domain::{Contact, ContactError, ContactResult, NewContact};
use crate::storage::contacts::ContactStore;
use std::sync::Arc;
use tracing::{debug, info};

pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// All contacts in the store's natural order. Empty when there are none.
    pub async fn list(&self) -> ContactResult<Vec<Contact>> {
        let contacts = self.store.find_all().await?;
        debug!(count = contacts.len(), "listed contacts");
        Ok(contacts)
    }

    pub async fn get_by_id(&self, id: i64) -> ContactResult<Contact> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ContactError::NotFound(format!("Contact with ID {} not found.", id)))
    }

    /// Validates `contact` and persists it under a store-assigned id.
    pub async fn create(&self, contact: NewContact) -> ContactResult<Contact> {
        Self::check(&contact)?;
        let created = self.store.save(None, &contact).await?;
        info!(id = created.id, "created contact");
        Ok(created)
    }

    /// Validates `contact` and writes it at `id`, creating the record if absent and
    /// overwriting it otherwise.
    pub async fn upsert(&self, id: i64, contact: NewContact) -> ContactResult<Contact> {
        Self::check(&contact)?;
        let saved = self.store.save(Some(id), &contact).await?;
        info!(id = saved.id, "upserted contact");
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> ContactResult<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(ContactError::NotFound(format!(
                "Contact with ID {} does not exist.",
                id
            )));
        }
        self.store.delete_by_id(id).await?;
        info!(id, "deleted contact");
        Ok(())
    }

    pub async fn ping(&self) -> ContactResult<()> {
        Ok(self.store.ping().await?)
    }

    /// Creates the sample contacts if the store is empty. Returns how many were created.
    pub async fn seed_sample_contacts(&self) -> ContactResult<usize> {
        if !self.store.find_all().await?.is_empty() {
            debug!("store already has contacts; skipping sample data");
            return Ok(0);
        }
        let samples = sample_contacts();
        let count = samples.len();
        for contact in samples {
            self.create(contact).await?;
        }
        info!(count, "loaded sample contacts");
        Ok(count)
    }

    fn check(contact: &NewContact) -> ContactResult<()> {
        let violations = validate(contact);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ContactError::InvalidInput(describe(&violations)))
        }
    }
}

pub fn sample_contacts() -> Vec<NewContact> {
    vec![
        NewContact::new("Alice Johnson", "1234567890", "alice@example.com"),
        NewContact::new("Bob Smith", "0987654321", "bob@example.com"),
        NewContact::new("Charlie Brown", "1122334455", "charlie@example.com"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::contacts::InMemoryContactStore;
    use async_trait::async_trait;

    fn service() -> ContactService {
        ContactService::new(Arc::new(InMemoryContactStore::new()))
    }

    fn john() -> NewContact {
        NewContact::new("John Doe", "1234567890", "john.doe@example.com")
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids_and_keeps_fields() {
        let svc = service();
        let first = svc.create(john()).await.unwrap();
        let second = svc.create(john()).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(first, john().with_id(first.id));
    }

    #[tokio::test]
    async fn list_is_empty_for_empty_store() {
        assert!(service().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let err = service().get_by_id(1).await.unwrap_err();
        match err {
            ContactError::NotFound(msg) => assert_eq!(msg, "Contact with ID 1 not found."),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let err = service().delete(42).await.unwrap_err();
        match err {
            ContactError::NotFound(msg) => assert_eq!(msg, "Contact with ID 42 does not exist."),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_rejects_invalid_and_persists_nothing() {
        let svc = service();
        let err = svc
            .create(NewContact::new("", "1234567890", "bad"))
            .await
            .unwrap_err();
        match err {
            ContactError::InvalidInput(msg) => {
                assert!(msg.contains("Name must not be blank"));
                assert!(msg.contains("Invalid email format"));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn upsert_rejects_invalid() {
        let err = service()
            .upsert(3, NewContact::new("Jane", " ", "jane@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::InvalidInput(ref m) if m.contains("Phone number must not be blank")));
    }

    #[tokio::test]
    async fn upsert_creates_then_overwrites() {
        let svc = service();
        let created = svc.upsert(7, john()).await.unwrap();
        assert_eq!(created, john().with_id(7));

        let jane = NewContact::new("Jane Doe", "555", "jane@example.com");
        svc.upsert(7, jane.clone()).await.unwrap();
        assert_eq!(svc.get_by_id(7).await.unwrap(), jane.with_id(7));
        assert_eq!(svc.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service();
        let created = svc.create(john()).await.unwrap();
        svc.delete(created.id).await.unwrap();
        assert!(matches!(
            svc.get_by_id(created.id).await,
            Err(ContactError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn seeding_only_happens_on_empty_store() {
        let svc = service();
        assert_eq!(svc.seed_sample_contacts().await.unwrap(), 3);
        assert_eq!(svc.seed_sample_contacts().await.unwrap(), 0);
        let names: Vec<String> = svc.list().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Alice Johnson", "Bob Smith", "Charlie Brown"]);
    }

    struct BrokenStore;

    #[async_trait]
    impl ContactStore for BrokenStore {
        async fn find_by_id(&self, _id: i64) -> anyhow::Result<Option<Contact>> {
            Err(anyhow::anyhow!("connection refused"))
        }
        async fn find_all(&self) -> anyhow::Result<Vec<Contact>> {
            Err(anyhow::anyhow!("connection refused"))
        }
        async fn save(&self, _id: Option<i64>, _c: &NewContact) -> anyhow::Result<Contact> {
            Err(anyhow::anyhow!("connection refused"))
        }
        async fn exists_by_id(&self, _id: i64) -> anyhow::Result<bool> {
            Err(anyhow::anyhow!("connection refused"))
        }
        async fn delete_by_id(&self, _id: i64) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("connection refused"))
        }
        async fn ping(&self) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    #[tokio::test]
    async fn store_failures_surface_as_unexpected() {
        let svc = ContactService::new(Arc::new(BrokenStore));
        assert!(matches!(svc.get_by_id(1).await, Err(ContactError::Unexpected(_))));
        assert!(matches!(svc.list().await, Err(ContactError::Unexpected(_))));
        assert!(matches!(svc.create(john()).await, Err(ContactError::Unexpected(_))));
        assert!(matches!(svc.delete(1).await, Err(ContactError::Unexpected(_))));
        assert!(matches!(svc.ping().await, Err(ContactError::Unexpected(_))));
    }

    #[tokio::test]
    async fn validation_runs_before_the_store() {
        let svc = ContactService::new(Arc::new(BrokenStore));
        assert!(matches!(
            svc.create(NewContact::default()).await,
            Err(ContactError::InvalidInput(_))
        ));
    }
}
