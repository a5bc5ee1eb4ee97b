//! Contact store backed by a PostgreSQL `contacts` table.

use super::ContactStore;
use crate::domain::{Contact, NewContact};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS contacts (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    phone_number TEXT NOT NULL,
    email TEXT NOT NULL
)";

#[derive(Clone)]
pub struct PostgresContactStore {
    pool: PgPool,
}

impl PostgresContactStore {
    /// Connects to `database_url` and makes sure the `contacts` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("connecting to Postgres")?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE_SQL)
            .execute(&self.pool)
            .await
            .context("creating contacts table")?;
        Ok(())
    }

    async fn insert(&self, contact: &NewContact) -> Result<Contact> {
        let row = sqlx::query(
            "INSERT INTO contacts (name, phone_number, email) VALUES ($1, $2, $3)
             RETURNING id, name, phone_number, email",
        )
        .bind(&contact.name)
        .bind(&contact.phone_number)
        .bind(&contact.email)
        .fetch_one(&self.pool)
        .await
        .context("inserting contact")?;
        row_to_contact(&row)
    }

    async fn upsert_at(&self, id: i64, contact: &NewContact) -> Result<Contact> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            "INSERT INTO contacts (id, name, phone_number, email) VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE
             SET name = EXCLUDED.name, phone_number = EXCLUDED.phone_number, email = EXCLUDED.email
             RETURNING id, name, phone_number, email",
        )
        .bind(id)
        .bind(&contact.name)
        .bind(&contact.phone_number)
        .bind(&contact.email)
        .fetch_one(tx.as_mut())
        .await
        .with_context(|| format!("upserting contact {}", id))?;

        // An explicit id does not advance the BIGSERIAL sequence. Move the sequence up to `id`
        // when `id` is at or beyond the next value it would hand out; never move it backwards,
        // so ids of deleted rows and ids reserved by in-flight inserts are never reissued.
        sqlx::query(
            "SELECT setval('contacts_id_seq', $1)
             FROM contacts_id_seq
             WHERE $1 > last_value OR (NOT is_called AND $1 = last_value)",
        )
        .bind(id)
        .execute(tx.as_mut())
        .await
        .context("advancing contacts id sequence")?;

        tx.commit().await?;
        row_to_contact(&row)
    }
}

fn row_to_contact(row: &PgRow) -> Result<Contact> {
    Ok(Contact {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        phone_number: row.try_get("phone_number")?,
        email: row.try_get("email")?,
    })
}

#[async_trait]
impl ContactStore for PostgresContactStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>> {
        let row = sqlx::query("SELECT id, name, phone_number, email FROM contacts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("fetching contact {}", id))?;
        row.as_ref().map(row_to_contact).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Contact>> {
        let rows = sqlx::query("SELECT id, name, phone_number, email FROM contacts ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("listing contacts")?;
        rows.iter().map(row_to_contact).collect()
    }

    async fn save(&self, id: Option<i64>, contact: &NewContact) -> Result<Contact> {
        match id {
            Some(id) => self.upsert_at(id, contact).await,
            None => self.insert(contact).await,
        }
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM contacts WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .with_context(|| format!("checking contact {}", id))?;
        Ok(exists)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("deleting contact {}", id))?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
