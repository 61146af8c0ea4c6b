//! `PostgreSQL` document store backed by a single JSONB table.
//!
//! Queries are built at runtime so the crate compiles without a live database.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use super::{Document, DocumentStore, StoreError, StoredDocument};

/// Internal row type for `merch.documents` listings.
#[derive(Debug, sqlx::FromRow)]
struct DocumentRow {
    id: String,
    data: Value,
}

impl TryFrom<DocumentRow> for StoredDocument {
    type Error = StoreError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            data: into_document(&row.id, row.data)?,
            id: row.id,
        })
    }
}

fn into_document(id: &str, value: Value) -> Result<Document, StoreError> {
    match value {
        Value::Object(data) => Ok(data),
        other => Err(StoreError::DataCorruption(format!(
            "document {id} is not a JSON object: {other}"
        ))),
    }
}

/// Document store over the `merch.documents` table.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Create a store over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let data: Option<Value> = sqlx::query_scalar(
            r"
            SELECT data FROM merch.documents
            WHERE collection = $1 AND id = $2
            ",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        data.map(|value| into_document(id, value)).transpose()
    }

    async fn set(&self, collection: &str, id: &str, data: Document) -> Result<(), StoreError> {
        sqlx::query(
            r"
            INSERT INTO merch.documents (collection, id, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, id) DO UPDATE SET data = EXCLUDED.data, updated_at = NOW()
            ",
        )
        .bind(collection)
        .bind(id)
        .bind(Value::Object(data))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(
            r"
            UPDATE merch.documents
            SET data = data || $3, updated_at = NOW()
            WHERE collection = $1 AND id = $2
            ",
        )
        .bind(collection)
        .bind(id)
        .bind(Value::Object(fields))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(collection, id));
        }

        Ok(())
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let rows: Vec<DocumentRow> = sqlx::query_as(
            r"
            SELECT id, data FROM merch.documents
            WHERE collection = $1
            ORDER BY id
            ",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
