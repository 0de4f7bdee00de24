use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::{postgres::PgPoolOptions, types::Json, FromRow, PgPool};
use uuid::Uuid;

use super::{Collection, Document, DocumentStore, StoreError};
use crate::core::config::DatabaseConfig;

/// Documents stored as JSONB rows keyed by `(collection, id)`.
///
/// Queries never filter or sort on document fields; callers do that in memory.
pub struct PgDocumentStore {
    pool: PgPool,
}

/// Store order: oldest first, documents without `created_at` ahead, id breaks ties
const LIST_DOCUMENTS_SQL: &str = r#"
    SELECT id, data, created_at, updated_at
    FROM documents
    WHERE collection = $1
    ORDER BY created_at ASC NULLS FIRST, id ASC
"#;

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: String,
    data: Json<Value>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        let data = match row.data.0 {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Document {
            id: row.id,
            data,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl PgDocumentStore {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
            .connect(&config.url)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(format!("Migration failed: {}", e)))
    }
}

/// Classify driver errors into the store taxonomy
fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            StoreError::Unavailable("connection pool exhausted or closed".to_string())
        }
        sqlx::Error::Io(err) => StoreError::Unavailable(err.to_string()),
        sqlx::Error::Tls(err) => StoreError::Unavailable(err.to_string()),
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.to_string()).unwrap_or_default();
            if code == "55000" {
                StoreError::FailedPrecondition(db_err.message().to_string())
            } else if code.starts_with("08") {
                StoreError::Unavailable(db_err.message().to_string())
            } else {
                StoreError::Backend(db_err.message().to_string())
            }
        }
        other => StoreError::Backend(other.to_string()),
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn list(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let rows = sqlx::query_as::<_, DocumentRow>(LIST_DOCUMENTS_SQL)
        .bind(collection.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list '{}': {:?}", collection, e);
            map_sqlx_error(e)
        })?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn get(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, data, created_at, updated_at
            FROM documents
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get '{}/{}': {:?}", collection, id, e);
            map_sqlx_error(e)
        })?;

        Ok(row.map(Document::from))
    }

    async fn insert(
        &self,
        collection: Collection,
        data: Map<String, Value>,
    ) -> Result<String, StoreError> {
        let id = Uuid::new_v4().simple().to_string();

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, data, created_at, updated_at)
            VALUES ($1, $2, $3, now(), now())
            "#,
        )
        .bind(collection.as_str())
        .bind(&id)
        .bind(Json(Value::Object(data)))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert into '{}': {:?}", collection, e);
            map_sqlx_error(e)
        })?;

        Ok(id)
    }

    async fn merge_update(
        &self,
        collection: Collection,
        id: &str,
        data: Map<String, Value>,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE documents
            SET data = data || $3, updated_at = now()
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection.as_str())
        .bind(id)
        .bind(Json(Value::Object(data)))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update '{}/{}': {:?}", collection, id, e);
            map_sqlx_error(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }

        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete '{}/{}': {:?}", collection, id, e);
                map_sqlx_error(e)
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_has_a_total_order() {
        let sql = LIST_DOCUMENTS_SQL.split_whitespace().collect::<Vec<_>>().join(" ");
        assert!(sql.ends_with("ORDER BY created_at ASC NULLS FIRST, id ASC"));
    }

    #[test]
    fn test_pool_errors_are_unavailable() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            StoreError::Backend(_)
        ));
    }

    #[test]
    fn test_non_object_rows_become_empty_documents() {
        let row = DocumentRow {
            id: "x".to_string(),
            data: Json(Value::Null),
            created_at: None,
            updated_at: None,
        };
        let document = Document::from(row);
        assert!(document.data.is_empty());
        assert_eq!(document.id, "x");
    }
}
