use crate::common::{row_to_item, sqlx_error_to_item_error};
use async_trait::async_trait;
use item_core::{
    error::{ItemError, Result},
    models::{Item, NewItem},
    repository::ItemRepository,
};
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};

/// SQLite implementation of the ItemRepository trait
///
/// This implementation provides item persistence using SQLite with
/// connection pooling, prepared statements, and comprehensive error
/// handling. Identifier assignment is delegated to the database's
/// AUTOINCREMENT counter, so IDs stay unique and are never reused
/// even after deletes.
#[derive(Debug, Clone)]
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    /// Create a new SQLite repository with the given database URL
    ///
    /// # Arguments
    /// * `database_url` - SQLite database URL (file path or `:memory:`)
    ///
    /// # Returns
    /// * `Ok(SqliteItemRepository)` - Successfully connected repository
    /// * `Err(ItemError::Database)` - If connection fails
    ///
    /// # Examples
    /// ```rust,no_run
    /// use database::SqliteItemRepository;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // In-memory database for testing
    /// let repo = SqliteItemRepository::new(":memory:").await?;
    ///
    /// // File-based database
    /// let repo = SqliteItemRepository::new("sqlite:///tmp/items.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(database_url: &str) -> Result<Self> {
        // Handle different database URL formats
        let db_url = if database_url.starts_with(":memory:") {
            // For in-memory databases, use the exact format
            database_url.to_string()
        } else if database_url.starts_with("sqlite://") {
            database_url.to_string()
        } else {
            format!("sqlite://{database_url}")
        };

        // Create database if it doesn't exist (for file-based databases)
        if !db_url.contains(":memory:") && !Sqlite::database_exists(&db_url).await.unwrap_or(false)
        {
            match Sqlite::create_database(&db_url).await {
                Ok(_) => tracing::info!("Database created successfully"),
                Err(error) => {
                    tracing::error!("Error creating database: {}", error);
                    return Err(ItemError::Database(format!(
                        "Failed to create database: {error}"
                    )));
                }
            }
        }

        // Create connection pool with optimal settings
        let connect_options = if db_url.contains(":memory:") {
            // For in-memory databases, use a simpler connection
            sqlx::sqlite::SqliteConnectOptions::new()
                .filename(&db_url)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Memory)
                .busy_timeout(std::time::Duration::from_secs(5))
                .foreign_keys(true)
        } else {
            sqlx::sqlite::SqliteConnectOptions::new()
                .filename(db_url.replace("sqlite://", ""))
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .busy_timeout(std::time::Duration::from_secs(5))
                .foreign_keys(true)
        };

        let pool = SqlitePool::connect_with(connect_options)
            .await
            .map_err(sqlx_error_to_item_error)?;

        Ok(Self { pool })
    }

    /// Run database migrations
    ///
    /// This method applies all pending migrations to bring the database schema
    /// up to date. It should be called after creating a new repository instance.
    ///
    /// # Returns
    /// * `Ok(())` - Migrations completed successfully
    /// * `Err(ItemError::Database)` - If migration fails
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations/sqlite")
            .run(&self.pool)
            .await
            .map_err(|e| ItemError::Database(format!("Migration failed: {e}")))?;

        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get access to the underlying database pool for custom operations
    ///
    /// This method is primarily intended for testing scenarios where
    /// direct SQL execution is needed.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn list(&self) -> Result<Vec<Item>> {
        let rows = sqlx::query("SELECT id, name, quantity, price, supplier FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(sqlx_error_to_item_error)?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(row_to_item(&row)?);
        }

        Ok(items)
    }

    async fn get(&self, id: i64) -> Result<Option<Item>> {
        let result =
            sqlx::query("SELECT id, name, quantity, price, supplier FROM items WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(sqlx_error_to_item_error)?;

        match result {
            Some(row) => Ok(Some(row_to_item(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, candidate: NewItem) -> Result<Item> {
        let row = sqlx::query(
            r#"
            INSERT INTO items (name, quantity, price, supplier)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, quantity, price, supplier
            "#,
        )
        .bind(&candidate.name)
        .bind(candidate.quantity)
        .bind(candidate.price)
        .bind(&candidate.supplier)
        .fetch_one(&self.pool)
        .await
        .map_err(sqlx_error_to_item_error)?;

        row_to_item(&row)
    }

    async fn update(&self, id: i64, fields: NewItem) -> Result<Option<Item>> {
        // Single atomic UPDATE so a racing delete cannot slip between an
        // existence check and the write; a missing row simply yields None.
        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = ?, quantity = ?, price = ?, supplier = ?
            WHERE id = ?
            RETURNING id, name, quantity, price, supplier
            "#,
        )
        .bind(&fields.name)
        .bind(fields.quantity)
        .bind(fields.price)
        .bind(&fields.supplier)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(sqlx_error_to_item_error)?;

        match result {
            Some(row) => Ok(Some(row_to_item(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let deleted_rows = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_item_error)?;

        Ok(deleted_rows.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<()> {
        // Simple query to verify database connectivity
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_item_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn create_test_repository() -> SqliteItemRepository {
        // Use a unique timestamp-based name for each test to avoid locking
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let thread_id = std::thread::current().id();
        let db_name = format!(":memory:item_test_{timestamp}_{thread_id:?}");
        let repo = SqliteItemRepository::new(&db_name).await.unwrap();
        repo.migrate().await.unwrap();
        repo
    }

    fn bolt() -> NewItem {
        NewItem {
            name: "Bolt".to_string(),
            quantity: 100,
            price: 0.5,
            supplier: "Acme".to_string(),
        }
    }

    #[tokio::test]
    async fn test_repository_creation() {
        let repo = create_test_repository().await;
        let result = repo.health_check().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_item() {
        let repo = create_test_repository().await;

        let created = repo.create(bolt()).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.name, "Bolt");
        assert_eq!(created.quantity, 100);
        assert_eq!(created.price, 0.5);
        assert_eq!(created.supplier, "Acme");
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let repo = create_test_repository().await;

        let mut ids = Vec::new();
        for _ in 0..5 {
            let created = repo.create(bolt()).await.unwrap();
            ids.push(created.id);
        }

        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len(), "IDs must be pairwise distinct");
    }

    #[tokio::test]
    async fn test_get_item() {
        let repo = create_test_repository().await;

        let created = repo.create(bolt()).await.unwrap();
        let retrieved = repo.get(created.id).await.unwrap();

        assert_eq!(retrieved, Some(created));

        // Non-existent ID returns None, not an error
        let not_found = repo.get(99999).await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_update_item_overwrites_all_fields() {
        let repo = create_test_repository().await;

        let created = repo.create(bolt()).await.unwrap();

        let replacement = NewItem {
            name: "Bolt M8".to_string(),
            quantity: 90,
            price: 0.55,
            supplier: "Bolt Barn".to_string(),
        };
        let updated = repo.update(created.id, replacement).await.unwrap().unwrap();

        assert_eq!(updated.id, created.id, "ID must never change on update");
        assert_eq!(updated.name, "Bolt M8");
        assert_eq!(updated.quantity, 90);
        assert_eq!(updated.price, 0.55);
        assert_eq!(updated.supplier, "Bolt Barn");

        // Update persisted
        let retrieved = repo.get(created.id).await.unwrap().unwrap();
        assert_eq!(retrieved, updated);
    }

    #[tokio::test]
    async fn test_update_missing_item_leaves_store_unchanged() {
        let repo = create_test_repository().await;

        let created = repo.create(bolt()).await.unwrap();

        let result = repo.update(99999, bolt()).await.unwrap();
        assert!(result.is_none());

        // Cardinality and contents untouched
        let all = repo.list().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn test_delete_item() {
        let repo = create_test_repository().await;

        let created = repo.create(bolt()).await.unwrap();

        let deleted = repo.delete(created.id).await.unwrap();
        assert!(deleted);
        assert!(repo.get(created.id).await.unwrap().is_none());

        // Second delete on the same ID reports absence
        let deleted_again = repo.delete(created.id).await.unwrap();
        assert!(!deleted_again);
    }

    #[tokio::test]
    async fn test_delete_missing_item_leaves_store_unchanged() {
        let repo = create_test_repository().await;

        repo.create(bolt()).await.unwrap();

        let deleted = repo.delete(99999).await.unwrap();
        assert!(!deleted);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_items_in_id_order() {
        let repo = create_test_repository().await;

        let all = repo.list().await.unwrap();
        assert!(all.is_empty());

        let first = repo.create(bolt()).await.unwrap();
        let second = repo
            .create(NewItem {
                name: "Washer".to_string(),
                quantity: 500,
                price: 0.05,
                supplier: "Acme".to_string(),
            })
            .await
            .unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_ids_never_reused_after_delete() {
        let repo = create_test_repository().await;

        let first = repo.create(bolt()).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.create(bolt()).await.unwrap();
        assert!(
            second.id > first.id,
            "A deleted ID must not be handed out again"
        );
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let repo = create_test_repository().await;

        let mut handles = vec![];
        for n in 0..10 {
            let repo_clone = repo.clone();
            let handle = tokio::spawn(async move {
                repo_clone
                    .create(NewItem {
                        name: format!("Part {n}"),
                        quantity: n,
                        price: 1.0,
                        supplier: "Acme".to_string(),
                    })
                    .await
            });
            handles.push(handle);
        }

        let results: Vec<Result<Item>> = futures::future::join_all(handles)
            .await
            .into_iter()
            .map(|r| r.unwrap())
            .collect();

        let mut ids: Vec<i64> = results.iter().map(|r| r.as_ref().unwrap().id).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before, "Concurrent creates must never share an ID");
    }
}
