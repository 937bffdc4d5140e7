use item_core::{
    error::{ItemError, Result},
    models::Item,
};
use sqlx::{sqlite::SqliteRow, Row};

/// Convert SQLite row to Item model
pub fn row_to_item(row: &SqliteRow) -> Result<Item> {
    Ok(Item {
        id: row.get("id"),
        name: row.get("name"),
        quantity: row.get("quantity"),
        price: row.get("price"),
        supplier: row.get("supplier"),
    })
}

/// Convert SQLx error to ItemError
pub fn sqlx_error_to_item_error(err: sqlx::Error) -> ItemError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            ItemError::Database(format!("Database constraint error: {message}"))
        }
        sqlx::Error::RowNotFound => {
            // Absence is handled via fetch_optional at the call sites
            ItemError::Database("Unexpected RowNotFound error".to_string())
        }
        sqlx::Error::PoolTimedOut => ItemError::Database("Connection pool timeout".to_string()),
        sqlx::Error::Io(io_err) => ItemError::Database(format!("Database I/O error: {io_err}")),
        _ => ItemError::Database(format!("Database operation failed: {err}")),
    }
}
