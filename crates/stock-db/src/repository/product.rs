//! # Product Store
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - `add` / `list` / `update_field` / `delete`
//! - `exists` as the precondition guard the menu runs before update/delete
//!
//! ## Single-Field Updates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How update_field Works                               │
//! │                                                                         │
//! │  FieldUpdate::Quantity(15), id = 1                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UPDATE produtos SET quantity = ?1 WHERE id = ?2                       │
//! │       │                                                                 │
//! │       ├── rows_affected == 0  → DbError::NotFound                      │
//! │       ├── UNIQUE(name) fails  → DbError::UniqueViolation               │
//! │       └── rows_affected == 1  → Ok(1)                                  │
//! │                                                                         │
//! │  The other columns are never part of the statement, so they cannot    │
//! │  change.                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stock_core::{FieldUpdate, NewProduct, Product};

const ENTITY: &str = "Product";

/// Store for product records.
///
/// ## Usage
/// ```rust,ignore
/// let store = db.products();
///
/// let product = store.add(&NewProduct::new("Teclado", 10, 120.50)).await?;
/// store.update_field(product.id, FieldUpdate::Quantity(15)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductStore {
    pool: SqlitePool,
}

impl ProductStore {
    /// Creates a new ProductStore.
    pub fn new(pool: SqlitePool) -> Self {
        ProductStore { pool }
    }

    /// Returns true iff a product with `id` is stored.
    pub async fn exists(&self, id: i64) -> DbResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM produtos WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Stored product with its assigned id
    /// * `Err(DbError::UniqueViolation)` - Name already exists; nothing is written
    pub async fn add(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(name = %product.name, "Inserting product");

        let result = sqlx::query("INSERT INTO produtos (name, quantity, price) VALUES (?1, ?2, ?3)")
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::from(e).with_duplicate_value(&product.name))?;

        let id = result.last_insert_rowid();
        debug!(id, "Product inserted");

        Ok(product.clone().with_id(id))
    }

    /// Lists all products in id (insertion) order.
    ///
    /// An empty table yields an empty vector.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, quantity, price FROM produtos ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, quantity, price FROM produtos WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Changes exactly one field of a product.
    ///
    /// ## Returns
    /// * `Ok(n)` - Affected-row count (1 for an existing id)
    /// * `Err(DbError::NotFound)` - No product with `id`
    /// * `Err(DbError::UniqueViolation)` - Renamed to an existing name
    pub async fn update_field(&self, id: i64, update: FieldUpdate) -> DbResult<u64> {
        debug!(id, field = %update.field(), "Updating product field");

        let result = match &update {
            FieldUpdate::Name(name) => {
                sqlx::query("UPDATE produtos SET name = ?1 WHERE id = ?2")
                    .bind(name)
                    .bind(id)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| DbError::from(e).with_duplicate_value(name))?
            }
            FieldUpdate::Quantity(quantity) => {
                sqlx::query("UPDATE produtos SET quantity = ?1 WHERE id = ?2")
                    .bind(quantity)
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
            FieldUpdate::Price(price) => {
                sqlx::query("UPDATE produtos SET price = ?1 WHERE id = ?2")
                    .bind(price)
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
        };

        let affected = result.rows_affected();
        if affected == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }

        Ok(affected)
    }

    /// Permanently deletes a product.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - No product with `id`
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM produtos WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }

        Ok(())
    }

    /// Counts stored products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM produtos")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
