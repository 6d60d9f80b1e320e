//! # Catalog Repository
//!
//! Database operations for products.
//!
//! Product CRUD proper lives outside this system; the catalog here is the
//! minimal surface the sales engine needs: resolve a product, read stock
//! for the store-wide summary, and insert rows for seeding and tests.
//! Stock decrements never go through this repository - they happen inside
//! the sale-commit transaction in [`crate::repository::ledger`].

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use bodega_core::Product;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let catalog = db.catalog();
///
/// let product = catalog.get_by_id("uuid-here").await?;
/// let on_hand = catalog.total_stock().await?;
/// ```
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: SqlitePool,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CatalogRepository { pool }
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT
                id,
                name,
                stock,
                buy_price_cents,
                sell_price_cents,
                created_at,
                updated_at
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - ID already exists
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, name = %product.name, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (
                id, name, stock,
                buy_price_cents, sell_price_cents,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.stock)
        .bind(product.buy_price_cents)
        .bind(product.sell_price_cents)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Restocks a product (delta update, always positive).
    ///
    /// Sale decrements do NOT use this - they are guarded inside the
    /// ledger's commit transaction. This is the receiving-new-inventory
    /// path.
    pub async fn restock(&self, id: &str, quantity: i64) -> DbResult<()> {
        debug!(id = %id, quantity = %quantity, "Restocking product");

        let now = chrono::Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE products
            SET stock = stock + ?2, updated_at = ?3
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(quantity)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Updates a product's prices (the external CRUD path).
    ///
    /// Note the analytics consequence: cost aggregation joins against the
    /// buy price *as of query time*, so changing it here re-prices the
    /// cost of already-recorded sales. Revenue is unaffected (captured
    /// per entry).
    pub async fn update_prices(
        &self,
        id: &str,
        buy_price_cents: i64,
        sell_price_cents: i64,
    ) -> DbResult<()> {
        debug!(id = %id, buy = %buy_price_cents, sell = %sell_price_cents, "Updating prices");

        let now = chrono::Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE products
            SET buy_price_cents = ?2, sell_price_cents = ?3, updated_at = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(buy_price_cents)
        .bind(sell_price_cents)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Total units on hand across the whole catalog.
    ///
    /// Feeds the `totalStock` field of the store-wide summary.
    pub async fn total_stock(&self) -> DbResult<i64> {
        let total: Option<i64> = sqlx::query_scalar("SELECT SUM(stock) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(total.unwrap_or(0))
    }

    /// Counts products (for diagnostics and the seed binary).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new product ID.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}
