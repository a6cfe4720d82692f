//! # Product Store
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Insert/delete keyed by name
//! - Quantity and price updates
//! - Case-insensitive lookup
//!
//! ## Failure Policy Per Operation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  add / remove / list_all / clear     swallow: log + false/empty     │
//! │  update_quantity / update_price      propagate: DbResult<bool>      │
//! │  find_by_name                        propagate: DbResult<Option>    │
//! │                                                                     │
//! │  The split is inherited behavior, preserved deliberately. For the   │
//! │  propagating operations the controller is the failure boundary.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, error};

use crate::connection::ConnectionProvider;
use crate::error::DbResult;
use storekeep_core::Product;

/// Store for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let store = ProductStore::new(provider);
///
/// let added = store.add(&Product::new("Widget", 3, 2.50)).await;
/// let found = store.find_by_name("widget").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductStore {
    provider: ConnectionProvider,
}

impl ProductStore {
    /// Creates a new ProductStore.
    pub fn new(provider: ConnectionProvider) -> Self {
        ProductStore { provider }
    }

    /// Inserts a new product.
    ///
    /// No uniqueness constraint exists at the storage layer, so inserting an
    /// already-present name succeeds and leaves two rows.
    ///
    /// ## Returns
    /// * `true` - at least one row was inserted
    /// * `false` - statement affected no rows, or any failure (logged)
    pub async fn add(&self, product: &Product) -> bool {
        debug!(name = %product.name, "Inserting product");

        match self.try_add(product).await {
            Ok(rows) => rows > 0,
            Err(e) => {
                error!(name = %product.name, error = %e, "Failed to insert product");
                false
            }
        }
    }

    async fn try_add(&self, product: &Product) -> DbResult<u64> {
        let mut conn = self.provider.connect().await?;
        let result = sqlx::query("INSERT INTO products (name, quantity, price) VALUES (?1, ?2, ?3)")
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price)
            .execute(&mut conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Deletes a product by name.
    ///
    /// ## Returns
    /// * `true` - at least one row was deleted
    /// * `false` - no row matched, or any failure (logged)
    pub async fn remove(&self, name: &str) -> bool {
        debug!(name = %name, "Deleting product");

        match self.try_remove(name).await {
            Ok(rows) => rows > 0,
            Err(e) => {
                error!(name = %name, error = %e, "Failed to delete product");
                false
            }
        }
    }

    async fn try_remove(&self, name: &str) -> DbResult<u64> {
        let mut conn = self.provider.connect().await?;
        let result = sqlx::query("DELETE FROM products WHERE name = ?1")
            .bind(name)
            .execute(&mut conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Updates the quantity of the product with the given name.
    ///
    /// Unlike `add`/`remove`, a driver failure here propagates to the caller.
    ///
    /// ## Returns
    /// * `Ok(true)` - at least one row was updated
    /// * `Ok(false)` - no row matched the name
    /// * `Err(DbError)` - connection or statement failure
    pub async fn update_quantity(&self, name: &str, quantity: i64) -> DbResult<bool> {
        debug!(name = %name, quantity = %quantity, "Updating quantity");

        let mut conn = self.provider.connect().await?;
        let result = sqlx::query("UPDATE products SET quantity = ?1 WHERE name = ?2")
            .bind(quantity)
            .bind(name)
            .execute(&mut conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Updates the price of the product with the given name.
    ///
    /// Same shape as [`ProductStore::update_quantity`].
    pub async fn update_price(&self, name: &str, price: f64) -> DbResult<bool> {
        debug!(name = %name, price = %price, "Updating price");

        let mut conn = self.provider.connect().await?;
        let result = sqlx::query("UPDATE products SET price = ?1 WHERE name = ?2")
            .bind(price)
            .bind(name)
            .execute(&mut conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Looks up a product by name, case-insensitively.
    ///
    /// Both sides are folded with `LOWER`, so inserting "Widget" and looking
    /// up "WIDGET" returns the same row. Returns the first matching row in
    /// storage order when duplicates exist.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - first matching row
    /// * `Ok(None)` - no match
    /// * `Err(DbError)` - connection or statement failure
    pub async fn find_by_name(&self, name: &str) -> DbResult<Option<Product>> {
        debug!(name = %name, "Looking up product");

        let mut conn = self.provider.connect().await?;
        let product = sqlx::query_as::<_, Product>(
            "SELECT name, quantity, price FROM products WHERE LOWER(name) = LOWER(?1)",
        )
        .bind(name)
        .fetch_optional(&mut conn)
        .await?;

        Ok(product)
    }

    /// Lists all products in storage order.
    ///
    /// No ORDER BY: row order is incidental, not guaranteed. This operation
    /// never surfaces failure to its caller - on any error it logs and
    /// returns an empty list, an inconsistency with its sibling operations
    /// that is preserved as existing behavior.
    pub async fn list_all(&self) -> Vec<Product> {
        match self.try_list_all().await {
            Ok(products) => products,
            Err(e) => {
                error!(error = %e, "Failed to list products");
                Vec::new()
            }
        }
    }

    async fn try_list_all(&self) -> DbResult<Vec<Product>> {
        let mut conn = self.provider.connect().await?;
        let products =
            sqlx::query_as::<_, Product>("SELECT name, quantity, price FROM products")
                .fetch_all(&mut conn)
                .await?;
        Ok(products)
    }

    /// Deletes every row in the products table.
    ///
    /// ## Returns
    /// * `true` - at least one row was deleted
    /// * `false` - the table was already empty (still empty afterwards), or
    ///   any failure (logged)
    pub async fn clear(&self) -> bool {
        debug!("Clearing products table");

        match self.try_clear().await {
            Ok(rows) => rows > 0,
            Err(e) => {
                error!(error = %e, "Failed to clear products table");
                false
            }
        }
    }

    async fn try_clear(&self) -> DbResult<u64> {
        let mut conn = self.provider.connect().await?;
        let result = sqlx::query("DELETE FROM products")
            .execute(&mut conn)
            .await?;
        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;
    use crate::migrations;
    use tempfile::TempDir;

    async fn test_store() -> (TempDir, ProductStore) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("test.db").display());
        let provider = ConnectionProvider::new(DbConfig::new(url, "tester", "secret"));
        migrations::run(&provider).await.unwrap();
        (dir, ProductStore::new(provider))
    }

    #[tokio::test]
    async fn test_add_then_find_returns_equal_fields() {
        let (_dir, store) = test_store().await;
        let product = Product::new("Widget", 3, 2.5);

        assert!(store.add(&product).await);

        let found = store.find_by_name("Widget").await.unwrap().unwrap();
        assert_eq!(found, product);
    }

    #[tokio::test]
    async fn test_find_is_case_insensitive() {
        let (_dir, store) = test_store().await;
        store.add(&Product::new("Widget", 1, 1.0)).await;

        let lower = store.find_by_name("widget").await.unwrap().unwrap();
        let upper = store.find_by_name("WIDGET").await.unwrap().unwrap();
        assert_eq!(lower.name, "Widget");
        assert_eq!(upper.name, "Widget");
    }

    #[tokio::test]
    async fn test_duplicate_names_both_insert() {
        // No storage-layer uniqueness: the gap is real and observable.
        let (_dir, store) = test_store().await;
        assert!(store.add(&Product::new("Widget", 1, 1.0)).await);
        assert!(store.add(&Product::new("Widget", 2, 2.0)).await);
        assert_eq!(store.list_all().await.len(), 2);
    }

    #[tokio::test]
    async fn test_remove_then_find_absent() {
        let (_dir, store) = test_store().await;
        store.add(&Product::new("Widget", 1, 1.0)).await;

        assert!(store.remove("Widget").await);
        assert!(store.find_by_name("Widget").await.unwrap().is_none());

        // Removing again matches nothing.
        assert!(!store.remove("Widget").await);
    }

    #[tokio::test]
    async fn test_update_quantity() {
        let (_dir, store) = test_store().await;
        store.add(&Product::new("Widget", 1, 1.0)).await;

        assert!(store.update_quantity("Widget", 10).await.unwrap());
        let found = store.find_by_name("Widget").await.unwrap().unwrap();
        assert_eq!(found.quantity, 10);
        assert_eq!(found.price, 1.0);
    }

    #[tokio::test]
    async fn test_update_price() {
        let (_dir, store) = test_store().await;
        store.add(&Product::new("Widget", 1, 1.0)).await;

        assert!(store.update_price("Widget", 4.75).await.unwrap());
        let found = store.find_by_name("Widget").await.unwrap().unwrap();
        assert_eq!(found.price, 4.75);
        assert_eq!(found.quantity, 1);
    }

    #[tokio::test]
    async fn test_update_on_missing_name_is_false_and_changes_nothing() {
        let (_dir, store) = test_store().await;
        store.add(&Product::new("Widget", 1, 1.0)).await;

        assert!(!store.update_quantity("Gadget", 10).await.unwrap());
        assert!(!store.update_price("Gadget", 9.99).await.unwrap());

        let found = store.find_by_name("Widget").await.unwrap().unwrap();
        assert_eq!(found, Product::new("Widget", 1, 1.0));
    }

    #[tokio::test]
    async fn test_list_all_on_empty_table_is_empty() {
        let (_dir, store) = test_store().await;
        assert!(store.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_returns_rows_in_storage_order() {
        let (_dir, store) = test_store().await;
        store.add(&Product::new("Widget", 1, 1.0)).await;
        store.add(&Product::new("Gadget", 2, 2.0)).await;

        let all = store.list_all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Widget");
        assert_eq!(all[1].name, "Gadget");
    }

    #[tokio::test]
    async fn test_clear_on_empty_table_reports_false() {
        let (_dir, store) = test_store().await;

        // Zero rows affected reads as failure even though the table is in
        // the requested state afterwards.
        assert!(!store.clear().await);
        assert!(store.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_with_rows_reports_true() {
        let (_dir, store) = test_store().await;
        store.add(&Product::new("Widget", 1, 1.0)).await;
        store.add(&Product::new("Gadget", 2, 2.0)).await;

        assert!(store.clear().await);
        assert!(store.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_swallowing_ops_report_false_without_schema() {
        // No migrations: every statement fails, and the swallowing
        // operations collapse that to false/empty instead of erroring.
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("bare.db").display());
        let provider = ConnectionProvider::new(DbConfig::new(url, "tester", "secret"));
        let store = ProductStore::new(provider);

        assert!(!store.add(&Product::new("Widget", 1, 1.0)).await);
        assert!(!store.remove("Widget").await);
        assert!(!store.clear().await);
        assert!(store.list_all().await.is_empty());

        // The propagating operations surface the same failure as an error.
        assert!(store.find_by_name("Widget").await.is_err());
        assert!(store.update_quantity("Widget", 1).await.is_err());
        assert!(store.update_price("Widget", 1.0).await.is_err());
    }
}
