//! # Product Controller
//!
//! Facade over [`ProductStore`]. Pure delegation except for two things: it
//! is the failure boundary for the store's propagating operations (errors
//! become false/None plus a logged diagnostic), and it owns the inventory
//! rendering handed to the console layer.

use tracing::{debug, error};

use storekeep_core::Product;
use storekeep_db::ProductStore;

/// Controller for product operations.
///
/// ## Usage
/// ```rust,ignore
/// let controller = ProductController::new(ProductStore::new(provider));
///
/// controller.add(&Product::new("Widget", 3, 2.50)).await;
/// controller.show_inventory().await;
/// ```
#[derive(Debug, Clone)]
pub struct ProductController {
    store: ProductStore,
}

impl ProductController {
    /// Creates a new ProductController.
    pub fn new(store: ProductStore) -> Self {
        ProductController { store }
    }

    /// Adds a product. Direct delegation.
    pub async fn add(&self, product: &Product) -> bool {
        self.store.add(product).await
    }

    /// Removes a product by name. Direct delegation.
    pub async fn remove(&self, name: &str) -> bool {
        self.store.remove(name).await
    }

    /// Returns the full inventory. Direct delegation.
    pub async fn inventory(&self) -> Vec<Product> {
        self.store.list_all().await
    }

    /// Renders the inventory listing.
    ///
    /// One line per product in storage order, under an "Inventory:" heading,
    /// or the empty-inventory message when there are no rows.
    pub async fn format_inventory(&self) -> String {
        let inventory = self.store.list_all().await;
        if inventory.is_empty() {
            return String::from("Inventory is empty.");
        }

        let mut out = String::from("Inventory:");
        for product in &inventory {
            out.push('\n');
            out.push_str(&product.to_string());
        }
        out
    }

    /// Prints the inventory listing to stdout.
    ///
    /// The facade's sole display side effect; everything else returns plain
    /// data for the presentation layer to render.
    pub async fn show_inventory(&self) {
        println!("{}", self.format_inventory().await);
    }

    /// Finds a product by name (case-insensitive).
    ///
    /// A store-level failure is logged here and converted to `None`; the
    /// error information is discarded at this layer.
    pub async fn find(&self, name: &str) -> Option<Product> {
        match self.store.find_by_name(name).await {
            Ok(product) => product,
            Err(e) => {
                error!(name = %name, error = %e, "Product lookup failed");
                None
            }
        }
    }

    /// Updates a product's quantity.
    ///
    /// ## Returns
    /// * `true` - a row was updated
    /// * `false` - no such product, or a store failure (logged)
    pub async fn update_quantity(&self, name: &str, quantity: i64) -> bool {
        match self.store.update_quantity(name, quantity).await {
            Ok(updated) => updated,
            Err(e) => {
                error!(name = %name, error = %e, "Quantity update failed");
                false
            }
        }
    }

    /// Updates a product's price. Same conversion as
    /// [`ProductController::update_quantity`].
    pub async fn update_price(&self, name: &str, price: f64) -> bool {
        match self.store.update_price(name, price).await {
            Ok(updated) => updated,
            Err(e) => {
                error!(name = %name, error = %e, "Price update failed");
                false
            }
        }
    }

    /// Checks whether a product exists.
    ///
    /// Goes through [`ProductController::find`], so a store failure reads as
    /// "does not exist".
    pub async fn exists(&self, name: &str) -> bool {
        debug!(name = %name, "Existence check");
        self.find(name).await.is_some()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use storekeep_db::{migrations, ConnectionProvider, DbConfig};
    use tempfile::TempDir;

    async fn test_controller() -> (TempDir, ProductController) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("test.db").display());
        let provider = ConnectionProvider::new(DbConfig::new(url, "tester", "secret"));
        migrations::run(&provider).await.unwrap();
        (dir, ProductController::new(ProductStore::new(provider)))
    }

    #[tokio::test]
    async fn test_add_find_exists() {
        let (_dir, controller) = test_controller().await;
        let product = Product::new("Widget", 3, 2.5);

        assert!(controller.add(&product).await);
        assert_eq!(controller.find("widget").await, Some(product));
        assert!(controller.exists("WIDGET").await);
        assert!(!controller.exists("Gadget").await);
    }

    #[tokio::test]
    async fn test_remove_then_absent() {
        let (_dir, controller) = test_controller().await;
        controller.add(&Product::new("Widget", 3, 2.5)).await;

        assert!(controller.remove("Widget").await);
        assert_eq!(controller.find("Widget").await, None);
    }

    #[tokio::test]
    async fn test_updates_on_missing_product_are_false() {
        let (_dir, controller) = test_controller().await;

        assert!(!controller.update_quantity("Gadget", 5).await);
        assert!(!controller.update_price("Gadget", 1.25).await);
    }

    #[tokio::test]
    async fn test_updates_apply() {
        let (_dir, controller) = test_controller().await;
        controller.add(&Product::new("Widget", 3, 2.5)).await;

        assert!(controller.update_quantity("Widget", 8).await);
        assert!(controller.update_price("Widget", 3.75).await);
        assert_eq!(
            controller.find("Widget").await,
            Some(Product::new("Widget", 8, 3.75))
        );
    }

    #[tokio::test]
    async fn test_inventory_empty_is_empty_vec() {
        let (_dir, controller) = test_controller().await;
        assert!(controller.inventory().await.is_empty());
    }

    #[tokio::test]
    async fn test_format_inventory_empty_message() {
        let (_dir, controller) = test_controller().await;
        assert_eq!(controller.format_inventory().await, "Inventory is empty.");
    }

    #[tokio::test]
    async fn test_format_inventory_lists_products() {
        let (_dir, controller) = test_controller().await;
        controller.add(&Product::new("Widget", 3, 2.5)).await;
        controller.add(&Product::new("Gadget", 1, 10.0)).await;

        let listing = controller.format_inventory().await;
        assert_eq!(
            listing,
            "Inventory:\nWidget (quantity: 3, price: 2.50)\nGadget (quantity: 1, price: 10.00)"
        );
    }

    #[tokio::test]
    async fn test_store_failure_reads_as_absent() {
        // No migrations: the propagating store ops fail, and this layer
        // converts the failure to None/false.
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("bare.db").display());
        let provider = ConnectionProvider::new(DbConfig::new(url, "tester", "secret"));
        let controller = ProductController::new(ProductStore::new(provider));

        assert_eq!(controller.find("Widget").await, None);
        assert!(!controller.exists("Widget").await);
        assert!(!controller.update_quantity("Widget", 1).await);
        assert!(!controller.update_price("Widget", 1.0).await);
    }
}
