use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Category, Product, ProductInput};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product and return it with its generated id
    async fn create(&self, input: ProductInput) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// List every product
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// List products in a category
    async fn list_by_category(&self, category: Category) -> ProductResult<Vec<Product>>;

    /// Replace every mutable field of an existing product
    async fn update(&self, id: Uuid, input: ProductInput) -> ProductResult<Product>;

    /// Overwrite only the stock of an existing product
    async fn update_stock(&self, id: Uuid, stock: i32) -> ProductResult<Product>;

    /// Delete a product by ID, returning whether a row was removed
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;

    /// Check whether a product exists
    async fn exists(&self, id: Uuid) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let product = Product::new(input);
        products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        // HashMap iteration order is arbitrary, keep responses stable
        result.sort_by_key(|p| p.id);

        Ok(result)
    }

    async fn list_by_category(&self, category: Category) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect();
        result.sort_by_key(|p| p.id);

        Ok(result)
    }

    async fn update(&self, id: Uuid, input: ProductInput) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let product = products.get_mut(&id).ok_or(ProductError::NotFound(id))?;
        product.apply_input(input);
        let updated = product.clone();

        tracing::info!(product_id = %id, "Updated product");
        Ok(updated)
    }

    async fn update_stock(&self, id: Uuid, stock: i32) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let product = products.get_mut(&id).ok_or(ProductError::NotFound(id))?;
        product.stock = stock;
        let updated = product.clone();

        tracing::info!(product_id = %id, stock, "Updated product stock");
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists(&self, id: Uuid) -> ProductResult<bool> {
        let products = self.products.read().await;
        Ok(products.contains_key(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, category: Category) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: String::new(),
            price: 10.0,
            stock: 1,
            category,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let repo = InMemoryProductRepository::new();

        let product = repo
            .create(input("Monitor", Category::Electronica))
            .await
            .unwrap();
        assert_eq!(product.name, "Monitor");

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert_eq!(fetched.unwrap().id, product.id);
    }

    #[tokio::test]
    async fn test_list_by_category_filters() {
        let repo = InMemoryProductRepository::new();

        repo.create(input("Camiseta", Category::Ropa)).await.unwrap();
        repo.create(input("Balón", Category::Deportes)).await.unwrap();
        repo.create(input("Pantalón", Category::Ropa)).await.unwrap();

        let ropa = repo.list_by_category(Category::Ropa).await.unwrap();
        assert_eq!(ropa.len(), 2);
        assert!(ropa.iter().all(|p| p.category == Category::Ropa));

        let libros = repo.list_by_category(Category::Libros).await.unwrap();
        assert!(libros.is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let repo = InMemoryProductRepository::new();

        let result = repo
            .update(Uuid::now_v7(), input("Nada", Category::Otros))
            .await;
        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_stock_overwrites_only_stock() {
        let repo = InMemoryProductRepository::new();
        let product = repo
            .create(input("Libro", Category::Libros))
            .await
            .unwrap();

        let updated = repo.update_stock(product.id, 42).await.unwrap();
        assert_eq!(updated.stock, 42);
        assert_eq!(updated.name, "Libro");
        assert_eq!(updated.price, 10.0);
    }

    #[tokio::test]
    async fn test_update_stock_missing_product_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let id = Uuid::now_v7();

        let result = repo.update_stock(id, 5).await;
        assert!(matches!(result, Err(ProductError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_delete_reports_whether_row_existed() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(input("Silla", Category::Hogar)).await.unwrap();

        assert!(repo.delete(product.id).await.unwrap());
        assert!(!repo.delete(product.id).await.unwrap());
        assert!(!repo.exists(product.id).await.unwrap());
    }
}
