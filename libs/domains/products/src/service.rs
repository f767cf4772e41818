use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Category, Product, ProductInput};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
///
/// Input validation happens at the HTTP boundary (`ValidatedJson`), so the
/// service is a thin orchestration layer over the repository.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        self.repository.create(input).await
    }

    /// List every product
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List products in a category; empty when none match
    pub async fn list_by_category(&self, category: Category) -> ProductResult<Vec<Product>> {
        self.repository.list_by_category(category).await
    }

    /// Replace every mutable field of a product (PUT semantics)
    pub async fn update_product(&self, id: Uuid, input: ProductInput) -> ProductResult<Product> {
        self.repository.update(id, input).await
    }

    /// Overwrite only the stock of a product
    pub async fn update_stock(&self, id: Uuid, stock: i32) -> ProductResult<Product> {
        self.repository.update_stock(id, stock).await
    }

    /// Delete a product
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        // Existence check first so a missing id is a 404, not a silent no-op
        if !self.repository.exists(id).await? {
            return Err(ProductError::NotFound(id));
        }

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}
