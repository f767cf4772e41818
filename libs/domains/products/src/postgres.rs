use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Category, Product, ProductInput},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn internal(e: sea_orm::DbErr) -> ProductError {
    ProductError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = Product::new(input).into();

        let model = self.base.insert(active_model).await.map_err(internal)?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await.map_err(internal)?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await
            .map_err(internal)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn list_by_category(&self, category: Category) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Category.eq(category))
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await
            .map_err(internal)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: Uuid, input: ProductInput) -> ProductResult<Product> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(ProductError::NotFound(id))?;

        let mut product: Product = model.into();
        product.apply_input(input);

        let updated = self
            .base
            .update(entity::ActiveModel::from(product))
            .await
            .map_err(internal)?;

        tracing::info!(product_id = %id, "Updated product");
        Ok(updated.into())
    }

    async fn update_stock(&self, id: Uuid, stock: i32) -> ProductResult<Product> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(ProductError::NotFound(id))?;

        let mut product: Product = model.into();
        product.stock = stock;

        let updated = self
            .base
            .update(entity::ActiveModel::from(product))
            .await
            .map_err(internal)?;

        tracing::info!(product_id = %id, stock, "Updated product stock");
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await.map_err(internal)?;

        if rows_affected > 0 {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists(&self, id: Uuid) -> ProductResult<bool> {
        let model = self.base.find_by_id(id).await.map_err(internal)?;
        Ok(model.is_some())
    }
}
