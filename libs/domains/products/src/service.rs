//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductSearch, UpdateProduct};
use crate::pagination::Paginated;
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer validates input, turns missing records into
/// `ProductError::NotFound`, and delegates storage to the repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: u64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List all products in insertion order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Update an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: u64, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u64) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }

    /// Search products
    #[instrument(skip(self))]
    pub async fn search_products(&self, criteria: ProductSearch) -> ProductResult<Vec<Product>> {
        if let (Some(min), Some(max)) = (criteria.min_price, criteria.max_price) {
            if min > max {
                tracing::debug!(min_price = min, max_price = max, "Inverted price range");
            }
        }
        self.repository.search(criteria).await
    }

    /// One page of the full listing
    #[instrument(skip(self))]
    pub async fn paginate_products(
        &self,
        page: usize,
        limit: usize,
    ) -> ProductResult<Paginated<Product>> {
        self.repository.paginate(page, limit).await
    }

    /// Distinct categories
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ProductResult<Vec<String>> {
        self.repository.categories().await
    }

    /// Distinct tags
    #[instrument(skip(self))]
    pub async fn list_tags(&self) -> ProductResult<Vec<String>> {
        self.repository.tags().await
    }

    /// Count stored products
    #[instrument(skip(self))]
    pub async fn count_products(&self) -> ProductResult<usize> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn draft(price: f64) -> CreateProduct {
        CreateProduct {
            name: "Mug".to_string(),
            description: "Ceramic mug".to_string(),
            price,
            category: "Kitchen".to_string(),
            tags: vec![],
            in_stock: true,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_negative_price_without_touching_store() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let err = service.create_product(draft(-5.0)).await.unwrap_err();

        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_delegates_to_store() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|input| Ok(Product::new(1, input)));

        let service = ProductService::new(mock_repo);
        let product = service.create_product(draft(4.5)).await.unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.price, 4.5);
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.get_product(42).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(9))
            .returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        let err = service.delete_product(9).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(9)));
    }

    #[tokio::test]
    async fn test_delete_existing_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(1))
            .returning(|_| Ok(true));

        let service = ProductService::new(mock_repo);
        assert!(service.delete_product(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_rejects_negative_price() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let err = service
            .update_product(
                1,
                UpdateProduct {
                    price: Some(-1.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_paginate_passes_arguments_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_paginate()
            .with(eq(2), eq(5))
            .returning(|page, limit| Ok(Paginated::from_slice(&[], page, limit)));

        let service = ProductService::new(mock_repo);
        let page = service.paginate_products(2, 5).await.unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 5);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_count_reports_store_size() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_count().times(1).returning(|| Ok(6));

        let service = ProductService::new(mock_repo);
        assert_eq!(service.count_products().await.unwrap(), 6);
    }

    #[tokio::test]
    async fn test_store_failure_is_propagated() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(ProductError::Internal("product id space exhausted".to_string())));

        let service = ProductService::new(mock_repo);
        let err = service.create_product(draft(1.0)).await.unwrap_err();

        assert!(matches!(err, ProductError::Internal(_)));
    }
}
