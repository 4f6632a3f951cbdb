use async_trait::async_trait;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::CatalogConfig;
use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductSearch, UpdateProduct};
use crate::pagination::Paginated;
use crate::sample::sample_catalog;

/// Repository trait for Product persistence
///
/// Iteration order is insertion order for every listing operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product and assign it the next id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>>;

    /// All products
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Products matching every present criterion
    async fn search(&self, criteria: ProductSearch) -> ProductResult<Vec<Product>>;

    /// One page of the full listing
    async fn paginate(&self, page: usize, limit: usize) -> ProductResult<Paginated<Product>>;

    /// Apply a partial update; `NotFound` when the id is unknown
    async fn update(&self, id: u64, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by ID, returning whether it existed
    async fn delete(&self, id: u64) -> ProductResult<bool>;

    /// Number of stored products
    async fn count(&self) -> ProductResult<usize>;

    /// Distinct categories, sorted
    async fn categories(&self) -> ProductResult<Vec<String>>;

    /// Distinct tags, sorted
    async fn tags(&self) -> ProductResult<Vec<String>>;
}

#[derive(Debug)]
struct CatalogState {
    products: Vec<Product>,
    next_id: u64,
}

impl CatalogState {
    fn empty() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    fn seeded(drafts: Vec<CreateProduct>) -> Self {
        let products: Vec<Product> = (1..)
            .zip(drafts)
            .map(|(id, draft)| Product::new(id, draft))
            .collect();
        let next_id = products.len() as u64 + 1;
        Self { products, next_id }
    }

    /// Fails only once the id space is used up; ids are never recycled
    fn insert(&mut self, input: CreateProduct) -> ProductResult<Product> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| ProductError::Internal("product id space exhausted".to_string()))?;

        let product = Product::new(id, input);
        self.products.push(product.clone());
        Ok(product)
    }
}

/// In-memory implementation of ProductRepository
///
/// Clones share the same underlying catalog.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<CatalogState>>,
    max_page_limit: usize,
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProductRepository {
    pub const DEFAULT_MAX_PAGE_LIMIT: usize = 100;

    pub fn new() -> Self {
        Self::from_state(CatalogState::empty())
    }

    /// Store pre-seeded with [`sample_catalog`] (ids 1 through 6)
    pub fn with_sample_data() -> Self {
        Self::from_state(CatalogState::seeded(sample_catalog()))
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        let repo = if config.seed_sample_data {
            Self::with_sample_data()
        } else {
            Self::new()
        };
        repo.with_max_page_limit(config.max_page_limit)
    }

    /// Override the page size cap; values below 1 are raised to 1
    pub fn with_max_page_limit(mut self, max_page_limit: usize) -> Self {
        self.max_page_limit = max_page_limit.max(1);
        self
    }

    pub fn max_page_limit(&self) -> usize {
        self.max_page_limit
    }

    fn from_state(state: CatalogState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            max_page_limit: Self::DEFAULT_MAX_PAGE_LIMIT,
        }
    }
}

/// Successive narrowing passes: text, category, min price, max price, stock, tags
fn apply_search<'a>(products: &'a [Product], criteria: &ProductSearch) -> Vec<&'a Product> {
    let mut results: Vec<&Product> = products.iter().collect();

    if let Some(query) = criteria.text_query() {
        let query = query.to_lowercase();
        results.retain(|p| {
            p.name.to_lowercase().contains(&query) || p.description.to_lowercase().contains(&query)
        });
    }

    if let Some(category) = criteria.category_filter() {
        let category = category.to_lowercase();
        results.retain(|p| p.category.to_lowercase() == category);
    }

    if let Some(min_price) = criteria.min_price {
        results.retain(|p| p.price >= min_price);
    }

    if let Some(max_price) = criteria.max_price {
        results.retain(|p| p.price <= max_price);
    }

    if let Some(in_stock) = criteria.in_stock {
        results.retain(|p| p.in_stock == in_stock);
    }

    if let Some(tags) = criteria.tag_filter() {
        let wanted: HashSet<String> = tags.iter().map(|t| t.to_lowercase()).collect();
        results.retain(|p| p.tags.iter().any(|t| wanted.contains(&t.to_lowercase())));
    }

    results
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut state = self.state.write().await;
        let product = state.insert(input)?;

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>> {
        let state = self.state.read().await;
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let state = self.state.read().await;
        Ok(state.products.clone())
    }

    async fn search(&self, criteria: ProductSearch) -> ProductResult<Vec<Product>> {
        let state = self.state.read().await;
        Ok(apply_search(&state.products, &criteria)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn paginate(&self, page: usize, limit: usize) -> ProductResult<Paginated<Product>> {
        let limit = limit.clamp(1, self.max_page_limit);
        let state = self.state.read().await;
        Ok(Paginated::from_slice(&state.products, page, limit))
    }

    async fn update(&self, id: u64, input: UpdateProduct) -> ProductResult<Product> {
        let mut state = self.state.write().await;

        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProductError::NotFound(id))?;

        product.apply_update(input);

        tracing::info!(product_id = id, "Updated product");
        Ok(product.clone())
    }

    async fn delete(&self, id: u64) -> ProductResult<bool> {
        let mut state = self.state.write().await;

        let Some(index) = state.products.iter().position(|p| p.id == id) else {
            return Ok(false);
        };
        state.products.remove(index);

        tracing::info!(product_id = id, "Deleted product");
        Ok(true)
    }

    async fn count(&self) -> ProductResult<usize> {
        let state = self.state.read().await;
        Ok(state.products.len())
    }

    async fn categories(&self) -> ProductResult<Vec<String>> {
        let state = self.state.read().await;
        let categories: BTreeSet<&str> =
            state.products.iter().map(|p| p.category.as_str()).collect();
        Ok(categories.into_iter().map(str::to_string).collect())
    }

    async fn tags(&self) -> ProductResult<Vec<String>> {
        let state = self.state.read().await;
        let tags: BTreeSet<&str> = state
            .products
            .iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .collect();
        Ok(tags.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::assertions::{assert_sorted_unique, assert_strictly_increasing};

    fn draft(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            description: format!("{} description", name),
            price,
            category: "Test".to_string(),
            tags: vec![],
            in_stock: true,
        }
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryProductRepository::new();

        let product = repo.create(draft("Kettle", 25.0)).await.unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Kettle");

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap(), product);
    }

    #[tokio::test]
    async fn test_ids_strictly_increase_and_are_never_reused() {
        let repo = InMemoryProductRepository::new();
        let mut created = Vec::new();
        for i in 0..5 {
            created.push(repo.create(draft(&format!("p{}", i), 1.0)).await.unwrap());
        }
        assert_strictly_increasing(&ids(&created));

        assert!(repo.delete(5).await.unwrap());
        let next = repo.create(draft("after delete", 1.0)).await.unwrap();
        assert_eq!(next.id, 6);
    }

    #[tokio::test]
    async fn test_delete_keeps_order_of_remaining() {
        let repo = InMemoryProductRepository::with_sample_data();
        assert!(repo.delete(3).await.unwrap());

        let remaining = repo.list().await.unwrap();
        assert_eq!(ids(&remaining), vec![1, 2, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_missing_ids() {
        let repo = InMemoryProductRepository::with_sample_data();

        assert!(repo.get_by_id(99).await.unwrap().is_none());
        assert!(!repo.delete(99).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 6);

        let err = repo.update(99, UpdateProduct::default()).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_partial_update_preserves_other_fields() {
        let repo = InMemoryProductRepository::with_sample_data();
        let before = repo.get_by_id(2).await.unwrap().unwrap();

        let updated = repo
            .update(
                2,
                UpdateProduct {
                    in_stock: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(!updated.in_stock);
        assert_eq!(updated.name, before.name);
        assert_eq!(updated.price, before.price);
        assert_eq!(updated.tags, before.tags);
        assert_eq!(updated.created_at, before.created_at);
        assert_eq!(repo.get_by_id(2).await.unwrap().unwrap(), updated);
    }

    #[tokio::test]
    async fn test_search_by_category_is_case_insensitive() {
        let repo = InMemoryProductRepository::with_sample_data();

        let results = repo
            .search(ProductSearch {
                category: Some("electronics".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(ids(&results), vec![1, 4, 6]);
    }

    #[tokio::test]
    async fn test_search_price_bounds_are_inclusive() {
        let repo = InMemoryProductRepository::with_sample_data();

        let results = repo
            .search(ProductSearch {
                min_price: Some(50.0),
                max_price: Some(100.0),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ids(&results), vec![2, 4]);

        let exact = repo
            .search(ProductSearch {
                min_price: Some(79.99),
                max_price: Some(79.99),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ids(&exact), vec![4]);
    }

    #[tokio::test]
    async fn test_search_text_matches_name_or_description() {
        let repo = InMemoryProductRepository::with_sample_data();

        let by_name = repo
            .search(ProductSearch {
                query: Some("WATCH".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ids(&by_name), vec![6]);

        let by_description = repo
            .search(ProductSearch {
                query: Some("ergonomic".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ids(&by_description), vec![3, 5]);
    }

    #[tokio::test]
    async fn test_search_tags_case_insensitive_intersection() {
        let repo = InMemoryProductRepository::with_sample_data();

        let results = repo
            .search(ProductSearch {
                tags: Some(vec!["AUDIO".to_string(), "Mesh".to_string()]),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(ids(&results), vec![1, 4, 5]);
    }

    #[tokio::test]
    async fn test_search_combines_predicates() {
        let repo = InMemoryProductRepository::with_sample_data();
        repo.update(
            4,
            UpdateProduct {
                in_stock: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let results = repo
            .search(ProductSearch {
                category: Some("Electronics".to_string()),
                in_stock: Some(true),
                max_price: Some(200.0),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(ids(&results), vec![1]);
    }

    #[tokio::test]
    async fn test_empty_criteria_match_everything() {
        let repo = InMemoryProductRepository::with_sample_data();

        let results = repo
            .search(ProductSearch {
                query: Some(String::new()),
                category: Some(String::new()),
                tags: Some(vec![]),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(results, repo.list().await.unwrap());
    }

    #[tokio::test]
    async fn test_whitespace_query_and_category_are_literal_filters() {
        let repo = InMemoryProductRepository::with_sample_data();

        let blank_query = repo
            .search(ProductSearch {
                query: Some("  ".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(blank_query.is_empty());

        let blank_category = repo
            .search(ProductSearch {
                category: Some(" ".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(blank_category.is_empty());
    }

    #[tokio::test]
    async fn test_tags_keep_stored_case_but_search_ignores_it() {
        let repo = InMemoryProductRepository::new();
        let mut input = draft("Radio", 20.0);
        input.tags = vec!["Audio".to_string(), "audio".to_string(), "audio".to_string()];
        let radio = repo.create(input).await.unwrap();

        assert_eq!(repo.tags().await.unwrap(), vec!["Audio", "audio"]);

        let results = repo
            .search(ProductSearch {
                tags: Some(vec!["AUDIO".to_string()]),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ids(&results), vec![radio.id]);
    }

    #[tokio::test]
    async fn test_create_fails_when_id_space_is_exhausted() {
        let repo = InMemoryProductRepository::from_state(CatalogState {
            products: Vec::new(),
            next_id: u64::MAX,
        });

        let err = repo.create(draft("Last", 1.0)).await.unwrap_err();
        assert!(matches!(err, ProductError::Internal(_)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seeded_store_continues_after_sample_ids() {
        let repo = InMemoryProductRepository::with_sample_data();
        assert_eq!(ids(&repo.list().await.unwrap()), vec![1, 2, 3, 4, 5, 6]);

        let next = repo.create(draft("Seventh", 1.0)).await.unwrap();
        assert_eq!(next.id, 7);
    }

    #[tokio::test]
    async fn test_inverted_price_range_is_empty() {
        let repo = InMemoryProductRepository::with_sample_data();

        let results = repo
            .search(ProductSearch {
                min_price: Some(100.0),
                max_price: Some(50.0),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_paginate_sample_catalog() {
        let repo = InMemoryProductRepository::with_sample_data();

        let first = repo.paginate(1, 2).await.unwrap();
        assert_eq!(ids(&first.items), vec![1, 2]);
        assert_eq!(first.total, 6);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next);
        assert!(!first.has_prev);

        let last = repo.paginate(3, 2).await.unwrap();
        assert_eq!(ids(&last.items), vec![5, 6]);
        assert!(!last.has_next);
        assert!(last.has_prev);

        let beyond = repo.paginate(4, 2).await.unwrap();
        assert!(beyond.items.is_empty());
        assert!(!beyond.has_next);
        assert!(beyond.has_prev);
    }

    #[tokio::test]
    async fn test_paginate_clamps_limit() {
        let repo = InMemoryProductRepository::with_sample_data().with_max_page_limit(4);

        let zero = repo.paginate(1, 0).await.unwrap();
        assert_eq!(zero.limit, 1);
        assert_eq!(zero.items.len(), 1);
        assert_eq!(zero.total_pages, 6);

        let huge = repo.paginate(1, 1000).await.unwrap();
        assert_eq!(huge.limit, 4);
        assert_eq!(huge.items.len(), 4);
        assert_eq!(huge.total_pages, 2);
    }

    #[tokio::test]
    async fn test_categories_and_tags_sorted_and_distinct() {
        let repo = InMemoryProductRepository::with_sample_data();

        let categories = repo.categories().await.unwrap();
        assert_eq!(
            categories,
            vec!["Accessories", "Appliances", "Electronics", "Furniture"]
        );

        let tags = repo.tags().await.unwrap();
        assert_sorted_unique(&tags);
        assert!(tags.contains(&"audio".to_string()));
        assert_eq!(tags.iter().filter(|t| *t == "ergonomic").count(), 1);
    }

    #[tokio::test]
    async fn test_from_config_respects_seed_flag() {
        let empty = InMemoryProductRepository::from_config(&CatalogConfig {
            seed_sample_data: false,
            max_page_limit: 10,
        });
        assert_eq!(empty.count().await.unwrap(), 0);
        assert_eq!(empty.max_page_limit(), 10);

        let seeded = InMemoryProductRepository::from_config(&CatalogConfig::default());
        assert_eq!(seeded.count().await.unwrap(), 6);
        assert_eq!(
            seeded.max_page_limit(),
            InMemoryProductRepository::DEFAULT_MAX_PAGE_LIMIT
        );
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = InMemoryProductRepository::new();
        let other = repo.clone();

        other.create(draft("Shared", 3.0)).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
