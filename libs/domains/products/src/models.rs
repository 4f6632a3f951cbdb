use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product entity - a catalog record owned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier, strictly increasing, never reused
    pub id: u64,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Free-form category label (e.g. "Electronics")
    pub category: String,
    /// Labels in the order they were supplied
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the product is currently available
    pub in_stock: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

/// DTO for partially updating an existing product
///
/// Only the fields that are present are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub in_stock: Option<bool>,
}

/// Search criteria; every absent field matches everything
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductSearch {
    /// Case-insensitive substring of name or description
    pub query: Option<String>,
    /// Case-insensitive exact category
    pub category: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    /// Exact stock status
    pub in_stock: Option<bool>,
    /// Matches products sharing at least one tag (case-insensitive)
    pub tags: Option<Vec<String>>,
}

/// Pagination query parameters
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct PageQuery {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: usize,
    /// Items per page
    #[serde(default = "default_page_limit")]
    pub limit: usize,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_page_limit(),
        }
    }
}

fn default_in_stock() -> bool {
    true
}

fn default_page() -> usize {
    1
}

fn default_page_limit() -> usize {
    10
}

impl Product {
    /// Build a stored record from a draft; `created_at` is stamped here
    pub fn new(id: u64, input: CreateProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            tags: input.tags,
            in_stock: input.in_stock,
            created_at: Utc::now(),
        }
    }

    /// Apply the fields present in `update`; `id` and `created_at` never change
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
    }
}

impl ProductSearch {
    /// Text query; an empty string counts as absent
    pub fn text_query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    /// Category filter; an empty string counts as absent
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Tag filter, ignoring an empty list
    pub fn tag_filter(&self) -> Option<&[String]> {
        self.tags.as_deref().filter(|t| !t.is_empty())
    }

    /// True when no predicate is set
    pub fn is_empty(&self) -> bool {
        self.text_query().is_none()
            && self.category_filter().is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.in_stock.is_none()
            && self.tag_filter().is_none()
    }
}

/// Split a comma-separated tag string, trimming and dropping blanks.
///
/// ```
/// use domain_products::models::parse_tag_list;
///
/// assert_eq!(parse_tag_list(" audio, ,Wireless "), vec!["audio", "Wireless"]);
/// ```
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
