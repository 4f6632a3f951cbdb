//! Shared test utilities for domain testing
//!
//! - `TestDataBuilder`: Deterministic test data generation
//! - `assertions`: Custom assertion helpers
//!
//! # Usage
//!
//! ```rust
//! use test_utils::TestDataBuilder;
//!
//! let builder = TestDataBuilder::from_test_name("my_test");
//! let name = builder.name("product", "main");
//! let body = builder.product_json("main");
//! assert_eq!(body["name"], name.as_str());
//! ```

use serde_json::{Value, json};

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by deriving every value from a seed.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test data.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_resource");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a unique name for testing
    ///
    /// # Arguments
    ///
    /// * `prefix` - The type of resource (e.g., "product")
    /// * `suffix` - A unique identifier within the test (e.g., "main", "backup")
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(12345);
    /// assert_eq!(builder.name("product", "main"), "test-product-12345-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Deterministic non-negative price with two decimals, below 1000
    pub fn price(&self) -> f64 {
        (self.seed % 100_000) as f64 / 100.0
    }

    /// JSON body for creating a product
    pub fn product_json(&self, suffix: &str) -> Value {
        json!({
            "name": self.name("product", suffix),
            "description": format!("Generated product {}", suffix),
            "price": self.price(),
            "category": "Testing",
            "tags": ["generated", suffix],
        })
    }
}

/// Test assertion helpers
pub mod assertions {
    use std::fmt::Debug;

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that each element is greater than the one before it
    pub fn assert_strictly_increasing<T: PartialOrd + Debug>(values: &[T]) {
        for pair in values.windows(2) {
            assert!(
                pair[0] < pair[1],
                "expected strictly increasing values, found {:?} then {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    /// Assert that values are sorted ascending with no duplicates
    pub fn assert_sorted_unique<T: Ord + Debug>(values: &[T]) {
        assert_strictly_increasing(values);
    }
}
