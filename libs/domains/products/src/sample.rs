//! Demo catalog seeded at startup

use crate::models::CreateProduct;

fn draft(name: &str, description: &str, price: f64, category: &str, tags: &[&str]) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        in_stock: true,
    }
}

/// The six demo products, in seeding order
pub fn sample_catalog() -> Vec<CreateProduct> {
    vec![
        draft(
            "Wireless Headphones",
            "High-quality wireless headphones with noise cancellation",
            199.99,
            "Electronics",
            &["audio", "wireless", "premium"],
        ),
        draft(
            "Coffee Maker",
            "Programmable coffee maker with built-in grinder",
            89.99,
            "Appliances",
            &["kitchen", "coffee", "automatic"],
        ),
        draft(
            "Laptop Stand",
            "Adjustable aluminum laptop stand for ergonomic work",
            45.99,
            "Accessories",
            &["ergonomic", "aluminum", "adjustable"],
        ),
        draft(
            "Bluetooth Speaker",
            "Portable waterproof Bluetooth speaker with 12-hour battery",
            79.99,
            "Electronics",
            &["audio", "bluetooth", "portable", "waterproof"],
        ),
        draft(
            "Office Chair",
            "Ergonomic office chair with lumbar support and mesh back",
            299.99,
            "Furniture",
            &["ergonomic", "office", "lumbar", "mesh"],
        ),
        draft(
            "Smart Watch",
            "Fitness tracking smart watch with heart rate monitor",
            249.99,
            "Electronics",
            &["fitness", "smart", "health", "wearable"],
        ),
    ]
}
