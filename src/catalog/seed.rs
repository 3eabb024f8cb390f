//! Static seed data for the storefront catalog.
//!
//! The storefront has no product database; every session sees the same
//! fixed list, constructed once at startup.

use super::models::{Category, Product};

/// Builds the initial product catalog.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".into(),
            name: "Smart Ultra Watch v2".into(),
            category: Category::Electronics,
            price: 4500,
            description: "High-performance smartwatch with health tracking and OLED display.".into(),
            rating: 4.8,
            stock: 12,
            image: "https://picsum.photos/seed/watch/400/400".into(),
        },
        Product {
            id: "2".into(),
            name: "Pro Noise Cancelling Buds".into(),
            category: Category::Gadgets,
            price: 3200,
            description: "Superior audio quality with active noise cancellation and long battery life.".into(),
            rating: 4.5,
            stock: 25,
            image: "https://picsum.photos/seed/buds/400/400".into(),
        },
        Product {
            id: "3".into(),
            name: "Minimalist Leather Wallet".into(),
            category: Category::Fashion,
            price: 1500,
            description: "Genuine leather, slim profile wallet for modern lifestyles.".into(),
            rating: 4.2,
            stock: 50,
            image: "https://picsum.photos/seed/wallet/400/400".into(),
        },
        Product {
            id: "4".into(),
            name: "Smart RGB Desk Lamp".into(),
            category: Category::Home,
            price: 2800,
            description: "Voice controlled desk lamp with millions of colors and adjustable brightness.".into(),
            rating: 4.7,
            stock: 8,
            image: "https://picsum.photos/seed/lamp/400/400".into(),
        },
        Product {
            id: "5".into(),
            name: "Ergonomic Mechanical Keyboard".into(),
            category: Category::Electronics,
            price: 6500,
            description: "Tactile switches with customizable RGB backlighting and premium build.".into(),
            rating: 4.9,
            stock: 5,
            image: "https://picsum.photos/seed/keyboard/400/400".into(),
        },
        Product {
            id: "6".into(),
            name: "Oversized Cotton Hoodie".into(),
            category: Category::Fashion,
            price: 1800,
            description: "Premium heavyweight cotton hoodie for maximum comfort and style.".into(),
            rating: 4.4,
            stock: 30,
            image: "https://picsum.photos/seed/hoodie/400/400".into(),
        },
        Product {
            id: "7".into(),
            name: "Smart Fitness Ring".into(),
            category: Category::Health,
            price: 12000,
            description: "Discreet and accurate health monitoring ring for sleep and activity.".into(),
            rating: 4.6,
            stock: 10,
            image: "https://picsum.photos/seed/ring/400/400".into(),
        },
        Product {
            id: "8".into(),
            name: "Portable Espresso Maker".into(),
            category: Category::Gadgets,
            price: 4200,
            description: "Enjoy high-quality coffee anywhere with this manual portable maker.".into(),
            rating: 4.3,
            stock: 15,
            image: "https://picsum.photos/seed/coffee/400/400".into(),
        },
    ]
}
