//! Bundled fixture rows.

use chrono::NaiveDate;

use crate::domain::ports::CatalogueReadError;
use crate::domain::{Item, Order, OrderStatus, Product, Restaurant, UserProfile};

use super::FixtureRows;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CatalogueReadError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CatalogueReadError::corrupt(format!("invalid fixture date {year}-{month}-{day}"))
    })
}

pub(super) fn rows() -> Result<FixtureRows, CatalogueReadError> {
    let users = vec![
        UserProfile::new(1, "john_doe", "john@example.com"),
        UserProfile::new(2, "jane_smith", "jane@example.com"),
        UserProfile::new(3, "alice_jones", "alice@example.com"),
    ];

    let products = vec![
        Product::new(1, "Laptop", "electronics", 999.99),
        Product::new(2, "Smartphone", "electronics", 599.99),
        Product::new(3, "Headphones", "electronics", 79.99),
        Product::new(4, "Rust in Action", "books", 39.99),
        Product::new(5, "Cookbook", "books", 24.5),
        Product::new(6, "T-Shirt", "clothing", 15.0),
    ];

    let restaurants = vec![
        Restaurant::new(1, "Pasta Palace", 1, "Italian", 4.5),
        Restaurant::new(2, "Sushi Central", 1, "Japanese", 4.8),
        Restaurant::new(3, "Burger Barn", 1, "American", 3.9),
        Restaurant::new(4, "Trattoria Nonna", 2, "Italian", 4.2),
        Restaurant::new(5, "Curry House", 2, "Indian", 4.6),
        Restaurant::new(6, "Taco Stand", 3, "Mexican", 3.5),
    ];

    let orders = vec![
        Order::new(1, 1, 1, OrderStatus::Pending),
        Order::new(2, 2, 2, OrderStatus::Shipped),
        Order::new(3, 1, 3, OrderStatus::Delivered),
        Order::new(4, 3, 1, OrderStatus::Cancelled),
        Order::new(5, 1, 1, OrderStatus::Shipped),
    ];

    let items = vec![
        Item::new(1, "Tent", date(2024, 1, 10)?),
        Item::new(2, "Sleeping Bag", date(2024, 3, 1)?),
        Item::new(3, "Camping Stove", date(2024, 6, 15)?),
        Item::new(4, "Lantern", date(2024, 9, 30)?),
    ];

    Ok(FixtureRows {
        users,
        products,
        restaurants,
        orders,
        items,
    })
}
