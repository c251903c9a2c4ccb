//! Menu records: categories, allergens, items and per-day menus.
//!
//! # Invariants
//! - `MenuItem::rating` and `MenuItem::review_count` are derived from the
//!   review collection; callers never set them directly.
//! - `MenuDay::date` carries day granularity only, so "same calendar day"
//!   comparisons are plain equality.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::new_id;

/// Meal category of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Soup,
    Dessert,
}

/// Allergens declared on menu items and student profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Allergen {
    Gluten,
    Dairy,
    Eggs,
    Nuts,
    Soy,
    Fish,
    Shellfish,
}

/// One dish on a daily menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: MenuCategory,
    pub calories: u32,
    /// Mean of the item's review ratings, one decimal. Derived.
    pub rating: f64,
    /// Number of reviews backing `rating`. Derived.
    pub review_count: u32,
    pub allergens: Vec<Allergen>,
}

impl MenuItem {
    /// Creates an unrated item with a fresh id.
    pub fn new(name: impl Into<String>, category: MenuCategory, calories: u32) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            description: None,
            category,
            calories,
            rating: 0.0,
            review_count: 0,
            allergens: Vec::new(),
        }
    }
}

/// The ordered list of items served on one calendar day.
///
/// The store does not enforce one entry per day; when duplicates exist,
/// day lookups return the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDay {
    pub id: String,
    pub date: NaiveDate,
    pub items: Vec<MenuItem>,
}

impl MenuDay {
    pub fn new(date: NaiveDate, items: Vec<MenuItem>) -> Self {
        Self {
            id: new_id(),
            date,
            items,
        }
    }
}
