//! Core data layer for the campus dining app.
//! This crate is the single source of truth for persisted state and the
//! business invariants over it (derived ratings, session shadow records,
//! favorite consistency).

pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::account::{Student, User, UserRole};
pub use model::announcement::{Announcement, AnnouncementType};
pub use model::menu::{Allergen, MenuCategory, MenuDay, MenuItem};
pub use model::preferences::{AppPreferences, NotificationSettings};
pub use model::review::Review;
pub use repo::{ChangeEvent, RepoError, RepoResult, Repository, SeedData, SeedReport};
pub use store::{DocumentStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
