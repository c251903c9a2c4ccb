//! Domain model for the campus dining data core.
//!
//! # Responsibility
//! - Define the canonical records mirrored 1:1 to persisted JSON documents.
//! - Keep the wire shape stable: camelCase fields, SCREAMING_SNAKE_CASE enum
//!   values, ISO-8601 dates.
//!
//! # Invariants
//! - Every record is identified by an opaque string id minted at creation.
//! - Cross-collection references are by id string only; no shared ownership.

use uuid::Uuid;

pub mod account;
pub mod announcement;
pub mod menu;
pub mod preferences;
pub mod review;

/// Mints a fresh opaque identifier for a new record.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
