//! Student reviews of menu items.
//!
//! # Invariants
//! - `rating` is an integer in 1..=5; aggregation over these bounds keeps the
//!   derived item rating inside [1.0, 5.0].
//! - `student_name` and `menu_item_name` are snapshots taken at review time
//!   and are never re-synced after a rename.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::new_id;

/// One review of one menu item by one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub student_id: String,
    /// Snapshot of the student's name at review time.
    pub student_name: String,
    pub menu_item_id: String,
    /// Snapshot of the item's name at review time.
    pub menu_item_name: String,
    /// Integer stars, 1 through 5.
    pub rating: u8,
    pub comment: Option<String>,
    pub date: DateTime<Utc>,
    pub is_approved: bool,
    pub admin_response: Option<String>,
}

impl Review {
    /// Creates a pending (unapproved) review dated now.
    pub fn new(
        student_id: impl Into<String>,
        student_name: impl Into<String>,
        menu_item_id: impl Into<String>,
        menu_item_name: impl Into<String>,
        rating: u8,
    ) -> Self {
        Self {
            id: new_id(),
            student_id: student_id.into(),
            student_name: student_name.into(),
            menu_item_id: menu_item_id.into(),
            menu_item_name: menu_item_name.into(),
            rating,
            comment: None,
            date: Utc::now(),
            is_approved: false,
            admin_response: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_review_is_pending_approval() {
        let review = Review::new("s1", "Ada", "m1", "Soup", 4);
        assert!(!review.is_approved);
        assert!(review.comment.is_none());
        assert!(review.admin_response.is_none());
    }
}
