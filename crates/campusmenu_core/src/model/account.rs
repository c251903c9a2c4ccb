//! Student records and the transient session user projection.
//!
//! # Invariants
//! - `Student` is the system of record; `User` is derived at login and lives
//!   only in the session (plus its shadow document).
//! - Email is the login identifier but is not a unique index; lookups return
//!   the first match.

use serde::{Deserialize, Serialize};

use super::menu::Allergen;
use super::new_id;

/// Role attached to a logged-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Student,
}

/// A registered student account.
///
/// The password is stored and compared as a plaintext string, preserving the
/// source system's observable behavior. Known weakness, see DESIGN.md.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub student_number: String,
    pub allergens: Vec<Allergen>,
    /// Favorite menu item ids, in the order they were added. This list is the
    /// single ownership model for favorites.
    pub favorite_menu_items: Vec<String>,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        student_number: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            student_number: student_number.into(),
            allergens: Vec::new(),
            favorite_menu_items: Vec::new(),
        }
    }
}

/// Session projection of whoever is logged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    /// Builds the student-role projection for a login session.
    pub fn from_student(student: &Student) -> Self {
        Self {
            id: student.id.clone(),
            full_name: student.name.clone(),
            email: student.email.clone(),
            role: UserRole::Student,
        }
    }
}
