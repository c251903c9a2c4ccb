//! Campus dining repository: the single owner of all persisted collections.
//!
//! # Responsibility
//! - Hold every collection in memory, mirrored 1:1 to JSON documents.
//! - Be the sole mutation path; every mutator re-saves the whole affected
//!   collection before returning and then notifies subscribers.
//!
//! # Invariants
//! - Mutations apply to memory first; a failed save is returned to the caller
//!   while the in-memory effect stands, so divergence is visible, not silent.
//! - Reads never touch disk after `open`.
//! - `&mut self` on every mutator preserves the single-caller model.

use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use crate::model::account::{Student, User};
use crate::model::announcement::Announcement;
use crate::model::menu::MenuDay;
use crate::model::preferences::AppPreferences;
use crate::model::review::Review;
use crate::store::{DocumentStore, StoreError};

mod announcements;
mod auth;
mod favorites;
mod menu;
mod preferences;
mod reviews;
mod seed;
mod students;

pub use seed::{SeedData, SeedReport};

/// Persisted document names, one per collection or singleton value.
pub mod documents {
    pub const STUDENTS: &str = "students.json";
    pub const MENU_HISTORY: &str = "menu_history.json";
    pub const REVIEWS: &str = "reviews.json";
    pub const ANNOUNCEMENTS: &str = "announcements.json";
    pub const PREFERENCES: &str = "preferences.json";
    pub const CURRENT_USER: &str = "current_user.json";
    pub const CURRENT_STUDENT: &str = "current_student.json";
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository-level error surface.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Which part of the repository changed, delivered to subscribers after
/// every in-memory mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    Students,
    MenuHistory,
    Reviews,
    Announcements,
    Preferences,
    Session,
}

/// The data layer behind the campus dining app.
///
/// Built explicitly and injected by the application root; there is no
/// process-wide singleton.
pub struct Repository {
    store: DocumentStore,
    students: Vec<Student>,
    menu_history: Vec<MenuDay>,
    reviews: Vec<Review>,
    announcements: Vec<Announcement>,
    preferences: AppPreferences,
    current_user: Option<User>,
    current_student: Option<Student>,
    listeners: Vec<Box<dyn Fn(ChangeEvent)>>,
}

impl Repository {
    /// Opens the repository over a storage directory and loads every
    /// collection.
    ///
    /// Missing documents become empty/default values; unreadable or corrupt
    /// documents degrade the same way, with a logged warning (the documented
    /// startup policy). The session is restored from whatever shadow
    /// documents survive on disk.
    pub fn open(dir: impl AsRef<Path>) -> RepoResult<Self> {
        let store = DocumentStore::open(dir)?;

        let students: Vec<Student> = store.load_or_default(documents::STUDENTS);
        let menu_history: Vec<MenuDay> = store.load_or_default(documents::MENU_HISTORY);
        let reviews: Vec<Review> = store.load_or_default(documents::REVIEWS);
        let announcements: Vec<Announcement> = store.load_or_default(documents::ANNOUNCEMENTS);
        let preferences: AppPreferences = store.load_or_default(documents::PREFERENCES);
        let current_user: Option<User> = store.load_or_default(documents::CURRENT_USER);
        let current_student: Option<Student> = store.load_or_default(documents::CURRENT_STUDENT);

        info!(
            "event=repo_open module=repo status=ok students={} menu_days={} reviews={} announcements={} session={}",
            students.len(),
            menu_history.len(),
            reviews.len(),
            announcements.len(),
            if current_user.is_some() { "restored" } else { "logged_out" }
        );

        Ok(Self {
            store,
            students,
            menu_history,
            reviews,
            announcements,
            preferences,
            current_user,
            current_student,
            listeners: Vec::new(),
        })
    }

    /// Registers a change listener, called after every in-memory mutation.
    ///
    /// Publish-on-every-change: subscribers get the touched collection, not a
    /// fine-grained diff, and re-read through the accessors.
    pub fn subscribe(&mut self, listener: impl Fn(ChangeEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&self, event: ChangeEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    /// All registered students, insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Every stored menu day, insertion order.
    pub fn menu_history(&self) -> &[MenuDay] {
        &self.menu_history
    }

    /// Every review, insertion order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Announcements, newest first.
    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    /// Current application preferences.
    pub fn preferences(&self) -> &AppPreferences {
        &self.preferences
    }

    /// The logged-in user projection, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// The logged-in student record, if a student session is active.
    pub fn current_student(&self) -> Option<&Student> {
        self.current_student.as_ref()
    }

    fn save_students(&self) -> RepoResult<()> {
        self.store.save(documents::STUDENTS, &self.students)?;
        Ok(())
    }

    fn save_menu_history(&self) -> RepoResult<()> {
        self.store.save(documents::MENU_HISTORY, &self.menu_history)?;
        Ok(())
    }

    fn save_reviews(&self) -> RepoResult<()> {
        self.store.save(documents::REVIEWS, &self.reviews)?;
        Ok(())
    }

    fn save_announcements(&self) -> RepoResult<()> {
        self.store.save(documents::ANNOUNCEMENTS, &self.announcements)?;
        Ok(())
    }

    fn save_preferences(&self) -> RepoResult<()> {
        self.store.save(documents::PREFERENCES, &self.preferences)?;
        Ok(())
    }
}
