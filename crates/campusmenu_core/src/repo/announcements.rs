//! Announcement collection operations.
//!
//! The one collection with reversed insertion order: adds prepend, so the
//! in-memory list and the document are always newest-first.

use super::{ChangeEvent, RepoResult, Repository};
use crate::model::announcement::Announcement;

impl Repository {
    /// Prepends an announcement (newest-first) and persists the collection.
    pub fn add_announcement(&mut self, announcement: Announcement) -> RepoResult<()> {
        self.announcements.insert(0, announcement);
        let saved = self.save_announcements();
        self.emit(ChangeEvent::Announcements);
        saved
    }

    /// Replaces the announcement with the same id; a no-op when unknown.
    pub fn update_announcement(&mut self, announcement: Announcement) -> RepoResult<()> {
        let Some(index) = self
            .announcements
            .iter()
            .position(|a| a.id == announcement.id)
        else {
            return Ok(());
        };
        self.announcements[index] = announcement;
        let saved = self.save_announcements();
        self.emit(ChangeEvent::Announcements);
        saved
    }

    /// Removes the announcement with the given id; a no-op when unknown.
    pub fn delete_announcement(&mut self, announcement_id: &str) -> RepoResult<()> {
        let before = self.announcements.len();
        self.announcements.retain(|a| a.id != announcement_id);
        if self.announcements.len() == before {
            return Ok(());
        }
        let saved = self.save_announcements();
        self.emit(ChangeEvent::Announcements);
        saved
    }
}
