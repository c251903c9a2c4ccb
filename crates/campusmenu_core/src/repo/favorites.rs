//! Favorite menu items, owned by the logged-in student.
//!
//! The source carried two favorite mechanisms, a global flat list and a
//! per-student list. They are consolidated here into the per-student list as
//! the single ownership model; the students document carries the data and
//! there is no separate favorites document.

use log::warn;

use super::{documents, ChangeEvent, RepoResult, Repository};

impl Repository {
    /// Flips membership of the item id in the current student's favorites.
    ///
    /// Adds at the end when absent, removes when present; calling twice
    /// restores the original membership and the order of other entries.
    /// A logged no-op when no student session is active.
    pub fn toggle_favorite(&mut self, item_id: &str) -> RepoResult<()> {
        let Some(student) = self.current_student.as_mut() else {
            warn!("event=favorite_toggle module=repo status=skipped reason=logged_out item={item_id}");
            return Ok(());
        };

        if let Some(index) = student
            .favorite_menu_items
            .iter()
            .position(|id| id == item_id)
        {
            student.favorite_menu_items.remove(index);
        } else {
            student.favorite_menu_items.push(item_id.to_string());
        }

        let snapshot = student.clone();
        if let Some(index) = self.students.iter().position(|s| s.id == snapshot.id) {
            self.students[index] = snapshot.clone();
        }
        let saved = self.save_students().and_then(|()| {
            self.store
                .save(documents::CURRENT_STUDENT, &snapshot)
                .map_err(Into::into)
        });
        self.emit(ChangeEvent::Students);
        self.emit(ChangeEvent::Session);
        saved
    }

    /// Whether the item is in the current student's favorites. Always false
    /// when logged out.
    pub fn is_favorite(&self, item_id: &str) -> bool {
        self.current_student
            .as_ref()
            .is_some_and(|s| s.favorite_menu_items.iter().any(|id| id == item_id))
    }
}
