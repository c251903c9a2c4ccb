//! Application preferences, replaced and persisted as one value.

use super::{ChangeEvent, RepoResult, Repository};
use crate::model::preferences::AppPreferences;

impl Repository {
    /// Replaces the whole preferences value and persists it.
    pub fn update_preferences(&mut self, prefs: AppPreferences) -> RepoResult<()> {
        self.preferences = prefs;
        let saved = self.save_preferences();
        self.emit(ChangeEvent::Preferences);
        saved
    }
}
