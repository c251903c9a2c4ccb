//! One-time seeding of empty collections from caller-supplied fixtures.
//!
//! Seed content (demo students, menu plans, announcements) is fixture data
//! owned by the embedding application, not by this crate; the repository only
//! knows how to apply a fixture to collections that are still empty.

use log::info;

use super::{RepoResult, Repository};
use crate::model::account::Student;
use crate::model::announcement::Announcement;
use crate::model::menu::MenuDay;

/// Fixture content applied once per collection, on first run.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub students: Vec<Student>,
    pub menu_days: Vec<MenuDay>,
    pub announcements: Vec<Announcement>,
}

/// Which parts of a seed were actually applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub students_seeded: bool,
    pub menu_seeded: bool,
    pub announcements_seeded: bool,
}

impl Repository {
    /// Applies each part of the seed whose target collection is empty.
    ///
    /// The check is per collection: an existing menu history does not block
    /// seeding of announcements, matching first-run behavior after partial
    /// data loss. Seeded announcements end up newest-first like any other
    /// add.
    pub fn seed_if_empty(&mut self, seed: SeedData) -> RepoResult<SeedReport> {
        let mut report = SeedReport::default();

        if self.students.is_empty() && !seed.students.is_empty() {
            for student in seed.students {
                self.add_student(student)?;
            }
            report.students_seeded = true;
        }

        if self.menu_history.is_empty() && !seed.menu_days.is_empty() {
            for day in seed.menu_days {
                self.add_menu_day(day)?;
            }
            report.menu_seeded = true;
        }

        if self.announcements.is_empty() && !seed.announcements.is_empty() {
            for announcement in seed.announcements {
                self.add_announcement(announcement)?;
            }
            report.announcements_seeded = true;
        }

        info!(
            "event=seed module=repo status=ok students={} menu={} announcements={}",
            report.students_seeded, report.menu_seeded, report.announcements_seeded
        );
        Ok(report)
    }
}
