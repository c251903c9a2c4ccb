//! Menu history operations: per-day menus and the items inside them.
//!
//! # Invariants
//! - Day lookups and item lookups are first-match-wins over insertion order;
//!   same-day duplicates are a data-quality concern, not a rejected state.
//! - Item mutations touch exactly one day's item list.

use chrono::{Local, NaiveDate};

use super::{ChangeEvent, RepoResult, Repository};
use crate::model::menu::{MenuDay, MenuItem};

impl Repository {
    /// Menu for the local calendar day, if one is stored.
    pub fn get_today_menu(&self) -> Option<&MenuDay> {
        self.get_menu_for(Local::now().date_naive())
    }

    /// First stored menu day matching the given calendar date.
    pub fn get_menu_for(&self, date: NaiveDate) -> Option<&MenuDay> {
        self.menu_history.iter().find(|day| day.date == date)
    }

    /// Appends a menu day and persists the collection.
    ///
    /// Does not reject a second entry for the same date; lookups will keep
    /// returning the earlier one.
    pub fn add_menu_day(&mut self, day: MenuDay) -> RepoResult<()> {
        self.menu_history.push(day);
        let saved = self.save_menu_history();
        self.emit(ChangeEvent::MenuHistory);
        saved
    }

    /// Replaces the menu day with the same id; a no-op when unknown.
    pub fn update_menu_day(&mut self, day: MenuDay) -> RepoResult<()> {
        let Some(index) = self.menu_history.iter().position(|d| d.id == day.id) else {
            return Ok(());
        };
        self.menu_history[index] = day;
        let saved = self.save_menu_history();
        self.emit(ChangeEvent::MenuHistory);
        saved
    }

    /// Removes the menu day with the given id; a no-op when unknown.
    pub fn delete_menu_day(&mut self, day_id: &str) -> RepoResult<()> {
        let before = self.menu_history.len();
        self.menu_history.retain(|d| d.id != day_id);
        if self.menu_history.len() == before {
            return Ok(());
        }
        let saved = self.save_menu_history();
        self.emit(ChangeEvent::MenuHistory);
        saved
    }

    /// Replaces the first stored item with the same id, wherever it appears.
    ///
    /// Only the first day containing the id is touched; a no-op when no day
    /// contains it.
    pub fn update_menu_item(&mut self, item: MenuItem) -> RepoResult<()> {
        let Some((day_index, item_index)) = self.locate_item(&item.id) else {
            return Ok(());
        };
        self.menu_history[day_index].items[item_index] = item;
        let saved = self.save_menu_history();
        self.emit(ChangeEvent::MenuHistory);
        saved
    }

    /// Removes the first stored item with the given id; a no-op when absent.
    ///
    /// Reviews and favorites referencing the id are deliberately left in
    /// place (no cascade, see DESIGN.md).
    pub fn delete_menu_item(&mut self, item_id: &str) -> RepoResult<()> {
        let Some((day_index, item_index)) = self.locate_item(item_id) else {
            return Ok(());
        };
        self.menu_history[day_index].items.remove(item_index);
        let saved = self.save_menu_history();
        self.emit(ChangeEvent::MenuHistory);
        saved
    }

    /// Position of the first stored item with the given id, as
    /// (day index, item index within that day).
    pub(super) fn locate_item(&self, item_id: &str) -> Option<(usize, usize)> {
        self.menu_history.iter().enumerate().find_map(|(day_index, day)| {
            day.items
                .iter()
                .position(|i| i.id == item_id)
                .map(|item_index| (day_index, item_index))
        })
    }
}
