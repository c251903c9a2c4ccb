//! Review collection operations and derived-rating aggregation.
//!
//! # Invariants
//! - Adding or deleting a review recomputes the referenced item's rating and
//!   review count; plain updates do not (source behavior).
//! - When an item's last review disappears, its previous rating and count
//!   stay as they were. No reset to zero.

use log::info;

use super::{ChangeEvent, RepoResult, Repository};
use crate::model::review::Review;

impl Repository {
    /// Appends a review, persists the collection, and refreshes the rated
    /// item's aggregate.
    pub fn add_review(&mut self, review: Review) -> RepoResult<()> {
        let menu_item_id = review.menu_item_id.clone();
        self.reviews.push(review);
        let saved = self.save_reviews();
        self.emit(ChangeEvent::Reviews);
        // Recompute even when the save failed: the in-memory review set
        // changed, so the in-memory aggregate must follow it.
        let recomputed = self.recompute_item_rating(&menu_item_id);
        saved.and(recomputed)
    }

    /// Reviews referencing the given menu item, in collection order.
    ///
    /// Callers wanting newest-first sort themselves; the store does not.
    pub fn get_reviews_for(&self, menu_item_id: &str) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.menu_item_id == menu_item_id)
            .cloned()
            .collect()
    }

    /// Replaces the review with the same id; a no-op when unknown.
    ///
    /// Does not re-aggregate: approval flips and admin responses do not move
    /// ratings, and the source kept rating edits out of the aggregate too.
    pub fn update_review(&mut self, review: Review) -> RepoResult<()> {
        let Some(index) = self.reviews.iter().position(|r| r.id == review.id) else {
            return Ok(());
        };
        self.reviews[index] = review;
        let saved = self.save_reviews();
        self.emit(ChangeEvent::Reviews);
        saved
    }

    /// Removes the review with the given id and refreshes the affected item's
    /// aggregate; a no-op when unknown.
    pub fn delete_review(&mut self, review_id: &str) -> RepoResult<()> {
        let Some(index) = self.reviews.iter().position(|r| r.id == review_id) else {
            return Ok(());
        };
        let menu_item_id = self.reviews[index].menu_item_id.clone();
        self.reviews.remove(index);
        let saved = self.save_reviews();
        self.emit(ChangeEvent::Reviews);
        let recomputed = self.recompute_item_rating(&menu_item_id);
        saved.and(recomputed)
    }

    /// Rewrites the derived rating/review-count of the first stored item with
    /// the given id from the current review set, then persists the menu
    /// collection.
    ///
    /// An empty review set leaves the item untouched.
    fn recompute_item_rating(&mut self, menu_item_id: &str) -> RepoResult<()> {
        let ratings: Vec<u8> = self
            .reviews
            .iter()
            .filter(|r| r.menu_item_id == menu_item_id)
            .map(|r| r.rating)
            .collect();
        if ratings.is_empty() {
            return Ok(());
        }

        let rounded = mean_to_one_decimal(&ratings);
        let count = ratings.len() as u32;

        let Some((day_index, item_index)) = self.locate_item(menu_item_id) else {
            return Ok(());
        };
        let item = &mut self.menu_history[day_index].items[item_index];
        item.rating = rounded;
        item.review_count = count;
        info!(
            "event=rating_recompute module=repo status=ok item={menu_item_id} rating={rounded} reviews={count}"
        );
        let saved = self.save_menu_history();
        self.emit(ChangeEvent::MenuHistory);
        saved
    }
}

/// Arithmetic mean of integer star ratings, rounded half-away-from-zero to
/// one decimal place.
fn mean_to_one_decimal(ratings: &[u8]) -> f64 {
    let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    let mean = f64::from(sum) / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::mean_to_one_decimal;

    #[test]
    fn mean_rounds_half_away_from_zero() {
        assert_eq!(mean_to_one_decimal(&[4, 5, 3]), 4.0);
        assert_eq!(mean_to_one_decimal(&[4, 5]), 4.5);
        // 11/3 = 3.666..., rounds up to 3.7
        assert_eq!(mean_to_one_decimal(&[4, 4, 3]), 3.7);
        // 1.25 rounds to 1.3, not banker's 1.2
        assert_eq!(mean_to_one_decimal(&[1, 1, 1, 2]), 1.3);
    }

    #[test]
    fn mean_stays_inside_star_bounds() {
        assert_eq!(mean_to_one_decimal(&[1]), 1.0);
        assert_eq!(mean_to_one_decimal(&[5, 5, 5]), 5.0);
    }
}
