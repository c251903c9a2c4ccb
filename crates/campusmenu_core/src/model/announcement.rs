//! Cafeteria announcements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::new_id;

/// Kind of announcement, used by the presentation layer for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnouncementType {
    Maintenance,
    Event,
    MenuChange,
    General,
}

/// A dated notice shown to all users. The collection keeps newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: AnnouncementType,
    pub date: DateTime<Utc>,
}

impl Announcement {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        kind: AnnouncementType,
    ) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            content: content.into(),
            kind,
            date: Utc::now(),
        }
    }
}
