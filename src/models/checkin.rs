// SPDX-License-Identifier: MIT

//! Check-in and activity records from the challenge feed.

use serde::{Deserialize, Serialize};

/// A logged workout event tied to a participant and timestamp.
///
/// Check-ins are append-only upstream; the engine never mutates them.
/// Timestamps are kept as raw RFC 3339 strings because slightly malformed
/// values must still be salvageable by best-effort date truncation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIn {
    /// Check-in ID (upstream datastore key)
    pub id: String,
    /// Owning participant ID
    pub account_id: String,
    /// When the workout happened (RFC 3339, UTC)
    pub occurred_at: String,
    /// When the check-in was logged (RFC 3339, UTC)
    pub created_at: String,
    /// Explicit workout duration in minutes, when the feed provides one
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Free-text description; may carry category markers
    #[serde(default)]
    pub description: Option<String>,
    /// Free-text notes; may carry category markers
    #[serde(default)]
    pub notes: Option<String>,
    /// Primary hashtag field; may carry category markers
    #[serde(default)]
    pub hashtag: Option<String>,
    /// Additional tags; may carry category markers
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CheckIn {
    /// All free-text fields that can carry a category marker.
    pub fn marker_fields(&self) -> impl Iterator<Item = &str> {
        self.description
            .as_deref()
            .into_iter()
            .chain(self.notes.as_deref())
            .chain(self.hashtag.as_deref())
            .chain(self.tags.iter().map(String::as_str))
    }
}

/// A platform-reported sub-activity attached to a check-in.
///
/// Used to derive a check-in's duration when its own duration field is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubActivity {
    /// ID of the parent check-in
    pub workout_id: String,
    /// Duration in milliseconds as reported by the platform
    pub duration_millis: u64,
    /// Platform activity label (e.g. "weight_training")
    #[serde(default)]
    pub platform_activity: Option<String>,
}

/// A participant-self-reported activity, used as a fallback to still earn
/// the daily point on a day with no qualifying check-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualActivity {
    /// Owning participant ID
    pub member_id: String,
    /// Activity type key (e.g. "run", "crossfit")
    pub activity_type: String,
    /// Human-readable label shown in the feed
    #[serde(default)]
    pub activity_label: Option<String>,
    /// When the activity was reported (RFC 3339, UTC)
    pub created_at: String,
}
