// SPDX-License-Identifier: MIT

//! Collective workout ("coletivo") records entered through the admin flow.

use serde::{Deserialize, Serialize};

/// Approval state of a collective workout.
///
/// Records are created pending and moved to approved/rejected by an admin
/// action outside the engine. Only approved records feed team scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectiveStatus {
    Pending,
    Approved,
    Rejected,
}

/// A shared workout between two teams with a point pool to distribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectiveWorkout {
    /// Workout ID (upstream datastore key)
    pub id: String,
    /// Title shown in the feed
    #[serde(default)]
    pub title: Option<String>,
    /// First team name
    pub team1: String,
    /// Second team name
    pub team2: String,
    /// Point pool assigned to team1 (pool total = team1_points + team2_points)
    pub team1_points: i64,
    /// Point pool assigned to team2
    pub team2_points: i64,
    /// Participant IDs from team1
    #[serde(default)]
    pub team1_participants: Vec<String>,
    /// Participant IDs from team2
    #[serde(default)]
    pub team2_participants: Vec<String>,
    /// Approval state
    pub status: CollectiveStatus,
    /// When the record was created (RFC 3339, UTC)
    pub created_at: String,
    /// Admin who approved/rejected, if any
    #[serde(default)]
    pub approved_by: Option<String>,
    /// When the record was approved/rejected (RFC 3339, UTC)
    #[serde(default)]
    pub approved_at: Option<String>,
}

impl CollectiveWorkout {
    /// Total point pool across both teams.
    pub fn total_points(&self) -> i64 {
        self.team1_points + self.team2_points
    }

    /// Participant count across both teams.
    pub fn total_participants(&self) -> usize {
        self.team1_participants.len() + self.team2_participants.len()
    }
}
