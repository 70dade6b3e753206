// SPDX-License-Identifier: MIT

//! The immutable input snapshot handed to the scoring engine.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{
    CheckIn, CollectiveWorkout, ManualActivity, Membership, Participant, SubActivity, Team,
};

/// Everything one scoring run needs, batch-loaded by the caller.
///
/// The engine treats this as read-only and performs no I/O of its own; the
/// surrounding app loads the flat records once per request and hands them
/// over as a plain snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ChallengeSnapshot {
    #[serde(default)]
    #[validate(length(max = 100_000, message = "too many check-ins"))]
    pub check_ins: Vec<CheckIn>,
    #[serde(default)]
    pub sub_activities: Vec<SubActivity>,
    #[serde(default)]
    pub manual_activities: Vec<ManualActivity>,
    #[serde(default)]
    pub collective_workouts: Vec<CollectiveWorkout>,
    #[serde(default)]
    #[validate(length(max = 10_000, message = "too many participants"))]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub memberships: Vec<Membership>,
}
