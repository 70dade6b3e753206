// SPDX-License-Identifier: MIT

//! Participant, team, and membership records.

use serde::{Deserialize, Serialize};

/// A challenge participant. IDs are stable for the whole challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
}

/// A team with its expected roster size.
///
/// `expected_size` is the planned headcount, not the number of members who
/// actually registered; team ranking divides by it so partially staffed
/// teams are comparable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub expected_size: u32,
}

/// Participant-to-team assignment, supplied externally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    pub participant_id: String,
    pub team_id: String,
}
