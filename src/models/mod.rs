// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod checkin;
pub mod collective;
pub mod outcome;
pub mod snapshot;
pub mod team;

pub use checkin::{CheckIn, ManualActivity, SubActivity};
pub use collective::{CollectiveStatus, CollectiveWorkout};
pub use outcome::{
    DailyOutcome, DayCategory, DistributionFailure, ParticipantAudit, RankedParticipant,
    RankedTeam, ScoringReport, SkipReason, SkippedCheckIn,
};
pub use snapshot::ChallengeSnapshot;
pub use team::{Membership, Participant, Team};
