// SPDX-License-Identifier: MIT

//! Derived scoring outcomes and the per-participant audit trail.
//!
//! None of these types are persisted; they are computed fresh from each
//! snapshot and handed back to the caller (the UI drills into the audit
//! trail to show which days counted and which check-ins were ignored).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a day earned its point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    /// At least one qualifying check-in carried a collective marker
    Collective,
    /// Qualifying check-in(s) with no collective marker
    Individual,
    /// No qualifying check-in, but a manual activity was reported
    ManualFallback,
}

/// The scored result for one calendar day of one participant.
///
/// Days with zero qualifying entries produce no outcome at all; they are
/// omitted rather than stored as zero records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyOutcome {
    pub date: NaiveDate,
    pub category: DayCategory,
    pub points: i64,
    /// Check-ins that contributed to the decision (empty for manual fallback)
    pub check_in_ids: Vec<String>,
}

/// Why a check-in was excluded from scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Workout date and log date disagree (anti-backdating rule)
    Backdated,
    /// Neither timestamp parse nor string truncation yielded a date
    UnparseableTimestamp,
    /// Effective duration below the qualifying threshold
    BelowMinimumDuration,
}

/// A check-in that was ignored, with the reason, for the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedCheckIn {
    pub check_in_id: String,
    pub reason: SkipReason,
}

/// Per-participant breakdown backing the audit drill-down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantAudit {
    pub participant_id: String,
    /// Days that counted, in date order
    pub days: Vec<DailyOutcome>,
    /// Check-ins that were ignored, and why
    pub skipped: Vec<SkippedCheckIn>,
    pub total: i64,
}

/// One row of the individual ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedParticipant {
    pub participant_id: String,
    pub name: String,
    pub total_score: i64,
    pub rank: u32,
}

/// One row of the team ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedTeam {
    pub team_id: String,
    pub name: String,
    /// Member totals plus approved collective shares, unadjusted
    pub raw_score: i64,
    /// Raw score divided by the team's expected roster size
    pub adjusted_score: f64,
    pub rank: u32,
}

/// A collective workout that failed distribution validation.
///
/// Surfaced per workout instead of failing the whole computation; the
/// workout simply does not contribute to team totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionFailure {
    pub workout_id: String,
    pub error: String,
}

/// Full output of one scoring run over a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringReport {
    /// Label of the rule set that produced this report
    pub rule_version: String,
    pub participants: Vec<RankedParticipant>,
    pub teams: Vec<RankedTeam>,
    /// True when any pairwise tie exists among the top 3 participants
    pub has_podium_tie: bool,
    /// True when any pairwise tie exists among the top 3 teams
    pub has_team_podium_tie: bool,
    pub audit: BTreeMap<String, ParticipantAudit>,
    pub distribution_errors: Vec<DistributionFailure>,
}
