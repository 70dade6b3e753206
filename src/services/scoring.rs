// SPDX-License-Identifier: MIT

//! Scoring engine orchestration.
//!
//! Runs the full pipeline over one immutable snapshot:
//! 1. Group each participant's check-ins by effective day
//! 2. Evaluate each day against the active rule set
//! 3. Total individual scores and build the audit trail
//! 4. Distribute approved collective workout pools to teams
//! 5. Total and per-capita-adjust team scores
//! 6. Assign competition ranks and podium-tie flags
//!
//! Pure and deterministic for a fixed snapshot and rule set; all I/O stays
//! with the caller.

use std::collections::{BTreeMap, HashMap};

use crate::models::{
    ChallengeSnapshot, CollectiveStatus, DistributionFailure, ParticipantAudit,
    RankedParticipant, RankedTeam, ScoringReport,
};
use crate::services::aggregator::group_by_day;
use crate::services::distribution::distribute;
use crate::services::rank::{assign_ranks, has_top_tie, Rankable};
use crate::services::rules::{DurationIndex, RuleSet};
use crate::services::totals::{individual_total, team_totals};
use crate::time_utils::effective_date;

/// The headless scoring engine. Construct once with the active rule set,
/// then feed it snapshots.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    rules: RuleSet,
}

impl Rankable for RankedParticipant {
    fn score_key(&self) -> f64 {
        self.total_score as f64
    }
    fn sort_label(&self) -> (&str, &str) {
        (&self.name, &self.participant_id)
    }
    fn set_rank(&mut self, rank: u32) {
        self.rank = rank;
    }
}

impl Rankable for RankedTeam {
    fn score_key(&self) -> f64 {
        self.adjusted_score
    }
    fn sort_label(&self) -> (&str, &str) {
        (&self.name, &self.team_id)
    }
    fn set_rank(&mut self, rank: u32) {
        self.rank = rank;
    }
}

impl ScoringEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Score a snapshot and rank every participant and team in it.
    pub fn compute(&self, snapshot: &ChallengeSnapshot) -> ScoringReport {
        let duration_index = DurationIndex::build(&snapshot.sub_activities);
        let manual_days = index_manual_days(snapshot);

        // Per-participant day evaluation and audit trail
        let mut audit: BTreeMap<String, ParticipantAudit> = BTreeMap::new();
        let mut individual_totals: HashMap<String, i64> = HashMap::new();

        for participant in &snapshot.participants {
            let mut groups = group_by_day(&participant.id, &snapshot.check_ins);
            let empty = Vec::new();
            let participant_manual_days = manual_days.get(&participant.id).unwrap_or(&empty);

            let mut days = Vec::new();
            let mut skipped = std::mem::take(&mut groups.skipped);

            // Days with check-ins, plus manual-only days with none
            let mut dates: Vec<_> = groups.days.keys().copied().collect();
            for date in participant_manual_days {
                if !groups.days.contains_key(date) {
                    dates.push(*date);
                }
            }
            dates.sort_unstable();
            dates.dedup();

            for date in dates {
                let day_check_ins = groups.days.get(&date).map(Vec::as_slice).unwrap_or(&[]);
                let has_manual = participant_manual_days.contains(&date);
                let (outcome, day_skipped) =
                    self.rules
                        .evaluate_day(date, day_check_ins, &duration_index, has_manual);
                skipped.extend(day_skipped);
                if let Some(outcome) = outcome {
                    days.push(outcome);
                }
            }

            let total = individual_total(&days);
            individual_totals.insert(participant.id.clone(), total);
            audit.insert(
                participant.id.clone(),
                ParticipantAudit {
                    participant_id: participant.id.clone(),
                    days,
                    skipped,
                    total,
                },
            );
        }

        // Approved collective workouts feed team scoring only; validation
        // failures are reported per workout instead of aborting the run.
        let mut collective_shares: HashMap<String, i64> = HashMap::new();
        let mut distribution_errors = Vec::new();
        for workout in &snapshot.collective_workouts {
            if workout.status != CollectiveStatus::Approved {
                continue;
            }
            match distribute(workout, &snapshot.teams) {
                Ok(shares) => {
                    for share in shares {
                        *collective_shares.entry(share.team_id).or_insert(0) += share.points;
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        workout_id = %workout.id,
                        error = %err,
                        "Collective workout failed validation, excluded from team totals"
                    );
                    distribution_errors.push(DistributionFailure {
                        workout_id: workout.id.clone(),
                        error: err.to_string(),
                    });
                }
            }
        }

        // Rankings
        let mut participants: Vec<RankedParticipant> = snapshot
            .participants
            .iter()
            .map(|p| RankedParticipant {
                participant_id: p.id.clone(),
                name: p.name.clone(),
                total_score: individual_totals.get(&p.id).copied().unwrap_or(0),
                rank: 0,
            })
            .collect();
        assign_ranks(&mut participants);

        let totals = team_totals(
            &snapshot.teams,
            &snapshot.memberships,
            &individual_totals,
            &collective_shares,
        );
        let name_by_team: HashMap<&str, &str> = snapshot
            .teams
            .iter()
            .map(|t| (t.id.as_str(), t.name.as_str()))
            .collect();
        let mut teams: Vec<RankedTeam> = totals
            .into_iter()
            .map(|t| RankedTeam {
                name: name_by_team.get(t.team_id.as_str()).unwrap_or(&"").to_string(),
                team_id: t.team_id,
                raw_score: t.raw_score,
                adjusted_score: t.adjusted_score,
                rank: 0,
            })
            .collect();
        assign_ranks(&mut teams);

        tracing::debug!(
            participants = participants.len(),
            teams = teams.len(),
            distribution_errors = distribution_errors.len(),
            rule_version = %self.rules.version,
            "Scoring run complete"
        );

        ScoringReport {
            rule_version: self.rules.version.clone(),
            has_podium_tie: has_top_tie(&participants),
            has_team_podium_tie: has_top_tie(&teams),
            participants,
            teams,
            audit,
            distribution_errors,
        }
    }
}

/// Manual-activity dates per participant, with the same date correction as
/// check-ins. Unresolvable timestamps are dropped.
fn index_manual_days(
    snapshot: &ChallengeSnapshot,
) -> HashMap<String, Vec<chrono::NaiveDate>> {
    let mut by_participant: HashMap<String, Vec<chrono::NaiveDate>> = HashMap::new();
    for manual in &snapshot.manual_activities {
        if let Some(date) = effective_date(&manual.created_at) {
            by_participant
                .entry(manual.member_id.clone())
                .or_default()
                .push(date);
        }
    }
    by_participant
}
