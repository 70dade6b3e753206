// SPDX-License-Identifier: MIT

//! Score totaling for participants and teams.

use std::collections::HashMap;

use crate::models::{DailyOutcome, Membership, Team};

/// Sum a participant's per-day points into their individual total.
///
/// Collective workout pools never land here; since the 2025 rule change
/// they feed team scoring only, through the distribution service.
pub fn individual_total(days: &[DailyOutcome]) -> i64 {
    days.iter().map(|d| d.points).sum()
}

/// A team's summed and per-capita-adjusted scores.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamTotal {
    pub team_id: String,
    /// Member totals plus collective shares, unadjusted (kept for display)
    pub raw_score: i64,
    /// Raw score divided by expected roster size
    pub adjusted_score: f64,
}

/// Compute each team's raw and adjusted score.
///
/// Raw = sum of member individual totals plus that team's approved
/// collective shares. Adjusted divides by `expected_size`, not by the
/// registered member count, so a half-staffed team is not penalized for
/// seats that were never filled. Teams with `expected_size == 0` get an
/// adjusted score of 0 rather than dividing by zero.
pub fn team_totals(
    teams: &[Team],
    memberships: &[Membership],
    individual_totals: &HashMap<String, i64>,
    collective_shares: &HashMap<String, i64>,
) -> Vec<TeamTotal> {
    let mut member_sums: HashMap<&str, i64> = HashMap::new();
    for membership in memberships {
        let total = individual_totals
            .get(&membership.participant_id)
            .copied()
            .unwrap_or(0);
        *member_sums.entry(membership.team_id.as_str()).or_insert(0) += total;
    }

    teams
        .iter()
        .map(|team| {
            let members = member_sums.get(team.id.as_str()).copied().unwrap_or(0);
            let collective = collective_shares.get(&team.id).copied().unwrap_or(0);
            let raw_score = members + collective;
            let adjusted_score = if team.expected_size == 0 {
                0.0
            } else {
                raw_score as f64 / f64::from(team.expected_size)
            };
            TeamTotal {
                team_id: team.id.clone(),
                raw_score,
                adjusted_score,
            }
        })
        .collect()
}
