// SPDX-License-Identifier: MIT

//! Point distribution for collective workouts shared between teams.

use serde::Serialize;

use crate::models::{CollectiveStatus, CollectiveWorkout, Team};

/// Share of an 80/20 legacy split that goes to the primary team.
const LEGACY_PRIMARY_SHARE: f64 = 0.8;

/// Errors from distributing a collective workout's point pool.
#[derive(Debug, thiserror::Error)]
pub enum DistributionError {
    #[error("Collective workout needs at least two distinct teams, got {0:?}")]
    NotEnoughTeams(Vec<String>),

    #[error("Collective workout needs at least two participants, got {0}")]
    NotEnoughParticipants(usize),

    #[error("Unknown team name: {0}")]
    UnknownTeam(String),

    #[error("Collective workout is {0:?}, only approved workouts distribute points")]
    NotApproved(CollectiveStatus),
}

/// One team's computed share of a workout's point pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamShare {
    pub team_id: String,
    pub points: i64,
}

/// Distribute an approved collective workout's pool across its teams.
///
/// Shares are proportional to participant counts:
/// `round(total × n_team / n_total)`. Rounding means the shares need not
/// sum exactly to the pool; that tolerance is accepted. Validation failures
/// are returned as errors, never silently zeroed.
pub fn distribute(
    workout: &CollectiveWorkout,
    teams: &[Team],
) -> Result<Vec<TeamShare>, DistributionError> {
    if workout.status != CollectiveStatus::Approved {
        return Err(DistributionError::NotApproved(workout.status));
    }
    if workout.team1 == workout.team2 {
        return Err(DistributionError::NotEnoughTeams(vec![
            workout.team1.clone(),
            workout.team2.clone(),
        ]));
    }

    let total_participants = workout.total_participants();
    if total_participants < 2 {
        return Err(DistributionError::NotEnoughParticipants(total_participants));
    }

    let team1 = resolve_team(&workout.team1, teams)?;
    let team2 = resolve_team(&workout.team2, teams)?;

    let total_points = workout.total_points() as f64;
    let share = |count: usize| -> i64 {
        (total_points * count as f64 / total_participants as f64).round() as i64
    };

    Ok(vec![
        TeamShare {
            team_id: team1.id.clone(),
            points: share(workout.team1_participants.len()),
        },
        TeamShare {
            team_id: team2.id.clone(),
            points: share(workout.team2_participants.len()),
        },
    ])
}

fn resolve_team<'a>(name: &str, teams: &'a [Team]) -> Result<&'a Team, DistributionError> {
    teams
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| DistributionError::UnknownTeam(name.to_string()))
}

/// Legacy 80/20 split for hashtag-encoded point totals.
///
/// Historically a sized marker like "#coletivo40" awarded a fixed split
/// between the check-in owner's team (primary) and the partner team. Kept
/// only so historically recorded check-ins reproduce their original scores;
/// the admin CollectiveWorkout flow always uses [`distribute`].
pub fn legacy_hashtag_split(total_points: i64) -> (i64, i64) {
    let primary = (total_points as f64 * LEGACY_PRIMARY_SHARE).round() as i64;
    (primary, total_points - primary)
}
