// SPDX-License-Identifier: MIT

use challenge_board::config::Config;
use challenge_board::models::{
    ChallengeSnapshot, CheckIn, CollectiveStatus, CollectiveWorkout, ManualActivity, Membership,
    Participant, Team,
};
use challenge_board::routes::create_router;
use challenge_board::services::ScoringEngine;
use challenge_board::AppState;
use std::sync::Arc;

/// Create a test app with default rules.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let engine = ScoringEngine::new(config.rules.clone());
    let state = Arc::new(AppState { config, engine });
    (create_router(state.clone()), state)
}

/// A check-in logged on the day it happened (passes anti-backdating).
#[allow(dead_code)]
pub fn check_in(id: &str, account: &str, day: &str, duration: u32) -> CheckIn {
    CheckIn {
        id: id.to_string(),
        account_id: account.to_string(),
        occurred_at: format!("{day}T10:00:00-03:00"),
        created_at: format!("{day}T10:30:00-03:00"),
        duration_minutes: Some(duration),
        description: None,
        notes: None,
        hashtag: None,
        tags: vec![],
    }
}

#[allow(dead_code)]
pub fn tagged_check_in(id: &str, account: &str, day: &str, duration: u32, tag: &str) -> CheckIn {
    let mut c = check_in(id, account, day, duration);
    c.hashtag = Some(tag.to_string());
    c
}

#[allow(dead_code)]
pub fn manual_activity(member: &str, day: &str) -> ManualActivity {
    ManualActivity {
        member_id: member.to_string(),
        activity_type: "manual".to_string(),
        activity_label: Some("Treino manual".to_string()),
        created_at: format!("{day}T19:00:00-03:00"),
    }
}

#[allow(dead_code)]
pub fn participant(id: &str, name: &str) -> Participant {
    Participant {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[allow(dead_code)]
pub fn team(id: &str, name: &str, expected_size: u32) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        expected_size,
    }
}

#[allow(dead_code)]
pub fn membership(participant_id: &str, team_id: &str) -> Membership {
    Membership {
        participant_id: participant_id.to_string(),
        team_id: team_id.to_string(),
    }
}

/// An approved two-team collective workout with the given rosters.
#[allow(dead_code)]
pub fn approved_collective(
    id: &str,
    team1: &str,
    team2: &str,
    pool: i64,
    team1_participants: &[&str],
    team2_participants: &[&str],
) -> CollectiveWorkout {
    CollectiveWorkout {
        id: id.to_string(),
        title: Some("Treino coletivo".to_string()),
        team1: team1.to_string(),
        team2: team2.to_string(),
        team1_points: pool / 2,
        team2_points: pool - pool / 2,
        team1_participants: team1_participants.iter().map(|s| s.to_string()).collect(),
        team2_participants: team2_participants.iter().map(|s| s.to_string()).collect(),
        status: CollectiveStatus::Approved,
        created_at: "2025-06-01T12:00:00-03:00".to_string(),
        approved_by: Some("admin".to_string()),
        approved_at: Some("2025-06-01T13:00:00-03:00".to_string()),
    }
}

/// Empty snapshot to build scenarios on.
#[allow(dead_code)]
pub fn empty_snapshot() -> ChallengeSnapshot {
    ChallengeSnapshot::default()
}
