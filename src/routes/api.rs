// SPDX-License-Identifier: MIT

//! Ranking API: snapshot in, ranked output plus audit trail out.

use crate::error::Result;
use crate::models::{ChallengeSnapshot, CollectiveWorkout, ScoringReport, Team};
use crate::services::{distribute, TeamShare};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/rankings", post(compute_rankings))
        .route("/api/distribution", post(compute_distribution))
}

/// Score a challenge snapshot.
///
/// The caller batch-loads all records and posts them as one snapshot; the
/// response carries both rankings and the per-participant audit trail.
/// Bad individual records never fail the request - they are skipped and
/// explained in the audit - but an oversized or structurally invalid
/// snapshot is rejected with 400.
async fn compute_rankings(
    State(state): State<Arc<AppState>>,
    Json(snapshot): Json<ChallengeSnapshot>,
) -> Result<Json<ScoringReport>> {
    snapshot.validate()?;

    tracing::info!(
        check_ins = snapshot.check_ins.len(),
        participants = snapshot.participants.len(),
        teams = snapshot.teams.len(),
        collective_workouts = snapshot.collective_workouts.len(),
        "Computing rankings"
    );

    let report = state.engine.compute(&snapshot);
    Ok(Json(report))
}

// ─── Collective Distribution ─────────────────────────────────

/// One collective workout plus the team list to resolve names against.
#[derive(Deserialize)]
pub struct DistributionRequest {
    pub workout: CollectiveWorkout,
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// Computed shares for a single workout.
#[derive(Serialize)]
pub struct DistributionResponse {
    pub workout_id: String,
    pub shares: Vec<TeamShare>,
}

/// Distribute one collective workout's point pool.
///
/// Used by the admin approval screen to preview a split before approving.
/// Unlike the batch scoring run, a validation failure here is the whole
/// answer: it comes back as an explicit 422, never as a zeroed split.
async fn compute_distribution(
    Json(request): Json<DistributionRequest>,
) -> Result<Json<DistributionResponse>> {
    let shares = distribute(&request.workout, &request.teams)?;
    Ok(Json(DistributionResponse {
        workout_id: request.workout.id,
        shares,
    }))
}
