// SPDX-License-Identifier: MIT

//! Challenge-Board: scoring and ranking engine for a gym fitness challenge.
//!
//! This crate computes per-participant and per-team point totals from raw
//! check-in events (daily cap, category precedence, collective point
//! distribution) and produces tie-aware competition rankings, either as a
//! library or behind a small snapshot-in/ranking-out HTTP API.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::ScoringEngine;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub engine: ScoringEngine,
}
