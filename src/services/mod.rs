// SPDX-License-Identifier: MIT

//! Services module - the scoring/ranking engine.

pub mod aggregator;
pub mod distribution;
pub mod rank;
pub mod rules;
pub mod scoring;
pub mod totals;

pub use aggregator::{group_by_day, DayGroups};
pub use distribution::{distribute, legacy_hashtag_split, DistributionError, TeamShare};
pub use rank::{assign_ranks, has_top_tie, Rankable};
pub use rules::{DurationIndex, RuleSet, COLLECTIVE_MARKERS};
pub use scoring::ScoringEngine;
pub use totals::{individual_total, team_totals, TeamTotal};
