// SPDX-License-Identifier: MIT

//! Daily aggregation of check-ins.
//!
//! Groups one participant's check-ins by effective calendar day and applies
//! the anti-backdating rule. Pure function over the provided collection; the
//! caller batch-loads the snapshot and hands it in.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{CheckIn, SkipReason, SkippedCheckIn};
use crate::time_utils::effective_date;

/// A participant's check-ins grouped by day, plus the ones that were dropped.
#[derive(Debug, Default)]
pub struct DayGroups<'a> {
    /// Effective date → check-ins on that date, in input order
    pub days: BTreeMap<NaiveDate, Vec<&'a CheckIn>>,
    /// Check-ins excluded from aggregation, with audit reasons
    pub skipped: Vec<SkippedCheckIn>,
}

/// Group a participant's check-ins by effective date.
///
/// A check-in is dropped when its timestamps cannot be resolved to a date,
/// or when its workout date and log date disagree (backdating). Dropped
/// check-ins are reported in `skipped` so the audit trail can explain them.
pub fn group_by_day<'a>(participant_id: &str, check_ins: &'a [CheckIn]) -> DayGroups<'a> {
    let mut groups = DayGroups::default();

    for check_in in check_ins.iter().filter(|c| c.account_id == participant_id) {
        let workout_date = match effective_date(&check_in.occurred_at) {
            Some(d) => d,
            None => {
                groups.skipped.push(SkippedCheckIn {
                    check_in_id: check_in.id.clone(),
                    reason: SkipReason::UnparseableTimestamp,
                });
                continue;
            }
        };

        // Anti-backdating: the day the workout claims to be on must match
        // the day it was actually logged.
        match effective_date(&check_in.created_at) {
            Some(log_date) if log_date == workout_date => {}
            Some(_) => {
                groups.skipped.push(SkippedCheckIn {
                    check_in_id: check_in.id.clone(),
                    reason: SkipReason::Backdated,
                });
                continue;
            }
            None => {
                groups.skipped.push(SkippedCheckIn {
                    check_in_id: check_in.id.clone(),
                    reason: SkipReason::UnparseableTimestamp,
                });
                continue;
            }
        }

        groups.days.entry(workout_date).or_default().push(check_in);
    }

    groups
}
