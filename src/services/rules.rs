// SPDX-License-Identifier: MIT

//! Rule evaluation: the single source of truth for what a day is worth.
//!
//! Historically this logic was duplicated across dashboard views with
//! diverging point values. All callers now go through one [`RuleSet`] and
//! every report carries the rule version label, so a display can never
//! silently disagree with the ranking about the rules in effect.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{
    CheckIn, DailyOutcome, DayCategory, SkipReason, SkippedCheckIn, SubActivity,
};

/// Marker substrings that classify a check-in as collective.
///
/// The bare tag plus sized variants that historically encoded a point total
/// ("#coletivo40" etc). A sized marker still only classifies the day; point
/// values come from the rule set, never from the tag.
pub const COLLECTIVE_MARKERS: &[&str] = &["#coletivo", "#treinocoletivo"];

/// Tunable scoring parameters, applied uniformly to every participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    /// Label emitted in every report (e.g. "2025")
    pub version: String,
    /// Minimum total qualifying duration for a day to count
    pub min_qualifying_minutes: u32,
    /// Points for a collective day in the individual ranking
    pub collective_day_points: i64,
    /// Points for an individual day
    pub individual_day_points: i64,
    /// Points for a manual-fallback day
    pub manual_day_points: i64,
    /// Duration assumed for a bare check-in with no duration data at all.
    /// `None` means such check-ins simply do not qualify.
    pub assumed_duration_minutes: Option<u32>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            version: "2025".to_string(),
            min_qualifying_minutes: 40,
            collective_day_points: 1,
            individual_day_points: 1,
            manual_day_points: 1,
            assumed_duration_minutes: None,
        }
    }
}

/// Sub-activity durations indexed by parent check-in, built once per run.
///
/// Raw milliseconds are accumulated and only converted to minutes at the
/// end; truncating each record first would lose fractional minutes and
/// could push a genuinely qualifying total under the threshold.
#[derive(Debug, Default)]
pub struct DurationIndex {
    millis_by_check_in: HashMap<String, u64>,
}

impl DurationIndex {
    pub fn build(sub_activities: &[SubActivity]) -> Self {
        let mut millis_by_check_in: HashMap<String, u64> = HashMap::new();
        for sub in sub_activities {
            *millis_by_check_in
                .entry(sub.workout_id.clone())
                .or_insert(0) += sub.duration_millis;
        }
        Self { millis_by_check_in }
    }

    fn minutes_for(&self, check_in_id: &str) -> Option<u64> {
        self.millis_by_check_in
            .get(check_in_id)
            .map(|millis| millis / 60_000)
    }
}

impl RuleSet {
    /// Effective duration of a check-in, in minutes.
    ///
    /// Explicit field first, then the summed sub-activity durations, then
    /// the configured assumption (off by default).
    pub fn effective_duration(&self, check_in: &CheckIn, index: &DurationIndex) -> Option<u64> {
        if let Some(minutes) = check_in.duration_minutes {
            return Some(u64::from(minutes));
        }
        if let Some(minutes) = index.minutes_for(&check_in.id) {
            return Some(minutes);
        }
        self.assumed_duration_minutes.map(u64::from)
    }

    /// Whether any free-text field carries a collective marker.
    pub fn is_collective(&self, check_in: &CheckIn) -> bool {
        check_in.marker_fields().any(|field| {
            let field = field.to_lowercase();
            COLLECTIVE_MARKERS.iter().any(|m| field.contains(m))
        })
    }

    /// Point total encoded in a sized collective marker, if any.
    ///
    /// Historically recorded check-ins carry tags like "#coletivo40" where
    /// the digits are a point pool to split 80/20 via
    /// [`crate::services::distribution::legacy_hashtag_split`]. A bare
    /// marker encodes nothing and returns `None`.
    pub fn encoded_points(&self, check_in: &CheckIn) -> Option<i64> {
        check_in.marker_fields().find_map(|field| {
            let field = field.to_lowercase();
            COLLECTIVE_MARKERS.iter().find_map(|marker| {
                let start = field.find(marker)? + marker.len();
                let digits: String = field[start..]
                    .chars()
                    .take_while(char::is_ascii_digit)
                    .collect();
                digits.parse().ok()
            })
        })
    }

    /// Decide one day's outcome for one participant.
    ///
    /// Precedence: collective > individual > manual fallback. The scan
    /// short-circuits on the first qualifying collective check-in. A day
    /// with nothing qualifying returns `None` (omitted from totals) plus
    /// the audit entries for check-ins that fell below the threshold.
    pub fn evaluate_day(
        &self,
        date: NaiveDate,
        check_ins: &[&CheckIn],
        index: &DurationIndex,
        has_manual: bool,
    ) -> (Option<DailyOutcome>, Vec<SkippedCheckIn>) {
        let mut skipped = Vec::new();
        let mut qualifying_individual: Vec<String> = Vec::new();

        for check_in in check_ins {
            let qualifies = self
                .effective_duration(check_in, index)
                .is_some_and(|minutes| minutes >= u64::from(self.min_qualifying_minutes));

            if !qualifies {
                skipped.push(SkippedCheckIn {
                    check_in_id: check_in.id.clone(),
                    reason: SkipReason::BelowMinimumDuration,
                });
                continue;
            }

            if self.is_collective(check_in) {
                // Collective wins the day outright; no need to look further.
                return (
                    Some(DailyOutcome {
                        date,
                        category: DayCategory::Collective,
                        points: self.collective_day_points,
                        check_in_ids: vec![check_in.id.clone()],
                    }),
                    skipped,
                );
            }

            qualifying_individual.push(check_in.id.clone());
        }

        if !qualifying_individual.is_empty() {
            return (
                Some(DailyOutcome {
                    date,
                    category: DayCategory::Individual,
                    points: self.individual_day_points,
                    check_in_ids: qualifying_individual,
                }),
                skipped,
            );
        }

        if has_manual {
            return (
                Some(DailyOutcome {
                    date,
                    category: DayCategory::ManualFallback,
                    points: self.manual_day_points,
                    check_in_ids: vec![],
                }),
                skipped,
            );
        }

        (None, skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_check_in(id: &str, duration: Option<u32>, hashtag: Option<&str>) -> CheckIn {
        CheckIn {
            id: id.to_string(),
            account_id: "m1".to_string(),
            occurred_at: "2025-06-01T10:00:00Z".to_string(),
            created_at: "2025-06-01T10:05:00Z".to_string(),
            duration_minutes: duration,
            description: None,
            notes: None,
            hashtag: hashtag.map(String::from),
            tags: vec![],
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_individual_day_one_point() {
        let rules = RuleSet::default();
        let c = make_check_in("c1", Some(45), None);
        let (outcome, skipped) =
            rules.evaluate_day(day(), &[&c], &DurationIndex::default(), false);

        let outcome = outcome.unwrap();
        assert_eq!(outcome.category, DayCategory::Individual);
        assert_eq!(outcome.points, 1);
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_collective_takes_precedence_over_individual() {
        let rules = RuleSet::default();
        let plain = make_check_in("c1", Some(45), None);
        let tagged = make_check_in("c2", Some(50), Some("#coletivo"));

        let (outcome, _) = rules.evaluate_day(
            day(),
            &[&plain, &tagged],
            &DurationIndex::default(),
            false,
        );

        let outcome = outcome.unwrap();
        assert_eq!(outcome.category, DayCategory::Collective);
        // Still one point for the day, not two
        assert_eq!(outcome.points, 1);
        assert_eq!(outcome.check_in_ids, vec!["c2".to_string()]);
    }

    #[test]
    fn test_sized_marker_classifies_collective() {
        let rules = RuleSet::default();
        let c = make_check_in("c1", Some(60), Some("#coletivo6"));
        assert!(rules.is_collective(&c));

        let upper = make_check_in("c2", Some(60), Some("#COLETIVO40"));
        assert!(rules.is_collective(&upper));
    }

    #[test]
    fn test_encoded_points_from_sized_marker() {
        let rules = RuleSet::default();

        let sized = make_check_in("c1", Some(60), Some("#coletivo40"));
        assert_eq!(rules.encoded_points(&sized), Some(40));

        // Bare marker and plain check-ins encode nothing
        let bare = make_check_in("c2", Some(60), Some("#coletivo"));
        assert_eq!(rules.encoded_points(&bare), None);
        let plain = make_check_in("c3", Some(60), None);
        assert_eq!(rules.encoded_points(&plain), None);

        // The total can sit in any free-text field, with trailing text
        let mut noted = make_check_in("c4", Some(60), None);
        noted.notes = Some("treino forte #coletivo6 hoje".to_string());
        assert_eq!(rules.encoded_points(&noted), Some(6));
    }

    #[test]
    fn test_marker_in_any_field() {
        let rules = RuleSet::default();
        let mut c = make_check_in("c1", Some(60), None);
        c.notes = Some("treino pesado hoje #coletivo com o time".to_string());
        assert!(rules.is_collective(&c));
    }

    #[test]
    fn test_below_threshold_does_not_qualify() {
        let rules = RuleSet::default();
        let c = make_check_in("c1", Some(39), None);

        let (outcome, skipped) =
            rules.evaluate_day(day(), &[&c], &DurationIndex::default(), false);

        assert!(outcome.is_none());
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].reason, SkipReason::BelowMinimumDuration);
    }

    #[test]
    fn test_short_collective_loses_to_long_individual() {
        // The collective marker only matters on a qualifying check-in
        let rules = RuleSet::default();
        let short_tagged = make_check_in("c1", Some(20), Some("#coletivo"));
        let long_plain = make_check_in("c2", Some(45), None);

        let (outcome, skipped) = rules.evaluate_day(
            day(),
            &[&short_tagged, &long_plain],
            &DurationIndex::default(),
            false,
        );

        assert_eq!(outcome.unwrap().category, DayCategory::Individual);
        assert_eq!(skipped.len(), 1);
    }

    #[test]
    fn test_duration_from_sub_activities() {
        let rules = RuleSet::default();
        let c = make_check_in("c1", None, None);
        let index = DurationIndex::build(&[
            SubActivity {
                workout_id: "c1".to_string(),
                duration_millis: 25 * 60_000,
                platform_activity: None,
            },
            SubActivity {
                workout_id: "c1".to_string(),
                duration_millis: 20 * 60_000,
                platform_activity: None,
            },
        ]);

        assert_eq!(rules.effective_duration(&c, &index), Some(45));
        let (outcome, _) = rules.evaluate_day(day(), &[&c], &index, false);
        assert!(outcome.is_some());
    }

    #[test]
    fn test_fractional_sub_activity_minutes_accumulate() {
        // 39.9 min + 0.5 min = 40.4 min total. Per-record truncation would
        // read this as 39 and wrongly disqualify the day.
        let rules = RuleSet::default();
        let c = make_check_in("c1", None, None);
        let index = DurationIndex::build(&[
            SubActivity {
                workout_id: "c1".to_string(),
                duration_millis: 2_394_000,
                platform_activity: None,
            },
            SubActivity {
                workout_id: "c1".to_string(),
                duration_millis: 30_000,
                platform_activity: None,
            },
        ]);

        assert_eq!(rules.effective_duration(&c, &index), Some(40));
        let (outcome, skipped) = rules.evaluate_day(day(), &[&c], &index, false);
        assert!(outcome.is_some());
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_bare_check_in_does_not_qualify_by_default() {
        let rules = RuleSet::default();
        let c = make_check_in("c1", None, None);

        assert_eq!(rules.effective_duration(&c, &DurationIndex::default()), None);
        let (outcome, skipped) =
            rules.evaluate_day(day(), &[&c], &DurationIndex::default(), false);
        assert!(outcome.is_none());
        assert_eq!(skipped.len(), 1);
    }

    #[test]
    fn test_assumed_duration_opt_in() {
        let rules = RuleSet {
            assumed_duration_minutes: Some(60),
            ..RuleSet::default()
        };
        let c = make_check_in("c1", None, None);

        assert_eq!(
            rules.effective_duration(&c, &DurationIndex::default()),
            Some(60)
        );
    }

    #[test]
    fn test_manual_fallback_only_without_qualifying_check_in() {
        let rules = RuleSet::default();

        let (outcome, _) =
            rules.evaluate_day(day(), &[], &DurationIndex::default(), true);
        let outcome = outcome.unwrap();
        assert_eq!(outcome.category, DayCategory::ManualFallback);
        assert_eq!(outcome.points, 1);

        // A qualifying check-in beats the manual fallback
        let c = make_check_in("c1", Some(45), None);
        let (outcome, _) = rules.evaluate_day(day(), &[&c], &DurationIndex::default(), true);
        assert_eq!(outcome.unwrap().category, DayCategory::Individual);
    }

    #[test]
    fn test_empty_day_yields_nothing() {
        let rules = RuleSet::default();
        let (outcome, skipped) =
            rules.evaluate_day(day(), &[], &DurationIndex::default(), false);
        assert!(outcome.is_none());
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_configured_collective_points() {
        // The 1-vs-3 point question stays a parameter, not a hardcode
        let rules = RuleSet {
            collective_day_points: 3,
            ..RuleSet::default()
        };
        let c = make_check_in("c1", Some(50), Some("#coletivo"));

        let (outcome, _) = rules.evaluate_day(day(), &[&c], &DurationIndex::default(), false);
        assert_eq!(outcome.unwrap().points, 3);
    }
}
