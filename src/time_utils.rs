// SPDX-License-Identifier: MIT

//! Shared helpers for timestamp parsing and date correction.
//!
//! The challenge runs on Brasília wall-clock time but the feed logs UTC.
//! Dates are corrected by a fixed UTC-3 offset, not a real timezone
//! conversion (no DST handling; the source system never had any).

use chrono::{DateTime, Duration, NaiveDate};

/// Fixed hour offset applied to UTC timestamps before taking the date.
pub const UTC_OFFSET_HOURS: i64 = -3;

/// Effective calendar date of an RFC 3339 timestamp under the fixed offset.
///
/// Falls back to truncating the first 10 characters of the raw string when
/// the timestamp does not parse; a slightly malformed value like
/// `2025-06-01T25:99` still lands on its date instead of being thrown away.
/// Returns `None` only when both paths fail.
pub fn effective_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw.trim()) {
        let shifted = parsed.to_utc() + Duration::hours(UTC_OFFSET_HOURS);
        return Some(shifted.date_naive());
    }
    truncated_date(raw)
}

/// Best-effort date from the leading `YYYY-MM-DD` of a raw timestamp string.
///
/// No offset correction is applied here; when the timestamp itself is
/// malformed there is nothing trustworthy to shift.
fn truncated_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = raw.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
