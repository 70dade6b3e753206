// SPDX-License-Identifier: MIT

//! Competition ranking with explicit tie reporting.

/// An entity that can be ranked by a descending score.
pub trait Rankable {
    /// Score used for ordering and tie detection. Returned as an ordered
    /// key so integer and float scores rank the same way.
    fn score_key(&self) -> f64;
    /// Stable tie-break for output order only; tied entities share a rank
    /// regardless of this ordering.
    fn sort_label(&self) -> (&str, &str);
    /// Write the assigned rank back onto the entity.
    fn set_rank(&mut self, rank: u32);
}

/// Sort descending by score and assign competition ("1224") ranks.
///
/// Tied scores share the rank of their first position; the next distinct
/// score takes its own 1-based position, skipping past the tie block.
/// Within a tie, output order is by name then id so results are
/// deterministic for a fixed input.
pub fn assign_ranks<T: Rankable>(entries: &mut [T]) {
    entries.sort_by(|a, b| {
        b.score_key()
            .partial_cmp(&a.score_key())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.sort_label().cmp(&b.sort_label()))
    });

    let mut current_rank = 1u32;
    let mut previous_score: Option<f64> = None;
    for (position, entry) in entries.iter_mut().enumerate() {
        let score = entry.score_key();
        if previous_score != Some(score) {
            current_rank = position as u32 + 1;
            previous_score = Some(score);
        }
        entry.set_rank(current_rank);
    }
}

/// Whether any tie makes the podium (top 3) ambiguous.
///
/// Covers ties inside the top 3 and a tie straddling 3rd/4th place, which
/// would make the choice of who appears on the podium arbitrary. The
/// display suppresses itself when this is true; callers get the signal
/// explicitly rather than a quietly reshuffled list.
pub fn has_top_tie<T: Rankable>(ranked: &[T]) -> bool {
    ranked
        .windows(2)
        .take(3)
        .any(|pair| pair[0].score_key() == pair[1].score_key())
}
