//! Partitioning of the raw fragment stream into speaker turns.
//!
//! Single pass with one current-group cursor. A fragment opens a new group
//! when there is no cursor, the role changes, or the gap since the group's
//! last fragment exceeds [`TIME_THRESHOLD_MS`]. Within a group the
//! continuation classifier decides replace-vs-drop-vs-append; near-duplicate
//! restatements are filtered by word overlap against everything already in
//! the group.

use crate::continuation::is_continuation;
use crate::normalize::normalize;
use crate::similarity::similarity;
use crate::types::{Fragment, Speaker, TurnGroup};

/// Maximum silence between fragments of the same speaker before a new turn
/// starts.
pub const TIME_THRESHOLD_MS: i64 = 3_000;

/// Reserved for completion detection on a speaker turn. Documented here
/// because the grouping boundary and any future completion logic share the
/// same timing model; nothing consults it yet.
pub const COMPLETION_THRESHOLD_MS: i64 = 1_500;

/// Overlap ratio above which a fragment counts as a restatement of text
/// already recorded in the group.
const DUPLICATE_CUTOFF: f64 = 0.85;

/// Partition a time-ordered fragment stream into turn groups.
///
/// Fragments whose text normalizes to empty are skipped without consuming a
/// group slot. The stream is taken in arrival order and is not re-sorted;
/// an empty stream yields no groups.
pub(crate) fn group_fragments(fragments: &[Fragment]) -> Vec<TurnGroup> {
    let mut groups: Vec<TurnGroup> = Vec::new();
    let mut current: Option<TurnGroup> = None;

    for fragment in fragments {
        let cleaned = normalize(&fragment.text);
        if cleaned.is_empty() {
            continue;
        }

        match current.as_mut() {
            Some(group) if group.accepts(fragment) => {
                group.absorb(cleaned, fragment.arrival_ms);
            }
            _ => {
                let fresh = TurnGroup::seeded(fragment.role, cleaned, fragment.arrival_ms);
                if let Some(done) = current.replace(fresh) {
                    groups.push(done);
                }
            }
        }
    }

    if let Some(done) = current {
        groups.push(done);
    }

    groups
}

impl TurnGroup {
    fn seeded(role: Speaker, text: String, arrival_ms: i64) -> Self {
        Self {
            role,
            texts: vec![text],
            timestamps: vec![arrival_ms],
            start_ms: arrival_ms,
            end_ms: arrival_ms,
        }
    }

    fn accepts(&self, fragment: &Fragment) -> bool {
        self.role == fragment.role && fragment.arrival_ms - self.end_ms <= TIME_THRESHOLD_MS
    }

    /// Fold one cleaned fragment into the group.
    ///
    /// A continuation supersedes the last recorded text in place; a strict
    /// prefix of it is dropped as redundant; anything else is appended
    /// unless it restates a text already in the group. The group's end time
    /// always advances, even for dropped fragments.
    fn absorb(&mut self, cleaned: String, arrival_ms: i64) {
        let last = self.texts.len() - 1;

        if is_continuation(&cleaned, &self.texts[last]) {
            self.texts[last] = cleaned;
            self.timestamps[last] = arrival_ms;
        } else if !is_continuation(&self.texts[last], &cleaned) && !self.restates(&cleaned) {
            self.texts.push(cleaned);
            self.timestamps.push(arrival_ms);
        }

        self.end_ms = arrival_ms;
    }

    fn restates(&self, cleaned: &str) -> bool {
        let lowered = cleaned.to_lowercase();
        self.texts
            .iter()
            .any(|existing| similarity(&lowered, &existing.to_lowercase()) > DUPLICATE_CUTOFF)
    }
}
