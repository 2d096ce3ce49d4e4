//! Collapsing a turn group's fragment set into one final utterance.

use std::collections::HashSet;

use crate::normalize::normalize;
use crate::types::{TurnGroup, Utterance};

/// A joined candidate must beat the longest single fragment by this factor
/// before it is preferred.
const JOIN_PREFERENCE_RATIO: f64 = 1.2;

/// Resolved text at or below this many characters is dropped as noise.
const MIN_UTTERANCE_CHARS: usize = 2;

/// Resolve each group to an utterance, in group order.
///
/// Groups that resolve to noise-length text or restate text already emitted
/// in this pass (case-insensitive) contribute nothing. Utterance ids are
/// `transcript-{n}`, numbered over the emitted utterances of this pass.
pub(crate) fn resolve_groups(groups: &[TurnGroup]) -> Vec<Utterance> {
    let mut utterances: Vec<Utterance> = Vec::new();
    let mut emitted: HashSet<String> = HashSet::new();

    for group in groups {
        let text = resolve_group(group);
        if text.chars().count() <= MIN_UTTERANCE_CHARS {
            continue;
        }
        if !emitted.insert(text.to_lowercase()) {
            continue;
        }

        utterances.push(Utterance {
            id: format!("transcript-{}", utterances.len()),
            text,
            role: group.role,
            start_ms: group.start_ms,
        });
    }

    utterances
}

/// Pick the group's final text: the longest single fragment, unless joining
/// every fragment yields something substantially longer (fragments that
/// build on each other rather than restate). Re-normalized either way, since
/// joining can reintroduce repeats.
fn resolve_group(group: &TurnGroup) -> String {
    let chosen = if group.texts.len() == 1 {
        group.texts[0].clone()
    } else {
        let mut longest = &group.texts[0];
        for text in &group.texts[1..] {
            if text.chars().count() > longest.chars().count() {
                longest = text;
            }
        }

        let joined = normalize(&group.texts.join(" "));
        if joined.chars().count() as f64 > longest.chars().count() as f64 * JOIN_PREFERENCE_RATIO {
            joined
        } else {
            longest.to_string()
        }
    };

    normalize(&chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Speaker;

    fn group(role: Speaker, texts: &[&str], start_ms: i64) -> TurnGroup {
        TurnGroup {
            role,
            texts: texts.iter().map(|t| t.to_string()).collect(),
            timestamps: texts.iter().enumerate().map(|(i, _)| start_ms + i as i64).collect(),
            start_ms,
            end_ms: start_ms + texts.len() as i64,
        }
    }

    #[test]
    fn single_text_resolves_to_itself() {
        let utterances = resolve_groups(&[group(Speaker::User, &["what is the price"], 0)]);
        assert_eq!(utterances.len(), 1);
        assert_eq!(utterances[0].text, "what is the price");
        assert_eq!(utterances[0].role, Speaker::User);
        assert_eq!(utterances[0].start_ms, 0);
    }

    #[test]
    fn multi_text_group_keeps_longest_when_join_adds_little() {
        // joined text collapses back to roughly the longest fragment
        let utterances = resolve_groups(&[group(
            Speaker::User,
            &["what is the price", "what is the price"],
            0,
        )]);
        assert_eq!(utterances[0].text, "what is the price");
    }

    #[test]
    fn multi_text_group_joins_when_parts_build_on_each_other() {
        let utterances = resolve_groups(&[group(
            Speaker::User,
            &["what is the price", "and how long does shipping take"],
            0,
        )]);
        assert_eq!(
            utterances[0].text,
            "what is the price and how long does shipping take"
        );
    }

    #[test]
    fn noise_length_groups_are_dropped() {
        let utterances = resolve_groups(&[
            group(Speaker::User, &["ok"], 0),
            group(Speaker::User, &["what is the price"], 5_000),
        ]);
        assert_eq!(utterances.len(), 1);
        assert_eq!(utterances[0].text, "what is the price");
    }

    #[test]
    fn repeated_resolution_is_emitted_once() {
        let utterances = resolve_groups(&[
            group(Speaker::User, &["what is the price"], 0),
            group(Speaker::User, &["What is the PRICE"], 10_000),
        ]);
        assert_eq!(utterances.len(), 1);
    }

    #[test]
    fn ids_number_emitted_utterances() {
        let utterances = resolve_groups(&[
            group(Speaker::User, &["ok"], 0),
            group(Speaker::User, &["what is the price"], 5_000),
            group(Speaker::Assistant, &["it is ten dollars"], 9_000),
        ]);
        assert_eq!(
            utterances.iter().map(|u| u.id.as_str()).collect::<Vec<_>>(),
            ["transcript-0", "transcript-1"]
        );
    }

    #[test]
    fn utterance_keeps_group_start_time() {
        let utterances = resolve_groups(&[group(Speaker::Assistant, &["hello there"], 1_234)]);
        assert_eq!(utterances[0].start_ms, 1_234);
    }
}
