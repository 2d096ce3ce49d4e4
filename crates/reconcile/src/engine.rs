//! The reconciliation entry point.

use crate::group::group_fragments;
use crate::merge::merge_streams;
use crate::resolve::resolve_groups;
use crate::types::{ChatMessage, Fragment};

/// Recompute the merged conversation view from both input streams.
///
/// Pure function of its inputs: no state survives between calls, so the
/// caller simply invokes it again whenever either stream changes. Raw
/// fragments are consumed in arrival order and are not re-sorted; only the
/// merged output is sorted by timestamp. Worst case for bad input is an
/// empty or imperfect view, never an error.
pub fn reconcile(messages: &[ChatMessage], fragments: &[Fragment]) -> Vec<ChatMessage> {
    let groups = group_fragments(fragments);
    let utterances = resolve_groups(&groups);
    merge_streams(messages, utterances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::types::{Sender, Speaker};

    fn fragment(role: Speaker, text: &str, at: i64) -> Fragment {
        Fragment::new(role, text, at)
    }

    fn message(id: &str, content: &str, sender: Sender, at: i64) -> ChatMessage {
        ChatMessage {
            id: id.to_string(),
            content: content.to_string(),
            sender,
            timestamp_ms: at,
        }
    }

    fn assert_valid_view(view: &[ChatMessage]) {
        assert!(
            view.windows(2).all(|w| w[0].timestamp_ms <= w[1].timestamp_ms),
            "view must be chronological"
        );

        let keys: Vec<String> = view
            .iter()
            .map(|m| normalize(&m.content).to_lowercase())
            .collect();
        let mut deduped = keys.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len(), "view must be deduplicated: {keys:?}");

        for m in view {
            assert!(
                normalize(&m.content).chars().count() > 2,
                "noise-length content must not surface: {:?}",
                m.content
            );
        }
    }

    // ── single-stream scenarios ──────────────────────────────────────────

    #[test]
    fn refined_transcription_supersedes_its_prefix() {
        let view = reconcile(
            &[],
            &[
                fragment(Speaker::User, "What is", 0),
                fragment(Speaker::User, "What is the price", 500),
            ],
        );
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].content, "What is the price");
        assert_eq!(view[0].sender, Sender::User);
        assert_eq!(view[0].timestamp_ms, 0);
        assert_valid_view(&view);
    }

    #[test]
    fn filler_variants_collapse_to_one_utterance() {
        let view = reconcile(
            &[],
            &[
                fragment(Speaker::User, "uh what is the price", 0),
                fragment(Speaker::User, "what is the price", 400),
            ],
        );
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].content, "what is the price");
        assert_valid_view(&view);
    }

    #[test]
    fn role_change_forces_separate_utterances() {
        let view = reconcile(
            &[],
            &[
                fragment(Speaker::Assistant, "Hello there", 0),
                fragment(Speaker::User, "Hi how are you", 4_000),
            ],
        );
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].sender, Sender::Bot);
        assert_eq!(view[1].sender, Sender::User);
        assert_valid_view(&view);
    }

    #[test]
    fn spoken_duplicate_of_typed_message_is_dropped() {
        let log = vec![message("1", "hello there", Sender::User, 0)];
        let view = reconcile(
            &log,
            &[fragment(Speaker::User, "Hello there", 2_000)],
        );
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "1");
        assert_valid_view(&view);
    }

    #[test]
    fn empty_inputs_yield_empty_view() {
        assert!(reconcile(&[], &[]).is_empty());
    }

    // ── cross-stream behavior ────────────────────────────────────────────

    #[test]
    fn typed_and_spoken_interleave_chronologically() {
        let log = vec![
            message("1", "I have a question", Sender::User, 1_000),
            message("2", "Go ahead", Sender::Bot, 2_000),
        ];
        let view = reconcile(
            &log,
            &[
                fragment(Speaker::User, "what is the return policy", 6_000),
                fragment(Speaker::Assistant, "thirty days with a receipt", 9_000),
            ],
        );
        assert_eq!(view.len(), 4);
        assert_eq!(
            view.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            ["1", "2", "transcript-0", "transcript-1"]
        );
        assert_valid_view(&view);
    }

    #[test]
    fn recomputation_is_stable() {
        let log = vec![message("1", "hello there", Sender::User, 0)];
        let fragments = [
            fragment(Speaker::User, "what is", 1_000),
            fragment(Speaker::User, "what is the price", 1_400),
            fragment(Speaker::Assistant, "it is ten dollars", 5_000),
        ];
        let first = reconcile(&log, &fragments);
        let second = reconcile(&log, &fragments);
        assert_eq!(
            first.iter().map(|m| &m.content).collect::<Vec<_>>(),
            second.iter().map(|m| &m.content).collect::<Vec<_>>()
        );
    }

    #[test]
    fn noisy_stream_still_produces_clean_view() {
        let view = reconcile(
            &[],
            &[
                fragment(Speaker::User, "", 0),
                fragment(Speaker::User, "   ", 100),
                fragment(Speaker::User, "uh uh", 200),
                fragment(Speaker::User, "what what is the the price", 300),
            ],
        );
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].content, "what is the price");
        assert_valid_view(&view);
    }
}
