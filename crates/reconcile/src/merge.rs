//! Cross-stream deduplication and the final chronological merge.

use std::collections::HashSet;

use crate::normalize::normalize;
use crate::types::{ChatMessage, Utterance};

/// Resolved text at or below this many characters never reaches the view.
const MIN_CONTENT_CHARS: usize = 2;

/// Merge resolved utterances into the typed message log.
///
/// Utterances whose normalized, lower-cased text already appears in the log
/// are dropped: the user typed it, or the bot already replied with it.
/// Survivors take the message display shape and the combined sequence is
/// stable-sorted by timestamp, typed messages first among equals.
pub(crate) fn merge_streams(
    messages: &[ChatMessage],
    utterances: Vec<Utterance>,
) -> Vec<ChatMessage> {
    let existing: HashSet<String> = messages
        .iter()
        .map(|m| normalize(&m.content).to_lowercase())
        .collect();

    let mut merged: Vec<ChatMessage> = messages.to_vec();

    for utterance in utterances {
        let key = normalize(&utterance.text).to_lowercase();
        if key.chars().count() <= MIN_CONTENT_CHARS || existing.contains(&key) {
            continue;
        }

        merged.push(ChatMessage {
            id: utterance.id,
            content: utterance.text,
            sender: utterance.role.into(),
            timestamp_ms: utterance.start_ms,
        });
    }

    merged.sort_by_key(|m| m.timestamp_ms);
    merged
}
