//! Fragment text cleanup.
//!
//! Speech recognizers restate themselves: words double up, phrases repeat as
//! the decoder revises, fillers leak through. `normalize` applies the cleanup
//! rules in a fixed order and is idempotent: running it twice yields the
//! same string, which the rest of the pipeline relies on since resolved
//! text is re-cleaned after joining.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FILLER: Regex = Regex::new(r"(?i)\b(?:uh|um|ah)\s+").unwrap();
    static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(r"\s+([,.])").unwrap();
}

/// Clean one raw fragment text.
///
/// In order: trim, collapse immediately repeated words, collapse repeated
/// phrases of up to five words, collapse doubled short stutter tokens,
/// strip standalone fillers ("uh", "um", "ah"), strip stray space before
/// `,` and `.`. Whitespace runs collapse to single spaces as part of the
/// token passes. Empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut cleaned = collapse_word_repeats(text.trim(), usize::MAX);
    cleaned = collapse_phrase_repeats(&cleaned, 5);
    cleaned = collapse_word_repeats(&cleaned, 3);
    cleaned = FILLER.replace_all(&cleaned, "").into_owned();
    cleaned = SPACE_BEFORE_PUNCT.replace_all(&cleaned, "$1").into_owned();
    cleaned.trim().to_string()
}

// Word matching mirrors the recognizer output this was tuned on: ASCII word
// characters form the comparable core, anything else is a trailing suffix
// (punctuation) that blocks a token from starting a repeat but survives the
// collapse on the final occurrence.
fn split_core(token: &str) -> (&str, &str) {
    let end = token
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(token.len(), |(i, _)| i);
    token.split_at(end)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Collapse a word immediately followed by case-insensitive repeats of
/// itself, keeping the first occurrence and the last occurrence's trailing
/// punctuation. `max_core_len` limits which words participate (the stutter
/// pass only touches tokens of up to three characters).
fn collapse_word_repeats(text: &str, max_core_len: usize) -> String {
    let mut kept: Vec<String> = Vec::new();

    for token in text.split_whitespace() {
        if let Some(last) = kept.last_mut() {
            let (core, suffix) = split_core(token);
            let repeats = {
                let (last_core, last_suffix) = split_core(last);
                !core.is_empty()
                    && core.len() <= max_core_len
                    && last_suffix.is_empty()
                    && core.eq_ignore_ascii_case(last_core)
            };

            if repeats {
                // the kept token is a bare word here, so the collapsed
                // result is just it plus the repeat's punctuation
                last.push_str(suffix);
                continue;
            }
        }
        kept.push(token.to_string());
    }

    kept.join(" ")
}

/// Collapse a 1..=`max_len` word phrase immediately followed by exact
/// case-insensitive repeats of itself to a single occurrence. Longer phrases
/// win over shorter ones at the same position.
fn collapse_phrase_repeats(text: &str, max_len: usize) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut out: Vec<String> = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let matched = (1..=max_len)
            .rev()
            .find(|n| i + 2 * n <= tokens.len() && phrase_repeats(&tokens[i..i + n], &tokens[i + n..i + 2 * n]));

        let Some(n) = matched else {
            out.push(tokens[i].to_string());
            i += 1;
            continue;
        };

        let mut j = i + 2 * n;
        while j + n <= tokens.len() && phrase_repeats(&tokens[i..i + n], &tokens[j..j + n]) {
            j += n;
        }

        let (_, last_suffix) = split_core(tokens[j - 1]);
        for k in 0..n {
            if k == n - 1 && !last_suffix.is_empty() {
                out.push(format!("{}{last_suffix}", tokens[i + k]));
            } else {
                out.push(tokens[i + k].to_string());
            }
        }
        i = j;
    }

    out.join(" ")
}

/// A phrase repeats when every word of `first` is a bare word (no trailing
/// punctuation) and `second` matches it word for word, case-insensitively.
/// Only the final word of `second` may carry a suffix.
fn phrase_repeats(first: &[&str], second: &[&str]) -> bool {
    let n = first.len();

    for k in 0..n {
        let (f_core, f_suffix) = split_core(first[k]);
        if f_core.is_empty() || !f_suffix.is_empty() {
            return false;
        }

        let (s_core, s_suffix) = split_core(second[k]);
        if !s_core.eq_ignore_ascii_case(f_core) {
            return false;
        }
        if k < n - 1 && !s_suffix.is_empty() {
            return false;
        }
    }

    true
}
