/// Word-overlap ratio between two strings, in `[0, 1]`.
///
/// Callers are expected to lower-case both sides first. Equal strings score
/// 1, an empty side scores 0. Otherwise the words of the shorter string are
/// counted by membership anywhere in the longer string and the count is
/// divided by the larger word count. Coarse bag-of-words overlap, not edit
/// distance; duplicate words get no special handling.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (longer, shorter) = if a.len() > b.len() { (a, b) } else { (b, a) };

    let longer_words: Vec<&str> = longer.split(' ').collect();
    let shorter_words: Vec<&str> = shorter.split(' ').collect();

    let common = shorter_words
        .iter()
        .filter(|word| longer_words.contains(word))
        .count();

    common as f64 / longer_words.len().max(shorter_words.len()) as f64
}
