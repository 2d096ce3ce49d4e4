/// Whether `candidate` extends `previous`: a strict, longer
/// superset-by-prefix, meaning the recognizer refined its transcription and
/// the candidate should replace what was recorded.
///
/// The reverse case (previous already contains the candidate as a strict
/// prefix) and unrelated text both return `false`; the grouper calls this
/// both ways to distinguish replace from drop.
pub fn is_continuation(candidate: &str, previous: &str) -> bool {
    if candidate.is_empty() || previous.is_empty() {
        return false;
    }

    let candidate = candidate.to_lowercase();
    let previous = previous.to_lowercase();

    candidate.starts_with(&previous) && candidate.len() > previous.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longer_prefix_extension_is_continuation() {
        assert!(is_continuation("what is the price", "what is"));
    }

    #[test]
    fn case_is_ignored() {
        assert!(is_continuation("What is the price", "what is"));
    }

    #[test]
    fn shorter_prefix_is_not_continuation() {
        assert!(!is_continuation("what is", "what is the price"));
    }

    #[test]
    fn equal_text_is_not_continuation() {
        assert!(!is_continuation("what is the price", "what is the price"));
    }

    #[test]
    fn unrelated_text_is_not_continuation() {
        assert!(!is_continuation("how do I return it", "what is the price"));
    }

    #[test]
    fn empty_sides_are_not_continuations() {
        assert!(!is_continuation("", "what is"));
        assert!(!is_continuation("what is", ""));
        assert!(!is_continuation("", ""));
    }
}
