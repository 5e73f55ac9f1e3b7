//! Filtering transformations over string sequences.

use crate::options::TransformOptions;

/// Uppercases messages ending in `!`, then drops messages ending in `?`.
///
/// The two steps run as separate passes, so the `?` check sees the already-uppercased text.
/// Relative order of the remaining messages is preserved.
///
/// ```rust
/// use rust_array_transforms::processing::shout_if_exclaiming;
///
/// assert_eq!(shout_if_exclaiming(&["hi!", "bye?", "ok"]), vec!["HI!", "ok"]);
/// ```
pub fn shout_if_exclaiming<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
    let shouted: Vec<String> = messages
        .iter()
        .map(|m| {
            let m = m.as_ref();
            if m.ends_with('!') {
                m.to_uppercase()
            } else {
                m.to_owned()
            }
        })
        .collect();

    shouted.into_iter().filter(|m| !m.ends_with('?')).collect()
}

/// Counts words with fewer than 4 characters.
///
/// Length is measured in Unicode scalar values, not bytes.
pub fn count_short_words<S: AsRef<str>>(words: &[S]) -> usize {
    count_short_words_with(words, &TransformOptions::default())
}

/// Counts words with fewer than `options.short_word_limit` characters.
pub fn count_short_words_with<S: AsRef<str>>(words: &[S], options: &TransformOptions) -> usize {
    words
        .iter()
        .filter(|w| w.as_ref().chars().count() < options.short_word_limit)
        .count()
}

#[cfg(test)]
mod tests {
    use super::{count_short_words, count_short_words_with, shout_if_exclaiming};
    use crate::options::TransformOptions;

    #[test]
    fn shout_uppercases_then_drops_questions() {
        assert_eq!(shout_if_exclaiming(&["hi!", "bye?", "ok"]), vec!["HI!", "ok"]);
        assert_eq!(
            shout_if_exclaiming(&["wait?!", "really!?", "?"]),
            vec!["WAIT?!"]
        );
    }

    #[test]
    fn shout_can_return_empty() {
        assert!(shout_if_exclaiming::<&str>(&[]).is_empty());
        assert!(shout_if_exclaiming(&["why?", "how?"]).is_empty());
    }

    #[test]
    fn shout_uses_unicode_uppercase() {
        assert_eq!(shout_if_exclaiming(&["straße!"]), vec!["STRASSE!"]);
        assert_eq!(shout_if_exclaiming(&["é"]), vec!["é"]);
    }

    #[test]
    fn count_short_words_uses_strict_less_than() {
        assert_eq!(count_short_words(&["a", "dog", "house"]), 2);
        assert_eq!(count_short_words(&["four", "", "abc"]), 2);
        assert_eq!(count_short_words::<String>(&[]), 0);
    }

    #[test]
    fn count_short_words_counts_characters_not_bytes() {
        // 3 chars, 9 bytes
        assert_eq!(count_short_words(&["日本語"]), 1);
        // 2 chars outside the BMP, 8 bytes
        assert_eq!(count_short_words(&["😀😀"]), 1);
        // 4 chars: two letters, each followed by a combining accent
        assert_eq!(count_short_words(&["e\u{301}e\u{301}"]), 0);
    }

    #[test]
    fn count_short_words_with_custom_limit() {
        let opts = TransformOptions {
            short_word_limit: 6,
            ..Default::default()
        };
        assert_eq!(count_short_words_with(&["a", "dog", "house", "houses"], &opts), 3);
    }
}
