use alloc::{string::String, vec::Vec};

/// Characters kept inside a word: word characters plus ASCII punctuation.
/// Every other run of characters separates words.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch.is_ascii_punctuation()
}

/// Returns the word starting at or after byte `cursor` and the cursor just
/// past it.
fn next_word_at(text: &str, cursor: usize) -> Option<(&str, usize)> {
    let rest = text.get(cursor..)?;

    let (start, _) = rest.char_indices().find(|(_, ch)| is_word_char(*ch))?;
    let tail = &rest[start..];
    let len = tail
        .char_indices()
        .find(|(_, ch)| !is_word_char(*ch))
        .map_or(tail.len(), |(idx, _)| idx);

    let begin = cursor + start;
    Some((&text[begin..begin + len], begin + len))
}

pub fn tokenize(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut cursor = 0usize;

    while let Some((word, next_cursor)) = next_word_at(text, cursor) {
        words.push(String::from(word));
        cursor = next_cursor;
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_collapse_to_single_breaks() {
        let words = tokenize("  Hello,\tworld!\n\n«quoted» text — dash_word 42");
        assert_eq!(
            words,
            ["Hello,", "world!", "quoted", "text", "dash_word", "42"]
        );
    }

    #[test]
    fn punctuation_stays_attached() {
        assert_eq!(tokenize("(a) b-c; \"d\""), ["(a)", "b-c;", "\"d\""]);
    }

    #[test]
    fn next_word_reports_cursor() {
        let text = "uno  dos";
        let (first, cursor) = next_word_at(text, 0).unwrap();
        assert_eq!(first, "uno");
        let (second, cursor) = next_word_at(text, cursor).unwrap();
        assert_eq!(second, "dos");
        assert!(next_word_at(text, cursor).is_none());
    }
}
