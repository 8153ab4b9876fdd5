use alloc::string::String;
use core::convert::Infallible;

use super::{DocumentSource, WordStore};

/// Sample text shown when the host starts without a document.
pub const SAMPLE_PARAGRAPHS: [&str; 2] = [
    "Alice was beginning to get very tired of sitting by her sister on the bank, and of \
having nothing to do: once or twice she had peeped into the book her sister was reading, but \
it had no pictures or conversations in it, and what is the use of a book, thought Alice, \
without pictures or conversations?",
    "So she was considering in her own mind (as well as she could, for the hot day made her \
feel very sleepy and stupid), whether the pleasure of making a daisy-chain would be worth the \
trouble of getting up and picking the daisies, when suddenly a White Rabbit with pink eyes \
ran close by her.",
];

pub fn default_sample_document() -> StaticDocument<'static> {
    StaticDocument::new("sample", &SAMPLE_PARAGRAPHS)
}

/// In-memory document made of borrowed paragraphs.
#[derive(Debug, Clone)]
pub struct StaticDocument<'a> {
    key: &'a str,
    paragraphs: &'a [&'a str],
}

impl<'a> StaticDocument<'a> {
    pub const fn new(key: &'a str, paragraphs: &'a [&'a str]) -> Self {
        Self { key, paragraphs }
    }
}

impl DocumentSource for StaticDocument<'_> {
    type Error = Infallible;

    fn key(&self) -> &str {
        self.key
    }

    fn load(&mut self) -> Result<WordStore, Self::Error> {
        let mut text = String::new();
        for paragraph in self.paragraphs {
            text.push_str(paragraph);
            text.push('\n');
        }
        Ok(WordStore::from_text(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_every_paragraph_in_order() {
        let paragraphs = ["uno dos", "tres"];
        let mut doc = StaticDocument::new("numbers", &paragraphs);

        let store = doc.load().unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store[0].text(), "uno");
        assert_eq!(store[2].text(), "tres");
        assert_eq!(doc.key(), "numbers");
    }

    #[test]
    fn sample_document_is_not_empty() {
        let mut doc = default_sample_document();
        let store = doc.load().unwrap();
        assert!(store.len() > 50);
        assert_eq!(store[0].text(), "Alice");
        assert_eq!(store[store.len() - 1].text(), "her.");
    }
}
