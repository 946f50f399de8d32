use std::collections::BTreeSet;
use std::fs;
use std::ops::Bound;
use std::path::Path;

use super::error::Result;

/// Word lookup used by the board search.
///
/// Callers pass uppercase strings.
pub trait Dictionary {
    /// Check if a word exists in the dictionary
    fn contains(&self, word: &str) -> bool;

    /// Check if any word in the dictionary starts with `prefix`
    fn contains_prefix(&self, prefix: &str) -> bool;
}

/// Sorted in-memory word list.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: BTreeSet<String>,
}

impl WordList {
    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from any word source, one word per item
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();

        Self { words }
    }

    /// Parse newline separated text
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Load dictionary from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let list = Self::parse(&content);

        tracing::info!("Loaded {} words from {}", list.len(), path.as_ref().display());

        Ok(list)
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        // The first word not less than the prefix is the only candidate.
        self.words
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .next()
            .is_some_and(|word| word.starts_with(prefix))
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        (**self).contains_prefix(prefix)
    }
}
