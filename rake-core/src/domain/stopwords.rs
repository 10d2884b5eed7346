//! Stopword lists and the index that cuts text at stopword occurrences

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::chars::is_word_byte;
use crate::error::{Error, Result};

/// SMART English stopword list (Salton, 1971)
const SMART_STOPLIST: &str = include_str!("../../configs/stopwords/smart.txt");

/// Ordered list of lowercase stopwords
///
/// Duplicates are kept; the first listed word wins when two stopwords could
/// match at the same position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordList {
    words: Vec<String>,
}

impl StopwordList {
    /// Build a list from individual words, dropping blank entries
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_ascii_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Parse a stopword blob
    ///
    /// Each line contributes its space-separated words. Lines whose first
    /// non-blank character is `#` are comments.
    pub fn parse(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .filter(|line| !line.trim_start().starts_with('#'))
                .flat_map(|line| line.split(' ')),
        )
    }

    /// The embedded SMART English list
    pub fn smart() -> Self {
        Self::parse(SMART_STOPLIST)
    }

    /// Read and parse a stopword file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let list = Self::parse(&text);
        log::debug!(
            "Loaded {} stopwords from {}",
            list.len(),
            path.display()
        );
        Ok(list)
    }

    /// Number of words, duplicates included
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no usable word
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is listed (case-insensitive)
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(word))
    }

    /// Iterate the words in list order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Compiled stopword matcher
///
/// Matches a stopword only as a whole token: a word boundary must precede
/// it, and it must not be followed by a word character or a hyphen, so
/// `well-known` never matches `well`. Matching ignores ASCII case.
///
/// The index is immutable once built and can be shared between threads.
#[derive(Debug, Clone)]
pub struct StopwordIndex {
    list: StopwordList,
    /// Positions into `list`, keyed by lowercased first byte, in list order
    by_initial: HashMap<u8, Vec<usize>>,
}

impl StopwordIndex {
    /// Build an index from a stopword list
    ///
    /// Fails with [`Error::Configuration`] when the list is empty, since an
    /// index without words would never cut anything.
    pub fn new(list: StopwordList) -> Result<Self> {
        if list.is_empty() {
            return Err(Error::Configuration(
                "stopword source yields no usable words".into(),
            ));
        }

        let mut by_initial: HashMap<u8, Vec<usize>> = HashMap::new();
        for (rank, word) in list.words.iter().enumerate() {
            let initial = word.as_bytes()[0].to_ascii_lowercase();
            by_initial.entry(initial).or_default().push(rank);
        }

        log::debug!(
            "Built stopword index: {} words, {} initials",
            list.len(),
            by_initial.len()
        );

        Ok(Self { list, by_initial })
    }

    /// Build an index from a raw stopword blob (see [`StopwordList::parse`])
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(StopwordList::parse(text))
    }

    /// Index over the embedded SMART list
    pub fn smart() -> Result<Self> {
        Self::new(StopwordList::smart())
    }

    /// The underlying word list
    pub fn list(&self) -> &StopwordList {
        &self.list
    }

    /// Cut `text` at every stopword occurrence
    ///
    /// Returns the fragments between separators, left to right. Adjacent
    /// stopwords leave an empty fragment between them, and a text with no
    /// stopword comes back as a single fragment.
    pub fn match_and_split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut fragments = Vec::new();
        let mut fragment_start = 0;
        let mut pos = 0;

        while pos < text.len() {
            if let Some(len) = self.match_at(text, pos) {
                fragments.push(&text[fragment_start..pos]);
                pos += len;
                fragment_start = pos;
                continue;
            }
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }

        fragments.push(&text[fragment_start..]);
        fragments
    }

    /// Length of the stopword matching at byte `start`, if any
    ///
    /// `start` must be a char boundary. A matched word ends on a char
    /// boundary too, since its bytes equal the text's bytes apart from
    /// ASCII case.
    fn match_at(&self, text: &str, start: usize) -> Option<usize> {
        let bytes = text.as_bytes();
        let first = bytes[start];
        let candidates = self.by_initial.get(&first.to_ascii_lowercase())?;

        let preceded_by_word = start > 0 && is_word_byte(bytes[start - 1]);
        if preceded_by_word == is_word_byte(first) {
            return None;
        }

        candidates
            .iter()
            .map(|&rank| self.list.words[rank].as_bytes())
            .find(|word| {
                let end = start + word.len();
                bytes
                    .get(start..end)
                    .is_some_and(|slice| slice.eq_ignore_ascii_case(word))
                    && !bytes
                        .get(end)
                        .is_some_and(|&next| is_word_byte(next) || next == b'-')
            })
            .map(<[u8]>::len)
    }
}
