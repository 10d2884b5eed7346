//! Domain layer for RAKE keyword extraction
//!
//! Each stage is a pure function over the previous stage's output:
//! text → sentences → candidate phrases → word scores → phrase scores →
//! ranked groups → suggestions.

pub mod chars;
pub mod phrase;
pub mod ranking;
pub mod scoring;
pub mod selection;
pub mod sentence;
pub mod stopwords;
pub mod words;

pub use phrase::PhraseExtractor;
pub use ranking::{RankedGroup, Ranker};
pub use scoring::{PhraseScorer, PhraseScores, WordScorer, WordScores, WordStats};
pub use selection::SuggestionSelector;
pub use sentence::SentenceSplitter;
pub use stopwords::{StopwordIndex, StopwordList};
pub use words::{WordList, WordSeparator};
