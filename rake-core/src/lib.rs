//! Rapid Automatic Keyword Extraction (RAKE)
//!
//! Extracts salient multi-word phrases from a single document without a
//! training corpus or part-of-speech tagger. Text is cut into candidate
//! phrases at punctuation and stopwords, words are scored by co-occurrence
//! degree over frequency, and phrases by the sum of their word scores.
//!
//! # Architecture
//!
//! - **Domain layer**: the individual stages (stopword matching, sentence
//!   splitting, phrase extraction, scoring, ranking, selection)
//! - **Application layer**: the pipeline sequencing those stages
//! - **API layer**: configuration, input sources and the extractor
//!
//! # Example
//!
//! ```rust
//! use rake_core::KeywordExtractor;
//!
//! let extractor = KeywordExtractor::new();
//! let ranking = extractor.run(
//!     "Compatibility of systems of linear constraints over the set of natural numbers.",
//! );
//!
//! assert_eq!(ranking.groups[0].phrases, ["linear constraints", "natural numbers"]);
//! assert_eq!(ranking.groups[0].weight, 4.0);
//!
//! let suggestions = extractor.suggested_keywords(&ranking.groups);
//! assert_eq!(suggestions[0], "linear constraints");
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod error;

pub use api::{
    CachedExtractor, Config, ConfigBuilder, Input, KeywordExtractor, Ranking, RankingStats,
    StopwordSource,
};
pub use domain::{RankedGroup, StopwordIndex, StopwordList};
pub use error::{Error, Result};
