//! Public API for keyword extraction
//!
//! This module wraps the pipeline behind an extractor built once from a
//! configuration, with input and output types shared by the CLI.

mod config;
mod extractor;
mod input;
mod output;

pub use config::{defaults, Config, ConfigBuilder, StopwordSource};
pub use extractor::{CachedExtractor, KeywordExtractor};
pub use input::Input;
pub use output::{Ranking, RankingStats};
