//! Application layer sequencing the extraction stages
//!
//! The pipeline owns no mutable state: a ranking is returned to the caller
//! and passed back explicitly when suggestions are wanted.

pub mod pipeline;

pub use pipeline::{PipelineMetrics, PipelineOutput, RakePipeline};
