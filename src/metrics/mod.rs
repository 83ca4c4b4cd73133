//! Metrics module - Dashboard snapshot suppliers

pub mod random;
mod source;

pub use random::RandomMetrics;
pub use source::{
    AnalysisActivity, CollectionActivity, JobState, JobStatus, MetricsSource, StatCounts,
};
