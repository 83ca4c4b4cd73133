//! Metrics Source Trait
//! One method per metric family. The dashboard only ever consumes this
//! trait, so a live collector can replace the random generator without
//! touching the refresh loop or the chart renderer.

/// Top-row stat counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCounts {
    pub active_campaigns: u32,
    pub total_sources: u32,
    pub daily_findings: u32,
}

/// One cycle of collection activity across the monitored channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionActivity {
    pub social_posts: u32,
    pub news_articles: u32,
    pub dark_web_posts: u32,
}

/// One cycle of analysis pipeline activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisActivity {
    pub nlp_tokens: u32,
    pub patterns_matched: u32,
    pub negative_sentiment_pct: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Pending,
    Active,
    Error,
}

/// Outcome badge for one scheduled job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStatus {
    pub id: &'static str,
    pub state: JobState,
    pub message: String,
}

/// Supplier of one dashboard snapshot per call.
pub trait MetricsSource {
    fn stat_counts(&mut self) -> StatCounts;
    fn collection_activity(&mut self) -> CollectionActivity;
    fn analysis_activity(&mut self) -> AnalysisActivity;
    fn job_statuses(&mut self) -> Vec<JobStatus>;
}
