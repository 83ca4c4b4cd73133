//! Refresh Loop
//! Rebuilds every dashboard slot from a fresh metrics snapshot, on a
//! fixed cadence and on demand. One tick always runs to completion
//! before the next can start; there is no error path, writes to
//! missing slots simply vanish.

use crate::config::DashboardConfig;
use crate::dashboard::registry::{slots, RenderValue, ReportEntry, SlotRegistry, Tone};
use crate::metrics::MetricsSource;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Drives the periodic regeneration of all displayed values.
///
/// The GUI frame loop calls [`RefreshLoop::poll`] every frame; the loop
/// fires a refresh whenever a full interval has elapsed and reports how
/// long until the next one, so the shell can schedule its repaint.
pub struct RefreshLoop {
    registry: SlotRegistry,
    metrics: Box<dyn MetricsSource>,
    interval: Duration,
    next_tick: Option<Instant>,
    ticks: u64,
}

impl RefreshLoop {
    pub fn new(
        config: &DashboardConfig,
        registry: SlotRegistry,
        metrics: Box<dyn MetricsSource>,
    ) -> Self {
        Self {
            registry,
            metrics,
            interval: config.update_interval(),
            next_tick: None,
            ticks: 0,
        }
    }

    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }

    /// Completed refresh count, for the panel status line.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Write the initial placeholder content, run the first refresh
    /// synchronously and arm the tick clock.
    pub fn start(&mut self, now: Instant) {
        info!(interval_ms = self.interval.as_millis() as u64, "dashboard starting");
        self.write_placeholders();
        self.refresh();
        self.next_tick = Some(now + self.interval);
    }

    /// Fire a refresh if a full interval has elapsed; returns the time
    /// remaining until the next tick.
    pub fn poll(&mut self, now: Instant) -> Duration {
        let Some(next) = self.next_tick else {
            return self.interval;
        };
        if now >= next {
            self.refresh();
            self.next_tick = Some(now + self.interval);
            self.interval
        } else {
            next - now
        }
    }

    /// Regenerate every slot from one metrics snapshot.
    pub fn refresh(&mut self) {
        self.ticks += 1;
        debug!(tick = self.ticks, "refreshing dashboard");

        let stats = self.metrics.stat_counts();
        self.set_text(slots::ACTIVE_CAMPAIGNS, group_thousands(stats.active_campaigns));
        self.set_text(slots::TOTAL_SOURCES, group_thousands(stats.total_sources));
        self.set_text(slots::DAILY_FINDINGS, group_thousands(stats.daily_findings));

        let collection = self.metrics.collection_activity();
        self.registry.set(
            slots::DATA_COLLECTION_STATUS,
            RenderValue::List(vec![
                format!("Social media: {} new posts", collection.social_posts),
                format!("News sources: {} articles", collection.news_articles),
                format!("Dark web: {} forum posts", collection.dark_web_posts),
            ]),
        );

        let analysis = self.metrics.analysis_activity();
        self.registry.set(
            slots::AI_ANALYSIS_STATUS,
            RenderValue::List(vec![
                format!("NLP models: {} tokens processed", analysis.nlp_tokens),
                format!(
                    "Pattern matching: {} patterns identified",
                    analysis.patterns_matched
                ),
                format!(
                    "Sentiment: {}% negative sentiment detected",
                    analysis.negative_sentiment_pct
                ),
            ]),
        );

        for job in self.metrics.job_statuses() {
            let id = job.id;
            self.registry.set(id, RenderValue::Status(job));
        }

        let now = chrono::Local::now();
        self.set_text(slots::LAST_UPDATED, now.format("%H:%M:%S").to_string());
    }

    /// Manually triggered refresh, wired to the panel button.
    pub fn refresh_on_demand(&mut self) {
        info!("manual refresh triggered");
        self.refresh();
    }

    fn set_text(&mut self, slot: &str, value: String) {
        self.registry.set(slot, RenderValue::Text(value));
    }

    /// Pre-refresh content: zeroed counters, loading lines, the static
    /// daily-report fragments and pending job badges.
    fn write_placeholders(&mut self) {
        use crate::metrics::{JobState, JobStatus};

        for slot in [
            slots::ACTIVE_CAMPAIGNS,
            slots::TOTAL_SOURCES,
            slots::DAILY_FINDINGS,
        ] {
            self.set_text(slot, "0".to_string());
        }

        self.registry.set(
            slots::DATA_COLLECTION_STATUS,
            RenderValue::List(vec![
                "Loading social media data...".to_string(),
                "Processing news sources...".to_string(),
                "Analyzing dark web forums...".to_string(),
            ]),
        );
        self.registry.set(
            slots::AI_ANALYSIS_STATUS,
            RenderValue::List(vec![
                "Natural language processing...".to_string(),
                "Pattern recognition...".to_string(),
                "Sentiment analysis...".to_string(),
            ]),
        );

        self.registry.set(
            slots::DAILY_SUMMARY,
            RenderValue::Entries(vec![
                ReportEntry::new("Total Campaigns", "12 new campaigns detected", Tone::Info),
                ReportEntry::new(
                    "Key Findings",
                    "Increased activity in Eastern Europe",
                    Tone::Info,
                ),
                ReportEntry::new("Top Source", "Twitter (45% of activity)", Tone::Info),
            ]),
        );
        self.registry.set(
            slots::CRITICAL_FINDINGS,
            RenderValue::Entries(vec![
                ReportEntry::new(
                    "URGENT",
                    "Coordinated disinformation campaign targeting election",
                    Tone::Danger,
                ),
                ReportEntry::new(
                    "HIGH PRIORITY",
                    "Bot network amplification detected",
                    Tone::Warning,
                ),
            ]),
        );
        self.registry.set(
            slots::DATA_DISTRIBUTION,
            RenderValue::Entries(vec![
                ReportEntry::new("Social Media", "45%", Tone::Info),
                ReportEntry::new("News Sources", "30%", Tone::Info),
                ReportEntry::new("Dark Web", "15%", Tone::Info),
                ReportEntry::new("Other", "10%", Tone::Info),
            ]),
        );

        for (slot, message) in [
            (slots::JOB_DATA_COLLECTION, "Collecting data..."),
            (slots::JOB_AI_ANALYSIS, "Analyzing data..."),
            (slots::JOB_REPORT_GEN, "Generating report..."),
        ] {
            self.registry.set(
                slot,
                RenderValue::Status(JobStatus {
                    id: slot,
                    state: JobState::Pending,
                    message: message.to_string(),
                }),
            );
        }
    }
}

/// Format an integer with thousands separators (1234 -> "1,234").
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::registry::ALL_SLOTS;
    use crate::metrics::random::{
        ACTIVE_CAMPAIGNS, DAILY_FINDINGS, TOTAL_SOURCES,
    };
    use crate::metrics::RandomMetrics;
    use chrono::NaiveTime;

    fn seeded_loop(seed: u64) -> RefreshLoop {
        RefreshLoop::new(
            &DashboardConfig::default(),
            SlotRegistry::new(),
            Box::new(RandomMetrics::seeded(seed)),
        )
    }

    fn parse_count(text: &str) -> u32 {
        text.replace(',', "").parse().unwrap()
    }

    #[test]
    fn grouping_inserts_separators() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn refreshed_stats_fall_in_their_ranges() {
        let mut refresh = seeded_loop(3);
        refresh.refresh();

        let registry = refresh.registry();
        let campaigns = parse_count(registry.text(slots::ACTIVE_CAMPAIGNS).unwrap());
        let sources = parse_count(registry.text(slots::TOTAL_SOURCES).unwrap());
        let findings = parse_count(registry.text(slots::DAILY_FINDINGS).unwrap());

        assert!(ACTIVE_CAMPAIGNS.contains(&campaigns));
        assert!(TOTAL_SOURCES.contains(&sources));
        assert!(DAILY_FINDINGS.contains(&findings));
    }

    #[test]
    fn last_updated_is_non_decreasing() {
        let mut refresh = seeded_loop(5);
        refresh.refresh();
        let first = refresh.registry().text(slots::LAST_UPDATED).unwrap().to_string();
        refresh.refresh();
        let second = refresh.registry().text(slots::LAST_UPDATED).unwrap().to_string();

        let a = NaiveTime::parse_from_str(&first, "%H:%M:%S").unwrap();
        let b = NaiveTime::parse_from_str(&second, "%H:%M:%S").unwrap();
        assert!(b >= a);
    }

    #[test]
    fn refresh_against_empty_registry_completes() {
        let mut refresh = RefreshLoop::new(
            &DashboardConfig::default(),
            SlotRegistry::with_slots(&[]),
            Box::new(RandomMetrics::seeded(9)),
        );
        refresh.start(Instant::now());
        refresh.refresh_on_demand();
        assert!(refresh.registry().filled_slots().is_empty());
    }

    #[test]
    fn manual_refresh_fills_the_same_slots_as_a_tick() {
        let mut ticked = seeded_loop(11);
        ticked.refresh();

        let mut manual = seeded_loop(12);
        manual.refresh_on_demand();

        assert_eq!(
            ticked.registry().filled_slots(),
            manual.registry().filled_slots()
        );
    }

    #[test]
    fn start_writes_every_slot() {
        let mut refresh = seeded_loop(13);
        refresh.start(Instant::now());

        let mut expected: Vec<&str> = ALL_SLOTS.to_vec();
        expected.sort_unstable();
        assert_eq!(refresh.registry().filled_slots(), expected);
    }

    #[test]
    fn start_seeds_the_static_report_fragments() {
        let mut refresh = seeded_loop(17);
        refresh.start(Instant::now());

        let registry = refresh.registry();
        let Some(RenderValue::Entries(summary)) = registry.get(slots::DAILY_SUMMARY) else {
            panic!("daily summary missing");
        };
        assert_eq!(summary.len(), 3);

        let Some(RenderValue::Entries(findings)) = registry.get(slots::CRITICAL_FINDINGS) else {
            panic!("critical findings missing");
        };
        assert_eq!(findings[0].tone, Tone::Danger);
        assert_eq!(findings[1].tone, Tone::Warning);

        let Some(RenderValue::Entries(distribution)) = registry.get(slots::DATA_DISTRIBUTION)
        else {
            panic!("data distribution missing");
        };
        assert_eq!(distribution.len(), 4);
    }

    #[test]
    fn poll_fires_only_after_a_full_interval() {
        let mut refresh = seeded_loop(19);
        let t0 = Instant::now();
        refresh.start(t0);
        assert_eq!(refresh.ticks(), 1);

        // Half an interval in: nothing fires, remainder is reported
        let remaining = refresh.poll(t0 + Duration::from_secs(15));
        assert_eq!(refresh.ticks(), 1);
        assert_eq!(remaining, Duration::from_secs(15));

        // A full interval in: one tick fires
        refresh.poll(t0 + Duration::from_secs(30));
        assert_eq!(refresh.ticks(), 2);
    }

    #[test]
    fn poll_before_start_is_a_no_op() {
        let mut refresh = seeded_loop(23);
        let remaining = refresh.poll(Instant::now());
        assert_eq!(refresh.ticks(), 0);
        assert_eq!(remaining, DashboardConfig::default().update_interval());
    }
}
