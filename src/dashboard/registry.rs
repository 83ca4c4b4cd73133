//! Render Target Registry
//! Named display slots the refresh loop writes into and the board view
//! reads from. Writes to unregistered slots are dropped silently; a
//! missing slot is never an error.

use crate::metrics::JobStatus;
use std::collections::HashMap;

/// Slot identifiers, named after the hosted page's element ids.
pub mod slots {
    pub const ACTIVE_CAMPAIGNS: &str = "active-campaigns";
    pub const TOTAL_SOURCES: &str = "total-sources";
    pub const DAILY_FINDINGS: &str = "daily-findings";
    pub const DATA_COLLECTION_STATUS: &str = "data-collection-status";
    pub const AI_ANALYSIS_STATUS: &str = "ai-analysis-status";
    pub const DAILY_SUMMARY: &str = "daily-summary";
    pub const CRITICAL_FINDINGS: &str = "critical-findings";
    pub const DATA_DISTRIBUTION: &str = "data-distribution";
    pub const JOB_DATA_COLLECTION: &str = "job-data-collection";
    pub const JOB_AI_ANALYSIS: &str = "job-ai-analysis";
    pub const JOB_REPORT_GEN: &str = "job-report-gen";
    pub const LAST_UPDATED: &str = "last-updated";
}

/// Every slot the shipped board exposes.
pub const ALL_SLOTS: [&str; 12] = [
    slots::ACTIVE_CAMPAIGNS,
    slots::TOTAL_SOURCES,
    slots::DAILY_FINDINGS,
    slots::DATA_COLLECTION_STATUS,
    slots::AI_ANALYSIS_STATUS,
    slots::DAILY_SUMMARY,
    slots::CRITICAL_FINDINGS,
    slots::DATA_DISTRIBUTION,
    slots::JOB_DATA_COLLECTION,
    slots::JOB_AI_ANALYSIS,
    slots::JOB_REPORT_GEN,
    slots::LAST_UPDATED,
];

/// Severity styling for a report entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warning,
    Danger,
}

/// An emphasised label plus body line, as shown in the report cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub label: String,
    pub body: String,
    pub tone: Tone,
}

impl ReportEntry {
    pub fn new(label: &str, body: &str, tone: Tone) -> Self {
        Self {
            label: label.to_string(),
            body: body.to_string(),
            tone,
        }
    }
}

/// Content a slot can hold. Overwritten wholesale on every refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderValue {
    Text(String),
    List(Vec<String>),
    Entries(Vec<ReportEntry>),
    Status(JobStatus),
}

/// Fixed mapping from slot name to its current content.
pub struct SlotRegistry {
    registered: Vec<&'static str>,
    values: HashMap<&'static str, RenderValue>,
}

impl SlotRegistry {
    /// Registry over the full shipped slot set.
    pub fn new() -> Self {
        Self::with_slots(&ALL_SLOTS)
    }

    /// Registry over an explicit slot set. Zero slots is legal and
    /// turns every write into a no-op.
    pub fn with_slots(slots: &[&'static str]) -> Self {
        Self {
            registered: slots.to_vec(),
            values: HashMap::new(),
        }
    }

    /// Store `value` if `slot` is registered, otherwise drop it.
    pub fn set(&mut self, slot: &str, value: RenderValue) {
        if let Some(&name) = self.registered.iter().find(|&&s| s == slot) {
            self.values.insert(name, value);
        }
    }

    pub fn get(&self, slot: &str) -> Option<&RenderValue> {
        self.values.get(slot)
    }

    /// Convenience for the text slots.
    pub fn text(&self, slot: &str) -> Option<&str> {
        match self.get(slot) {
            Some(RenderValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Slot names that currently hold a value.
    #[allow(dead_code)]
    pub fn filled_slots(&self) -> Vec<&'static str> {
        let mut filled: Vec<&'static str> = self.values.keys().copied().collect();
        filled.sort_unstable();
        filled
    }
}

impl Default for SlotRegistry {
    fn default() -> Self {
        Self::new()
    }
}
