//! Core types and data structures for the agenda consolidation

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// A single sheet row: column header mapped to the cell text
pub type RawRow = HashMap<String, String>;

/// The three independently maintained sheets feeding the consolidation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceId {
    /// First scheduling base - approval-gated rows keyed by "Data Agenda"
    Base1,
    /// Second scheduling base - same row contract as Base1
    Base2,
    /// Third base - unconditional rows keyed by "Data"
    Base3,
}

impl SourceId {
    /// All sources, in ingestion order
    pub const ALL: [SourceId; 3] = [SourceId::Base1, SourceId::Base2, SourceId::Base3];

    /// Sheet name used when no configuration overrides it
    pub fn default_sheet_name(&self) -> &'static str {
        match self {
            SourceId::Base1 => "Base1",
            SourceId::Base2 => "Base2",
            SourceId::Base3 => "Base3",
        }
    }

    /// Whether rows from this source must carry an approved status to count
    pub fn requires_approval(&self) -> bool {
        matches!(self, SourceId::Base1 | SourceId::Base2)
    }

    /// Column holding the agenda date for this source
    pub fn date_column(&self) -> &'static str {
        match self {
            SourceId::Base1 | SourceId::Base2 => "Data Agenda",
            SourceId::Base3 => "Data",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_sheet_name())
    }
}

/// Per-date pallet totals across the three sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedRecord {
    /// Agenda date exactly as written in the source rows
    #[serde(rename = "dataAgenda")]
    pub date_key: String,
    /// Pallets contributed by Base1
    #[serde(rename = "base1Paletes")]
    pub base1_pallets: u64,
    /// Pallets contributed by Base2
    #[serde(rename = "base2Paletes")]
    pub base2_pallets: u64,
    /// Pallets contributed by Base3, including any weekday bonus
    #[serde(rename = "base3Paletes")]
    pub base3_pallets: u64,
    /// Sum of the three source counters
    #[serde(rename = "totalPaletes")]
    pub total_pallets: u64,
}

impl ConsolidatedRecord {
    /// Create an empty record for a date key
    pub fn new(date_key: String) -> Self {
        Self {
            date_key,
            base1_pallets: 0,
            base2_pallets: 0,
            base3_pallets: 0,
            total_pallets: 0,
        }
    }

    /// Add pallets to the counter of `source`, keeping the total in step.
    ///
    /// Counters saturate at `u64::MAX`.
    pub fn add_pallets(&mut self, source: SourceId, pallets: u64) {
        let counter = match source {
            SourceId::Base1 => &mut self.base1_pallets,
            SourceId::Base2 => &mut self.base2_pallets,
            SourceId::Base3 => &mut self.base3_pallets,
        };
        *counter = counter.saturating_add(pallets);
        self.total_pallets = self.total_pallets.saturating_add(pallets);
    }

    /// Check that the total equals the saturating sum of the source counters
    pub fn is_balanced(&self) -> bool {
        self.base1_pallets
            .saturating_add(self.base2_pallets)
            .saturating_add(self.base3_pallets)
            == self.total_pallets
    }
}

/// Summary statistics over the stored pallet totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgendaStats {
    /// Number of stored dates
    pub count: usize,
    /// Sum of all totals
    pub total: u64,
    /// Integer-truncated mean of the totals
    #[serde(rename = "media")]
    pub average: u64,
    /// Largest total
    #[serde(rename = "maxima")]
    pub maximum: u64,
    /// Smallest total
    #[serde(rename = "minima")]
    pub minimum: u64,
}

impl AgendaStats {
    /// Compute statistics from the records' totals; all zero when empty
    pub fn from_records(records: &[ConsolidatedRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let totals = records.iter().map(|r| r.total_pallets);
        let sum: u128 = totals.clone().map(u128::from).sum();
        let average = sum / records.len() as u128;

        Self {
            count: records.len(),
            total: u64::try_from(sum).unwrap_or(u64::MAX),
            average: u64::try_from(average).unwrap_or(u64::MAX),
            maximum: totals.clone().max().unwrap_or(0),
            minimum: totals.min().unwrap_or(0),
        }
    }
}

/// Outcome of one synchronization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Identifier of the run, also attached to its log events
    pub sync_id: Uuid,
    /// Number of consolidated dates stored
    pub record_count: usize,
    /// Sources whose rows could not be fetched and contributed nothing
    pub failed_sources: Vec<SourceId>,
    /// Human-readable summary
    pub message: String,
}

impl SyncReport {
    /// Build the report for a completed run
    pub fn completed(sync_id: Uuid, record_count: usize, failed_sources: Vec<SourceId>) -> Self {
        Self {
            sync_id,
            record_count,
            failed_sources,
            message: format!("Sync completed: {} dates processed", record_count),
        }
    }

    /// Whether every source contributed
    pub fn is_complete(&self) -> bool {
        self.failed_sources.is_empty()
    }
}

/// Errors that can occur while synchronizing or reading the agenda
#[derive(Debug, thiserror::Error)]
pub enum AgendaError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Fetch error: {0}")]
    Fetch(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for agenda operations
pub type AgendaResult<T> = Result<T, AgendaError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date_key: &str, total: u64) -> ConsolidatedRecord {
        let mut record = ConsolidatedRecord::new(date_key.to_string());
        record.add_pallets(SourceId::Base1, total);
        record
    }

    #[test]
    fn test_add_pallets_keeps_total() {
        let mut record = ConsolidatedRecord::new("05/03/2024".to_string());
        record.add_pallets(SourceId::Base1, 10);
        record.add_pallets(SourceId::Base3, 3);
        record.add_pallets(SourceId::Base2, 0);

        assert_eq!(record.base1_pallets, 10);
        assert_eq!(record.base3_pallets, 3);
        assert_eq!(record.total_pallets, 13);
        assert!(record.is_balanced());
    }

    #[test]
    fn test_record_wire_names() {
        let record = record("05/03/2024", 7);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["dataAgenda"], "05/03/2024");
        assert_eq!(json["base1Paletes"], 7);
        assert_eq!(json["base2Paletes"], 0);
        assert_eq!(json["base3Paletes"], 0);
        assert_eq!(json["totalPaletes"], 7);
    }

    #[test]
    fn test_stats_empty() {
        let stats = AgendaStats::from_records(&[]);
        assert_eq!(stats, AgendaStats::default());
        assert_eq!(stats.average, 0);
    }

    #[test]
    fn test_stats_truncates_mean() {
        let records = vec![record("a", 10), record("b", 3), record("c", 4)];
        let stats = AgendaStats::from_records(&records);

        assert_eq!(stats.count, 3);
        assert_eq!(stats.total, 17);
        assert_eq!(stats.average, 5);
        assert_eq!(stats.maximum, 10);
        assert_eq!(stats.minimum, 3);

        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["media"], 5);
        assert_eq!(json["maxima"], 10);
        assert_eq!(json["minima"], 3);
    }

    #[test]
    fn test_add_pallets_saturates() {
        let mut record = ConsolidatedRecord::new("05/03/2024".to_string());
        record.add_pallets(SourceId::Base3, u64::MAX);
        record.add_pallets(SourceId::Base3, u64::MAX);
        record.add_pallets(SourceId::Base1, 5);

        assert_eq!(record.base3_pallets, u64::MAX);
        assert_eq!(record.base1_pallets, 5);
        assert_eq!(record.total_pallets, u64::MAX);
        assert!(record.is_balanced());
    }

    #[test]
    fn test_stats_large_totals() {
        let half = u64::MAX / 2 + 1;
        let records = vec![record("a", half), record("b", half)];
        let stats = AgendaStats::from_records(&records);

        assert_eq!(stats.count, 2);
        assert_eq!(stats.total, u64::MAX);
        assert_eq!(stats.average, half);
        assert_eq!(stats.maximum, half);
        assert_eq!(stats.minimum, half);
    }

    #[test]
    fn test_source_contracts() {
        assert!(SourceId::Base1.requires_approval());
        assert!(SourceId::Base2.requires_approval());
        assert!(!SourceId::Base3.requires_approval());
        assert_eq!(SourceId::Base2.date_column(), "Data Agenda");
        assert_eq!(SourceId::Base3.date_column(), "Data");
        assert_eq!(SourceId::Base3.to_string(), "Base3");
    }
}
