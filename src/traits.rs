//! Traits for the storage and sheet-fetching collaborators

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for the consolidated agenda
///
/// Any backend (SQL database, key-value store, in-memory, etc.) can hold the
/// agenda by implementing these methods. Records are keyed uniquely by
/// `date_key`.
#[async_trait]
pub trait AgendaStorage: Send + Sync {
    /// Discard every stored record and store `records` in the given order.
    ///
    /// On failure the previous contents must remain intact.
    async fn replace_all(&mut self, records: &[ConsolidatedRecord]) -> AgendaResult<()>;

    /// List all stored records in stored order
    async fn list_records(&self) -> AgendaResult<Vec<ConsolidatedRecord>>;

    /// Get a record by its date key
    async fn get_record(&self, date_key: &str) -> AgendaResult<Option<ConsolidatedRecord>>;

    /// Number of stored records
    async fn count_records(&self) -> AgendaResult<usize>;
}

/// Source of raw sheet rows
///
/// Implementations wrap whatever transport reaches the spreadsheets. A sheet
/// that cannot be read at all is reported as an error; the sync orchestrator
/// decides how to degrade.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetch every data row of the named sheet
    async fn fetch_rows(&self, sheet_name: &str) -> AgendaResult<Vec<RawRow>>;
}
