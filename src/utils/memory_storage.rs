//! In-memory collaborators for testing and development

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;
use crate::utils::SheetValues;

/// In-memory agenda storage for testing and development
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    records: Arc<RwLock<Vec<ConsolidatedRecord>>>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) -> AgendaResult<()> {
        self.records
            .write()
            .map_err(|_| poisoned())?
            .clear();
        Ok(())
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> AgendaError {
    AgendaError::Storage("Agenda storage lock poisoned".to_string())
}

#[async_trait]
impl AgendaStorage for MemoryStorage {
    async fn replace_all(&mut self, records: &[ConsolidatedRecord]) -> AgendaResult<()> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.date_key.as_str()) {
                return Err(AgendaError::Storage(format!(
                    "Duplicate agenda date: {}",
                    record.date_key
                )));
            }
        }

        let mut stored = self.records.write().map_err(|_| poisoned())?;
        *stored = records.to_vec();
        Ok(())
    }

    async fn list_records(&self) -> AgendaResult<Vec<ConsolidatedRecord>> {
        Ok(self.records.read().map_err(|_| poisoned())?.clone())
    }

    async fn get_record(&self, date_key: &str) -> AgendaResult<Option<ConsolidatedRecord>> {
        Ok(self
            .records
            .read()
            .map_err(|_| poisoned())?
            .iter()
            .find(|record| record.date_key == date_key)
            .cloned())
    }

    async fn count_records(&self) -> AgendaResult<usize> {
        Ok(self.records.read().map_err(|_| poisoned())?.len())
    }
}

/// In-memory sheet source; sheets that were never registered fail to fetch
#[derive(Debug, Clone, Default)]
pub struct MemorySheetSource {
    sheets: HashMap<String, Vec<RawRow>>,
}

impl MemorySheetSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sheet from already-mapped rows
    pub fn with_rows(mut self, sheet_name: impl Into<String>, rows: Vec<RawRow>) -> Self {
        self.sheets.insert(sheet_name.into(), rows);
        self
    }

    /// Register a sheet from a header-plus-rows grid
    pub fn with_values(self, sheet_name: impl Into<String>, values: SheetValues) -> Self {
        self.with_rows(sheet_name, values.into_rows())
    }

    /// Drop a sheet so that fetching it fails
    pub fn remove_sheet(&mut self, sheet_name: &str) -> Option<Vec<RawRow>> {
        self.sheets.remove(sheet_name)
    }
}

#[async_trait]
impl SheetSource for MemorySheetSource {
    async fn fetch_rows(&self, sheet_name: &str) -> AgendaResult<Vec<RawRow>> {
        self.sheets
            .get(sheet_name)
            .cloned()
            .ok_or_else(|| AgendaError::Fetch(format!("Sheet not found: {}", sheet_name)))
    }
}
