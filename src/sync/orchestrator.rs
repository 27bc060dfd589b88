//! Sync orchestrator that ties the sheets, the engine and storage together

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::consolidation::consolidate;
use crate::sync::SyncConfig;
use crate::traits::*;
use crate::types::*;

/// Runs full-recompute syncs and serves the stored agenda
pub struct AgendaSync<S: AgendaStorage, F: SheetSource> {
    storage: S,
    source: F,
    config: SyncConfig,
}

impl<S: AgendaStorage, F: SheetSource> AgendaSync<S, F> {
    /// Create a sync with the default sheet names
    pub fn new(storage: S, source: F) -> Self {
        Self {
            storage,
            source,
            config: SyncConfig::default(),
        }
    }

    /// Create a sync with a custom configuration
    pub fn with_config(storage: S, source: F, config: SyncConfig) -> AgendaResult<Self> {
        config.validate()?;
        Ok(Self {
            storage,
            source,
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Fetch all three sheets, consolidate them and replace the stored agenda.
    ///
    /// A sheet that cannot be fetched contributes no rows. If none of the
    /// sheets can be fetched the sync fails and storage is left untouched.
    #[tracing::instrument(skip(self))]
    pub async fn sync(&mut self) -> AgendaResult<SyncReport> {
        let sync_id = Uuid::new_v4();
        let mut failed_sources = Vec::new();

        let base1 = self.fetch_or_empty(SourceId::Base1, &mut failed_sources).await;
        let base2 = self.fetch_or_empty(SourceId::Base2, &mut failed_sources).await;
        let base3 = self.fetch_or_empty(SourceId::Base3, &mut failed_sources).await;

        if failed_sources.len() == SourceId::ALL.len() {
            return Err(AgendaError::Fetch(
                "No source sheet could be fetched".to_string(),
            ));
        }

        let records = consolidate(&base1, &base2, &base3);
        self.storage.replace_all(&records).await?;

        info!(
            %sync_id,
            record_count = records.len(),
            failed = failed_sources.len(),
            "Agenda sync completed"
        );

        Ok(SyncReport::completed(sync_id, records.len(), failed_sources))
    }

    async fn fetch_or_empty(
        &self,
        source: SourceId,
        failed_sources: &mut Vec<SourceId>,
    ) -> Vec<RawRow> {
        let sheet_name = self.config.sheet_name(source);
        match self.source.fetch_rows(sheet_name).await {
            Ok(rows) => {
                debug!(%source, sheet = sheet_name, rows = rows.len(), "Fetched sheet");
                rows
            }
            Err(error) => {
                warn!(
                    %source,
                    sheet = sheet_name,
                    %error,
                    "Sheet fetch failed, continuing without it"
                );
                failed_sources.push(source);
                Vec::new()
            }
        }
    }

    /// The stored consolidated agenda
    pub async fn consolidated(&self) -> AgendaResult<Vec<ConsolidatedRecord>> {
        self.storage.list_records().await
    }

    /// Statistics over the stored totals
    pub async fn stats(&self) -> AgendaResult<AgendaStats> {
        let records = self.storage.list_records().await?;
        Ok(AgendaStats::from_records(&records))
    }

    /// Look up the stored record for one date key
    pub async fn record(&self, date_key: &str) -> AgendaResult<Option<ConsolidatedRecord>> {
        self.storage.get_record(date_key).await
    }
}
