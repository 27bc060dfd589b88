//! Sync configuration

use serde::{Deserialize, Serialize};

use crate::types::*;
use crate::utils::validation::{validate_distinct_sheets, validate_sheet_name};

/// Names of the sheets each source is read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub base1_sheet: String,
    pub base2_sheet: String,
    pub base3_sheet: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base1_sheet: SourceId::Base1.default_sheet_name().to_string(),
            base2_sheet: SourceId::Base2.default_sheet_name().to_string(),
            base3_sheet: SourceId::Base3.default_sheet_name().to_string(),
        }
    }
}

impl SyncConfig {
    /// Load and validate a configuration from JSON; omitted fields keep
    /// their defaults
    pub fn from_json(json: &str) -> AgendaResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AgendaError::Config(format!("Invalid sync configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Sheet name configured for a source
    pub fn sheet_name(&self, source: SourceId) -> &str {
        match source {
            SourceId::Base1 => &self.base1_sheet,
            SourceId::Base2 => &self.base2_sheet,
            SourceId::Base3 => &self.base3_sheet,
        }
    }

    /// Check every sheet name and that no sheet feeds two sources
    pub fn validate(&self) -> AgendaResult<()> {
        for source in SourceId::ALL {
            validate_sheet_name(self.sheet_name(source))?;
        }
        validate_distinct_sheets(SourceId::ALL.iter().map(|s| self.sheet_name(*s)))
    }
}
