//! Validation utilities

use std::collections::HashSet;

use crate::types::*;

/// Longest sheet name accepted in configuration
pub const MAX_SHEET_NAME_LEN: usize = 100;

/// Validate that a sheet name is usable
pub fn validate_sheet_name(name: &str) -> AgendaResult<()> {
    if name.trim().is_empty() {
        return Err(AgendaError::Config(
            "Sheet name cannot be empty".to_string(),
        ));
    }

    if name.len() > MAX_SHEET_NAME_LEN {
        return Err(AgendaError::Config(format!(
            "Sheet name cannot exceed {} characters",
            MAX_SHEET_NAME_LEN
        )));
    }

    Ok(())
}

/// Validate that no two sources read from the same sheet
pub fn validate_distinct_sheets<'a, I>(names: I) -> AgendaResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(AgendaError::Config(format!(
                "Sheet '{}' is assigned to more than one source",
                name
            )));
        }
    }
    Ok(())
}
