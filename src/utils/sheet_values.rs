//! Decoding of tabular sheet payloads into raw rows

use serde::{Deserialize, Serialize};

use crate::types::*;

/// A rectangular-ish block of cell values as returned by a spreadsheet API.
///
/// The first row holds the column headers. Rows may be shorter than the
/// header when trailing cells are empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetValues {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

impl SheetValues {
    /// Build a grid from a header row and data rows
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut values = Vec::with_capacity(rows.len() + 1);
        values.push(header);
        values.extend(rows);
        Self {
            values,
            ..Self::default()
        }
    }

    /// Parse a JSON payload
    pub fn from_json(payload: &str) -> AgendaResult<Self> {
        serde_json::from_str(payload)
            .map_err(|e| AgendaError::Fetch(format!("Invalid sheet payload: {}", e)))
    }

    /// Map each data row onto the header.
    ///
    /// Missing trailing cells become empty strings; cells beyond the header
    /// are dropped.
    pub fn into_rows(self) -> Vec<RawRow> {
        let mut grid = self.values.into_iter();
        let Some(header) = grid.next() else {
            return Vec::new();
        };

        grid.map(|cells| {
            header
                .iter()
                .enumerate()
                .map(|(i, column)| (column.clone(), cells.get(i).cloned().unwrap_or_default()))
                .collect()
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_has_no_rows() {
        let values = SheetValues::from_json(r#"{"range": "Base1!A1:Z1000"}"#).unwrap();
        assert!(values.into_rows().is_empty());
    }

    #[test]
    fn test_header_only_has_no_rows() {
        let values = SheetValues::new(vec!["Data".to_string(), "Pallet".to_string()], vec![]);
        assert!(values.into_rows().is_empty());
    }

    #[test]
    fn test_short_rows_are_padded() {
        let payload = r#"{
            "range": "Base1!A1:C3",
            "majorDimension": "ROWS",
            "values": [
                ["Status", "Data Agenda", "Pallet"],
                ["Aprovado", "05/03/2024", "10"],
                ["Aprovado"]
            ]
        }"#;
        let values = SheetValues::from_json(payload).unwrap();
        assert_eq!(values.major_dimension.as_deref(), Some("ROWS"));

        let rows = values.into_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Pallet"], "10");
        assert_eq!(rows[1]["Status"], "Aprovado");
        assert_eq!(rows[1]["Data Agenda"], "");
        assert_eq!(rows[1]["Pallet"], "");
    }

    #[test]
    fn test_extra_cells_are_dropped() {
        let values = SheetValues::new(
            vec!["Data".to_string()],
            vec![vec!["05/03/2024".to_string(), "stray".to_string()]],
        );
        let rows = values.into_rows();
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0]["Data"], "05/03/2024");
    }

    #[test]
    fn test_malformed_payload_is_fetch_error() {
        let err = SheetValues::from_json("not json").unwrap_err();
        assert!(matches!(err, AgendaError::Fetch(_)));
    }
}
