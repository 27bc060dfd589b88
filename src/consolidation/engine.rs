//! The consolidation pass: ingest, adjust, order

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::consolidation::bonus::apply_weekday_bonus;
use crate::consolidation::date::parse_agenda_date;
use crate::consolidation::rows::{normalize_rows, PalletEntry};
use crate::types::{ConsolidatedRecord, RawRow, SourceId};

/// Consolidate the three sources into per-date records.
///
/// Rows are normalized per source contract and summed by their verbatim date
/// key. Once everything is ingested the weekday bonus runs over each record a
/// single time. The output is ordered by calendar date with unparsable keys
/// first; among those, by the key itself.
pub fn consolidate(
    base1: &[RawRow],
    base2: &[RawRow],
    base3: &[RawRow],
) -> Vec<ConsolidatedRecord> {
    let entries = normalize_rows(SourceId::Base1, base1)
        .chain(normalize_rows(SourceId::Base2, base2))
        .chain(normalize_rows(SourceId::Base3, base3));

    let accumulated = accumulate(entries);

    let mut dated: Vec<(Option<NaiveDate>, ConsolidatedRecord)> = accumulated
        .into_values()
        .map(|mut record| {
            let date = parse_agenda_date(&record.date_key);
            apply_weekday_bonus(&mut record, date);
            (date, record)
        })
        .collect();

    // None orders before every Some, which puts unparsable keys first
    dated.sort_by(|(a_date, a), (b_date, b)| {
        a_date.cmp(b_date).then_with(|| a.date_key.cmp(&b.date_key))
    });

    dated.into_iter().map(|(_, record)| record).collect()
}

/// Sum normalized entries by date key. No adjustments happen here.
pub fn accumulate<I>(entries: I) -> HashMap<String, ConsolidatedRecord>
where
    I: IntoIterator<Item = PalletEntry>,
{
    let mut accumulated: HashMap<String, ConsolidatedRecord> = HashMap::new();

    for entry in entries {
        accumulated
            .entry(entry.date_key)
            .or_insert_with_key(|key| ConsolidatedRecord::new(key.clone()))
            .add_pallets(entry.source, entry.pallets);
    }

    accumulated
}
