//! Weekday adjustment applied to finished records

use chrono::{Datelike, NaiveDate, Weekday};

use crate::types::ConsolidatedRecord;

/// Pallets added to Base3 on bonus weekdays
pub const WEEKDAY_BONUS_PALLETS: u64 = 100;

/// Whether a date falls on a bonus weekday (Wednesday or Friday)
pub fn is_bonus_day(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Wed | Weekday::Fri)
}

/// Add the weekday bonus to a finished record.
///
/// Unparsable dates are left alone. Returns whether the bonus was applied.
/// Must run once per record, after every source has been ingested.
pub fn apply_weekday_bonus(record: &mut ConsolidatedRecord, date: Option<NaiveDate>) -> bool {
    match date {
        Some(date) if is_bonus_day(date) => {
            record.base3_pallets = record.base3_pallets.saturating_add(WEEKDAY_BONUS_PALLETS);
            record.total_pallets = record.total_pallets.saturating_add(WEEKDAY_BONUS_PALLETS);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceId;

    fn record_with_base3(date_key: &str, pallets: u64) -> ConsolidatedRecord {
        let mut record = ConsolidatedRecord::new(date_key.to_string());
        record.add_pallets(SourceId::Base3, pallets);
        record
    }

    #[test]
    fn test_wednesday_gets_bonus() {
        let mut record = record_with_base3("06/03/2024", 20);
        let applied = apply_weekday_bonus(&mut record, NaiveDate::from_ymd_opt(2024, 3, 6));

        assert!(applied);
        assert_eq!(record.base3_pallets, 120);
        assert_eq!(record.total_pallets, 120);
        assert!(record.is_balanced());
    }

    #[test]
    fn test_friday_gets_bonus() {
        let mut record = ConsolidatedRecord::new("08/03/2024".to_string());
        assert!(apply_weekday_bonus(
            &mut record,
            NaiveDate::from_ymd_opt(2024, 3, 8)
        ));
        assert_eq!(record.base3_pallets, WEEKDAY_BONUS_PALLETS);
        assert_eq!(record.total_pallets, WEEKDAY_BONUS_PALLETS);
    }

    #[test]
    fn test_other_weekdays_unchanged() {
        // Mon 04/03/2024 through Sun 10/03/2024, skipping Wed and Fri
        for day in [4, 5, 7, 9, 10] {
            let mut record = record_with_base3("x", 3);
            let date = NaiveDate::from_ymd_opt(2024, 3, day);
            assert!(!apply_weekday_bonus(&mut record, date));
            assert_eq!(record.total_pallets, 3);
        }
    }

    #[test]
    fn test_unparsable_date_is_noop() {
        let mut record = record_with_base3("not a date", 5);
        assert!(!apply_weekday_bonus(&mut record, None));
        assert_eq!(record.base3_pallets, 5);
        assert_eq!(record.total_pallets, 5);
    }
}
