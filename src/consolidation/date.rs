//! Parsing of `DD/MM/YYYY` agenda dates

use chrono::NaiveDate;

/// Earliest year the agenda calendar accepts
pub const MIN_YEAR: i32 = 1;
/// Latest year the agenda calendar accepts
pub const MAX_YEAR: i32 = 9999;

/// Parse a `DD/MM/YYYY` agenda date.
///
/// Returns `None` for anything that is not three `/`-separated integers
/// forming a real calendar date. Years are taken literally, so `"01/02/05"`
/// is the year 5, not 2005.
pub fn parse_agenda_date(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    let day = parse_part(parts[0])?;
    let month = parse_part(parts[1])?;
    let year = parse_part(parts[2])?;

    let year = i32::try_from(year).ok()?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }

    NaiveDate::from_ymd_opt(
        year,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )
}

fn parse_part(part: &str) -> Option<i64> {
    part.trim().parse().ok()
}
