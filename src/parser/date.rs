use chrono::NaiveDate;

/// The export writes watch dates as `month/day/2-digit-year`.
const DATE_FORMAT: &str = "%m/%d/%y";

/// Parse a date cell, or `None` if it does not fit the export's format.
/// A bad date never drops the record; the caller keeps it with a null date.
pub fn normalize_date(date_text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_text.trim(), DATE_FORMAT).ok()
}
