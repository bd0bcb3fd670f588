use chrono::NaiveDate;

/// Parses the `YYYY-MM-DD` value produced by `<input type="date">`.
pub fn parse_form_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}
