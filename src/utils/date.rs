use chrono::NaiveDate;

/// Name of the dated output folder, e.g. `26.10.16`.
pub fn folder_name(d: NaiveDate) -> String {
    d.format("%y.%m.%d").to_string()
}

/// Date stamp written on every LabRadar record, e.g. `10-16-2026`.
pub fn stamp(d: NaiveDate) -> String {
    d.format("%m-%d-%Y").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
