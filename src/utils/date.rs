use chrono::NaiveDate;

const SV_MONTHS: [&str; 12] = [
    "januari",
    "februari",
    "mars",
    "april",
    "maj",
    "juni",
    "juli",
    "augusti",
    "september",
    "oktober",
    "november",
    "december",
];

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Swedish month name for a zero-based month index.
pub fn swedish_month_name(month0: u32) -> &'static str {
    SV_MONTHS.get(month0 as usize).copied().unwrap_or("?")
}
