use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

pub const UNKNOWN_DECADE: &str = "Unknown Decade";
pub const MIN_STATS_YEAR: i32 = 1900;
pub const MAX_STATS_YEAR: i32 = 2025;

static YEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("static regex"));

/// Parse a `YYYY-MM-DD` release date. Anything else is unknown.
pub fn parse_release_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Release year from a full date, or failing that the first `19xx`/`20xx`
/// word in the string.
pub fn release_year(raw: Option<&str>) -> Option<i32> {
    if let Some(date) = parse_release_date(raw) {
        return Some(date.year());
    }
    let m = YEAR_TOKEN.find(raw?)?;
    m.as_str().parse().ok()
}

pub fn decade_label(year: i32) -> String {
    format!("{}s", year.div_euclid(10) * 10)
}

/// Year usable for decade statistics: present and inside 1900..=2025.
pub fn stats_year(raw: Option<&str>) -> Option<i32> {
    release_year(raw).filter(|y| (MIN_STATS_YEAR..=MAX_STATS_YEAR).contains(y))
}

/// Release date for ordering: the full date, or January 1 of a bare year.
pub fn release_date_or_year(raw: Option<&str>) -> Option<NaiveDate> {
    parse_release_date(raw).or_else(|| NaiveDate::from_ymd_opt(release_year(raw)?, 1, 1))
}

/// Sort key for release dates; unknown dates sort as the earliest date.
pub fn release_sort_key(raw: Option<&str>) -> NaiveDate {
    release_date_or_year(raw).unwrap_or(NaiveDate::MIN)
}

/// "March 1, 1994". Unparseable input is shown as entered.
pub fn format_release_date(raw: &str) -> String {
    match parse_release_date(Some(raw)) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.trim().to_string(),
    }
}
