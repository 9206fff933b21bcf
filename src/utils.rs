use std::collections::HashSet;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use crate::types::TimelineYear;

pub fn years_ago(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() - years;
    // Feb 29 clamps to Feb 28 in non-leap target years
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap()
}

/// Same calendar day in every year from `start_year + 1` up to the year
/// before `today`, most recent first. Empty when `today` is not at least a
/// year past `start_year`.
pub fn anniversary_dates(today: NaiveDate, start_year: i32) -> Vec<NaiveDate> {
    let years_back = today.year() - start_year;
    if years_back < 1 {
        return Vec::new();
    }

    (1..=years_back).map(|k| years_ago(today, k)).collect()
}

/// True when the timeline was never refreshed, or was last refreshed on a
/// different calendar day than `now` in the given time zone.
pub fn needs_refresh<Tz: TimeZone>(
    last_refreshed_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    tz: &Tz,
) -> bool {
    match last_refreshed_at {
        Some(last) => last.with_timezone(tz).date_naive() != now.with_timezone(tz).date_naive(),
        None => true,
    }
}

pub fn remove_duplicate_years(years: &mut Vec<TimelineYear>) {
    let mut seen_ids = HashSet::new();
    years.retain(|year| seen_ids.insert(year.id()));
}

pub fn get_date_from_string(date: Option<String>) -> NaiveDate {
    match date {
        Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .unwrap_or_else(|_| Utc::now().date_naive()),
        None => Utc::now().date_naive(),
    }
}
