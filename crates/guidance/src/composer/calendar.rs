//! Deadline calendaring.
//!
//! Maps the approximate `days_from_now` counts on composed deadlines onto
//! concrete due dates. A landing day on a weekend or federal holiday rolls
//! forward to the next business day, matching how court deadline rules
//! count. Pure in the `from` date so composition itself stays clockless;
//! callers that want real dates pass today.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use shared_types::{DatedDeadline, GuidanceDocument};

/// Schedule every day-counted deadline in the document from a start date.
/// Deadlines without a day count are skipped; they have no fixed date.
pub fn schedule(document: &GuidanceDocument, from: NaiveDate) -> Vec<DatedDeadline> {
    document
        .deadlines
        .iter()
        .filter_map(|entry| {
            let days = entry.days_from_now?;
            let landing = from.checked_add_signed(Duration::days(days))?;
            Some(DatedDeadline {
                title: entry.title.clone(),
                detail: entry.detail.clone(),
                priority: entry.priority,
                due: next_business_day(landing),
            })
        })
        .collect()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_federal_holiday(date: NaiveDate) -> bool {
    federal_holidays(date.year()).contains(&date)
}

/// First day on or after `date` that is neither a weekend nor a federal
/// holiday.
pub fn next_business_day(date: NaiveDate) -> NaiveDate {
    let mut current = date;
    while is_weekend(current) || is_federal_holiday(current) {
        current = match current.succ_opt() {
            Some(next) => next,
            None => return current,
        };
    }
    current
}

/// Observed dates of the eleven federal holidays in a year, sorted.
/// Fixed-date holidays shift to the nearest weekday when they land on a
/// weekend (Saturday observes Friday, Sunday observes Monday).
pub fn federal_holidays(year: i32) -> Vec<NaiveDate> {
    let mut holidays: Vec<NaiveDate> = [
        fixed_observed(year, 1, 1),   // New Year's Day
        nth_weekday(year, 1, Weekday::Mon, 3),  // Martin Luther King Jr. Day
        nth_weekday(year, 2, Weekday::Mon, 3),  // Presidents' Day
        last_weekday(year, 5, Weekday::Mon),    // Memorial Day
        fixed_observed(year, 6, 19),  // Juneteenth
        fixed_observed(year, 7, 4),   // Independence Day
        nth_weekday(year, 9, Weekday::Mon, 1),  // Labor Day
        nth_weekday(year, 10, Weekday::Mon, 2), // Columbus Day
        fixed_observed(year, 11, 11), // Veterans Day
        nth_weekday(year, 11, Weekday::Thu, 4), // Thanksgiving Day
        fixed_observed(year, 12, 25), // Christmas Day
    ]
    .into_iter()
    .flatten()
    .collect();
    holidays.sort();
    holidays
}

fn fixed_observed(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    match date.weekday() {
        Weekday::Sat => date.pred_opt(),
        Weekday::Sun => date.succ_opt(),
        _ => Some(date),
    }
}

fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = (weekday.num_days_from_monday() as i32
        - first.weekday().num_days_from_monday() as i32
        + 7)
        % 7;
    NaiveDate::from_ymd_opt(year, month, 1 + offset as u32 + (n - 1) * 7)
}

fn last_weekday(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = next_month.pred_opt()?;
    let back = (last.weekday().num_days_from_monday() as i32
        - weekday.num_days_from_monday() as i32
        + 7)
        % 7;
    NaiveDate::from_ymd_opt(year, month, last.day() - back as u32)
}
