//! Business-day scheduling of day-counted deadlines.

use chrono::NaiveDate;
use guidance::compose;
use guidance::composer::calendar::{
    federal_holidays, is_federal_holiday, is_weekend, next_business_day, schedule,
};

use crate::common::detained_arrest_case;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn holiday_list_has_eleven_entries() {
    assert_eq!(federal_holidays(2025).len(), 11);
    assert_eq!(federal_holidays(2026).len(), 11);
}

#[test]
fn floating_holidays_land_on_the_right_monday() {
    let holidays = federal_holidays(2025);
    // MLK Day: third Monday of January.
    assert!(holidays.contains(&date(2025, 1, 20)));
    // Memorial Day: last Monday of May.
    assert!(holidays.contains(&date(2025, 5, 26)));
    // Thanksgiving: fourth Thursday of November.
    assert!(holidays.contains(&date(2025, 11, 27)));
}

#[test]
fn saturday_fourth_of_july_observes_friday() {
    // July 4, 2026 is a Saturday; observed Friday July 3.
    assert!(is_federal_holiday(date(2026, 7, 3)));
    assert!(!is_federal_holiday(date(2026, 7, 4)));
}

#[test]
fn weekend_detection() {
    assert!(is_weekend(date(2025, 10, 4)));
    assert!(is_weekend(date(2025, 10, 5)));
    assert!(!is_weekend(date(2025, 10, 6)));
}

#[test]
fn next_business_day_keeps_weekdays() {
    assert_eq!(next_business_day(date(2025, 10, 8)), date(2025, 10, 8));
}

#[test]
fn next_business_day_rolls_weekends_and_holidays() {
    // Saturday rolls to Monday.
    assert_eq!(next_business_day(date(2025, 10, 4)), date(2025, 10, 6));
    // Christmas 2025 is a Thursday; rolls to Friday.
    assert_eq!(next_business_day(date(2025, 12, 25)), date(2025, 12, 26));
    // Saturday before Columbus Day rolls all the way to Tuesday.
    assert_eq!(next_business_day(date(2025, 10, 11)), date(2025, 10, 14));
}

#[test]
fn schedule_dates_the_arraignment_deadline() {
    let doc = compose(&detained_arrest_case());
    // Wednesday start: two days later is Friday, already a business day.
    let scheduled = schedule(&doc, date(2025, 10, 8));
    assert_eq!(scheduled.len(), 1);
    assert_eq!(scheduled[0].title, "Arraignment");
    assert_eq!(scheduled[0].due, date(2025, 10, 10));
}

#[test]
fn schedule_rolls_landing_dates_forward() {
    let doc = compose(&detained_arrest_case());
    // Thursday start: lands Saturday, rolls over Columbus Day to Tuesday.
    let scheduled = schedule(&doc, date(2025, 10, 9));
    assert_eq!(scheduled[0].due, date(2025, 10, 14));
}

#[test]
fn undated_deadlines_are_not_scheduled() {
    let doc = compose(&detained_arrest_case());
    let scheduled = schedule(&doc, date(2025, 10, 8));
    assert!(scheduled.iter().all(|d| d.title != "Discovery deadline"));
}
