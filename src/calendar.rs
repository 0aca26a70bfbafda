//! Calendar boundary arithmetic over `NaiveDateTime`.
//!
//! Weeks start on Monday. `end_of_*` returns the last nanosecond of the period.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

const LAST_NANO_OF_DAY: NaiveTime = match NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999) {
    Some(t) => t,
    None => NaiveTime::MIN,
};

/// Gregorian leap-year rule. Years outside chrono's range report `false`.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|d| d.leap_year())
}

/// Number of days in `month` (1-based) of `year`. Out-of-range months yield 0.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1).map_or(0, |d| u32::from(d.num_days_in_month()))
}

fn days_in_year(date: NaiveDate) -> u64 {
    if date.leap_year() {
        366
    } else {
        365
    }
}

fn start_of(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of(date: NaiveDate) -> NaiveDateTime {
    date.and_time(LAST_NANO_OF_DAY)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    let remaining = u32::from(date.num_days_in_month()) - date.day();
    date + Days::new(u64::from(remaining))
}

fn first_of_quarter(date: NaiveDate) -> NaiveDate {
    let offset = (date.month() - 1) % 3;
    first_of_month(date) - Months::new(offset)
}

fn first_of_year(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.ordinal0()))
}

fn monday_of(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
        .unwrap_or(NaiveDate::MIN)
}

fn sunday_of(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(6 - date.weekday().num_days_from_monday())))
        .unwrap_or(NaiveDate::MAX)
}

pub fn beginning_of_minute(t: NaiveDateTime) -> NaiveDateTime {
    t - TimeDelta::seconds(i64::from(t.second())) - TimeDelta::nanoseconds(i64::from(t.nanosecond()))
}

pub fn beginning_of_hour(t: NaiveDateTime) -> NaiveDateTime {
    beginning_of_minute(t) - TimeDelta::minutes(i64::from(t.minute()))
}

pub fn beginning_of_day(t: NaiveDateTime) -> NaiveDateTime {
    start_of(t.date())
}

/// Midnight of the Monday starting the week that contains `t`.
pub fn beginning_of_week(t: NaiveDateTime) -> NaiveDateTime {
    start_of(monday_of(t.date()))
}

pub fn beginning_of_month(t: NaiveDateTime) -> NaiveDateTime {
    start_of(first_of_month(t.date()))
}

pub fn beginning_of_quarter(t: NaiveDateTime) -> NaiveDateTime {
    start_of(first_of_quarter(t.date()))
}

pub fn beginning_of_year(t: NaiveDateTime) -> NaiveDateTime {
    start_of(first_of_year(t.date()))
}

pub fn end_of_minute(t: NaiveDateTime) -> NaiveDateTime {
    beginning_of_minute(t) + TimeDelta::nanoseconds(59_999_999_999)
}

pub fn end_of_hour(t: NaiveDateTime) -> NaiveDateTime {
    beginning_of_hour(t) + TimeDelta::nanoseconds(3_599_999_999_999)
}

pub fn end_of_day(t: NaiveDateTime) -> NaiveDateTime {
    end_of(t.date())
}

/// Last nanosecond of the Sunday closing the week that contains `t`.
pub fn end_of_week(t: NaiveDateTime) -> NaiveDateTime {
    end_of(sunday_of(t.date()))
}

pub fn end_of_month(t: NaiveDateTime) -> NaiveDateTime {
    end_of(last_of_month(t.date()))
}

pub fn end_of_quarter(t: NaiveDateTime) -> NaiveDateTime {
    let last_month = first_of_quarter(t.date()) + Months::new(2);
    end_of(last_of_month(last_month))
}

pub fn end_of_year(t: NaiveDateTime) -> NaiveDateTime {
    let first = first_of_year(t.date());
    end_of(first + Days::new(days_in_year(first) - 1))
}

/// Midnight of the Monday of `t`'s week. Same instant as [`beginning_of_week`].
pub fn monday(t: NaiveDateTime) -> NaiveDateTime {
    beginning_of_week(t)
}

/// Midnight of the Sunday closing `t`'s week.
pub fn sunday(t: NaiveDateTime) -> NaiveDateTime {
    start_of(sunday_of(t.date()))
}

pub fn end_of_sunday(t: NaiveDateTime) -> NaiveDateTime {
    end_of_week(t)
}

/// 1-based position of `t`'s ISO week relative to the ISO week of the first
/// day of its month.
///
/// Computed as `1 + iso_week(t) - iso_week(beginning_of_month(t))` with no
/// year correction, so months whose days straddle an ISO week-year boundary
/// (early January, late December) can produce values outside `1..=6`.
pub fn week_of_month(t: NaiveDateTime) -> i32 {
    let first_week = beginning_of_month(t).iso_week().week() as i32;
    let this_week = t.iso_week().week() as i32;
    1 + this_week - first_week
}
