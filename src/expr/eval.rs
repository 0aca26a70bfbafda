use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use super::ast::{Expr, Month, Weekday};
use crate::calendar;

/// Returns true when `t` satisfies `expr`. Total over every instant.
pub fn evaluate(expr: &Expr, t: NaiveDateTime) -> bool {
    match expr {
        Expr::Day(n) => normalize_day(*n, t) == day_of(t),
        Expr::Week(n) => normalize_week(*n, t) == i64::from(calendar::week_of_month(t)),
        Expr::Weekday(w) => weekday_of(t) == *w,
        Expr::Month(m) => month_of(t) == *m,
        Expr::Year(y) => t.year() == *y,
        Expr::Date(d) => t.date() == *d,
        Expr::DayRange { start, end } => {
            in_range(normalize_day(*start, t), day_of(t), normalize_day(*end, t))
        }
        Expr::WeekdayRange { start, end } => in_range(*start, weekday_of(t), *end),
        Expr::MonthRange { start, end } => in_range(*start, month_of(t), *end),
        Expr::YearRange { start, end } => in_range(*start, t.year(), *end),
        Expr::Or(children) => children.iter().any(|child| evaluate(child, t)),
        Expr::And(children) => children.iter().all(|child| evaluate(child, t)),
        Expr::Not(child) => !evaluate(child, t),
    }
}

impl Expr {
    pub fn includes(&self, t: NaiveDateTime) -> bool {
        evaluate(self, t)
    }

    /// Evaluates the expression at midnight of `date`.
    pub fn includes_date(&self, date: NaiveDate) -> bool {
        evaluate(self, date.and_time(NaiveTime::MIN))
    }
}

/// Resolves a possibly negative day against the month containing `t`.
/// Zero and positive values pass through unchanged. Widened to `i64` so any
/// `i32` input resolves without overflow.
fn normalize_day(day: i32, t: NaiveDateTime) -> i64 {
    let day = i64::from(day);
    if day < 0 {
        i64::from(t.num_days_in_month()) + day + 1
    } else {
        day
    }
}

fn normalize_week(week: i32, t: NaiveDateTime) -> i64 {
    let week = i64::from(week);
    if week < 0 {
        i64::from(calendar::week_of_month(calendar::end_of_month(t))) + week + 1
    } else {
        week
    }
}

fn in_range<T: Ord>(start: T, value: T, end: T) -> bool {
    start <= value && value <= end
}

fn day_of(t: NaiveDateTime) -> i64 {
    i64::from(t.day())
}

fn weekday_of(t: NaiveDateTime) -> Weekday {
    Weekday::from(t.weekday())
}

fn month_of(t: NaiveDateTime) -> Month {
    Month::ALL[t.month0() as usize]
}
