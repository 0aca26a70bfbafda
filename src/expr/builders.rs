//! Any-of helpers that combine several leaves of one kind with `Or`.

use chrono::NaiveDate;

use super::ast::{Expr, Month, Weekday};

pub fn days(days: impl IntoIterator<Item = i32>) -> Expr {
    Expr::or(days.into_iter().map(Expr::Day))
}

pub fn weeks(weeks: impl IntoIterator<Item = i32>) -> Expr {
    Expr::or(weeks.into_iter().map(Expr::Week))
}

pub fn weekdays<W: Into<Weekday>>(weekdays: impl IntoIterator<Item = W>) -> Expr {
    Expr::or(weekdays.into_iter().map(|w| Expr::Weekday(w.into())))
}

pub fn months<M: Into<Month>>(months: impl IntoIterator<Item = M>) -> Expr {
    Expr::or(months.into_iter().map(|m| Expr::Month(m.into())))
}

pub fn years(years: impl IntoIterator<Item = i32>) -> Expr {
    Expr::or(years.into_iter().map(Expr::Year))
}

pub fn dates(dates: impl IntoIterator<Item = NaiveDate>) -> Expr {
    Expr::or(dates.into_iter().map(Expr::Date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days() {
        assert_eq!(days([1, 15, -1]), Expr::Or(vec![Expr::Day(1), Expr::Day(15), Expr::Day(-1)]));
    }

    #[test]
    fn test_weekdays_accepts_chrono_weekdays() {
        let expr = weekdays([chrono::Weekday::Sat, chrono::Weekday::Sun]);
        assert_eq!(
            expr,
            Expr::Or(vec![Expr::Weekday(Weekday::Saturday), Expr::Weekday(Weekday::Sunday)])
        );
    }

    #[test]
    fn test_months_and_years() {
        assert_eq!(
            months([Month::June, Month::July]),
            Expr::Or(vec![Expr::Month(Month::June), Expr::Month(Month::July)])
        );
        assert_eq!(
            years(2016..=2018),
            Expr::Or(vec![Expr::Year(2016), Expr::Year(2017), Expr::Year(2018)])
        );
        assert_eq!(weeks([1, -1]).kind(), "Or");
    }

    #[test]
    fn test_empty_builder_matches_nothing() {
        let t = NaiveDate::from_ymd_opt(2018, 10, 2).unwrap();
        assert!(!dates([]).includes_date(t));
        assert!(dates([t]).includes_date(t));
    }
}
