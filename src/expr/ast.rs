use std::fmt;

use chrono::NaiveDate;

use crate::error::{RecurError, Result};

/// A temporal expression: a predicate over calendar instants.
///
/// Leaves and ranges are immutable values. `Or` and `And` can grow after
/// construction through [`Expr::push`], which needs `&mut self`; share an
/// `Arc<Expr>` when a tree has to be read from several threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Day of month starting at 1. Negative values count back from the end
    /// of the evaluated month, so `-1` is always the last day.
    Day(i32),
    /// ISO week within the month starting at 1. Negative values count back
    /// from the last week of the evaluated month.
    Week(i32),
    Weekday(Weekday),
    Month(Month),
    Year(i32),
    /// Exact calendar date; time of day is ignored.
    Date(NaiveDate),
    /// Inclusive day-of-month range, each end normalized like [`Expr::Day`].
    DayRange { start: i32, end: i32 },
    WeekdayRange { start: Weekday, end: Weekday },
    MonthRange { start: Month, end: Month },
    YearRange { start: i32, end: i32 },
    /// Matches when any child matches. Empty matches nothing.
    Or(Vec<Expr>),
    /// Matches when every child matches. Empty matches everything.
    And(Vec<Expr>),
    Not(Box<Expr>),
}

impl Expr {
    pub fn day(n: i32) -> Self {
        Self::Day(n)
    }

    /// Ranges do not wrap: `start` after `end` matches nothing.
    pub fn day_range(start: i32, end: i32) -> Self {
        Self::DayRange { start, end }
    }

    pub fn week(n: i32) -> Self {
        Self::Week(n)
    }

    pub fn weekday(weekday: impl Into<Weekday>) -> Self {
        Self::Weekday(weekday.into())
    }

    pub fn weekday_range(start: impl Into<Weekday>, end: impl Into<Weekday>) -> Self {
        Self::WeekdayRange {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn month(month: impl Into<Month>) -> Self {
        Self::Month(month.into())
    }

    pub fn month_range(start: impl Into<Month>, end: impl Into<Month>) -> Self {
        Self::MonthRange {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn year(year: i32) -> Self {
        Self::Year(year)
    }

    pub fn year_range(start: i32, end: i32) -> Self {
        Self::YearRange { start, end }
    }

    pub fn date(date: NaiveDate) -> Self {
        Self::Date(date)
    }

    /// Builds a [`Expr::Date`] from its parts, rejecting impossible dates.
    pub fn ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::Date)
            .ok_or(RecurError::InvalidDate { year, month, day })
    }

    pub fn or(children: impl IntoIterator<Item = Expr>) -> Self {
        Self::Or(children.into_iter().collect())
    }

    pub fn and(children: impl IntoIterator<Item = Expr>) -> Self {
        Self::And(children.into_iter().collect())
    }

    pub fn not(child: Expr) -> Self {
        Self::Not(Box::new(child))
    }

    /// Appends a child to an `Or` or `And` expression.
    ///
    /// Any other kind of expression is left untouched and an error is returned.
    pub fn push(&mut self, child: Expr) -> Result<()> {
        match self {
            Self::Or(children) | Self::And(children) => {
                children.push(child);
                Ok(())
            }
            other => Err(RecurError::NotComposite { kind: other.kind() }),
        }
    }

    /// Builder form of [`Expr::push`].
    pub fn with(mut self, child: Expr) -> Result<Self> {
        self.push(child)?;
        Ok(self)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Day(_) => "Day",
            Self::Week(_) => "Week",
            Self::Weekday(_) => "Weekday",
            Self::Month(_) => "Month",
            Self::Year(_) => "Year",
            Self::Date(_) => "Date",
            Self::DayRange { .. } => "DayRange",
            Self::WeekdayRange { .. } => "WeekdayRange",
            Self::MonthRange { .. } => "MonthRange",
            Self::YearRange { .. } => "YearRange",
            Self::Or(_) => "Or",
            Self::And(_) => "And",
            Self::Not(_) => "Not",
        }
    }
}

impl std::ops::Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}

impl std::ops::BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        match self {
            Expr::Or(mut children) => {
                children.push(rhs);
                Expr::Or(children)
            }
            lhs => Expr::Or(vec![lhs, rhs]),
        }
    }
}

impl std::ops::BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        match self {
            Expr::And(mut children) => {
                children.push(rhs);
                Expr::And(children)
            }
            lhs => Expr::And(vec![lhs, rhs]),
        }
    }
}

impl From<Weekday> for Expr {
    fn from(weekday: Weekday) -> Self {
        Self::Weekday(weekday)
    }
}

impl From<Month> for Expr {
    fn from(month: Month) -> Self {
        Self::Month(month)
    }
}

impl From<NaiveDate> for Expr {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

/// Day of the week numbered from Sunday = 0, so ranges compare numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = RecurError;

    fn try_from(value: u8) -> Result<Self> {
        Weekday::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(RecurError::InvalidWeekday { value })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Month of the year numbered from January = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl From<chrono::Month> for Month {
    fn from(month: chrono::Month) -> Self {
        Month::ALL[month.number_from_month() as usize - 1]
    }
}

impl TryFrom<u32> for Month {
    type Error = RecurError;

    fn try_from(value: u32) -> Result<Self> {
        value
            .checked_sub(1)
            .and_then(|i| Month::ALL.get(i as usize))
            .copied()
            .ok_or(RecurError::InvalidMonth { value })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_grows_combinators() {
        let mut expr = Expr::or([Expr::day(1)]);
        expr.push(Expr::day(15)).unwrap();
        assert_eq!(expr, Expr::Or(vec![Expr::Day(1), Expr::Day(15)]));

        let mut expr = Expr::and([]);
        expr.push(Expr::month(Month::May)).unwrap();
        assert_eq!(expr, Expr::And(vec![Expr::Month(Month::May)]));

        let expr = Expr::or([]).with(Expr::year(2018)).unwrap();
        assert_eq!(expr, Expr::Or(vec![Expr::Year(2018)]));
        assert!(Expr::year(2018).with(Expr::day(1)).is_err());
    }

    #[test]
    fn test_push_rejects_leaves() {
        let mut expr = Expr::not(Expr::day(1));
        let err = expr.push(Expr::day(2)).unwrap_err();
        assert!(matches!(err, RecurError::NotComposite { kind: "Not" }));
        assert_eq!(expr, Expr::Not(Box::new(Expr::Day(1))));
    }

    #[test]
    fn test_operators() {
        let expr = Expr::day(1) | Expr::day(2) | Expr::day(3);
        assert_eq!(expr, Expr::Or(vec![Expr::Day(1), Expr::Day(2), Expr::Day(3)]));

        let expr = Expr::from(Month::October) & Expr::from(Weekday::Tuesday) & !Expr::day(-1);
        assert!(matches!(&expr, Expr::And(children) if children.len() == 3));
    }

    #[test]
    fn test_ymd() {
        assert!(matches!(Expr::ymd(2018, 10, 2), Ok(Expr::Date(_))));
        assert!(matches!(
            Expr::ymd(2018, 2, 29),
            Err(RecurError::InvalidDate { day: 29, .. })
        ));
    }

    #[test]
    fn test_weekday_numbering() {
        assert_eq!(Weekday::Sunday.number(), 0);
        assert_eq!(Weekday::Saturday.number(), 6);
        assert!(Weekday::Tuesday < Weekday::Thursday);
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(Weekday::try_from(3).unwrap(), Weekday::Wednesday);
        assert!(matches!(
            Weekday::try_from(7),
            Err(RecurError::InvalidWeekday { value: 7 })
        ));
    }

    #[test]
    fn test_month_numbering() {
        assert_eq!(Month::January.number(), 1);
        assert_eq!(Month::December.number(), 12);
        assert_eq!(Month::from(chrono::Month::October), Month::October);
        assert_eq!(Month::try_from(2).unwrap(), Month::February);
        assert!(Month::try_from(0).is_err());
        assert!(Month::try_from(13).is_err());
        assert_eq!(Month::September.to_string(), "September");
    }
}
