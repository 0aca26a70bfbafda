use chrono::{Days, NaiveDateTime};

use super::config::SearchConfig;
use super::occurrence::{self, Occurrences};
use crate::calendar;
use crate::error::Result;
use crate::expr::Expr;

/// A temporal expression paired with the search settings used to find its
/// occurrences.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    expr: Expr,
    config: SearchConfig,
}

impl Schedule {
    pub fn new(expr: Expr) -> Self {
        Self {
            expr,
            config: SearchConfig::default(),
        }
    }

    /// Replaces the search settings after validating them.
    pub fn with_config(mut self, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Appends a child to the underlying `Or`/`And` expression.
    pub fn push(&mut self, child: Expr) -> Result<()> {
        self.expr.push(child)
    }

    pub fn includes(&self, t: NaiveDateTime) -> bool {
        self.expr.includes(t)
    }

    /// Midnight `lookahead_days` after the day containing `start`, clamped to
    /// the last representable instant.
    pub fn horizon_for(&self, start: NaiveDateTime) -> NaiveDateTime {
        calendar::beginning_of_day(start)
            .checked_add_days(Days::new(u64::from(self.config.lookahead_days())))
            .unwrap_or(NaiveDateTime::MAX)
    }

    pub fn next(&self, start: NaiveDateTime) -> Option<NaiveDateTime> {
        occurrence::next(start, &self.expr, self.horizon_for(start))
    }

    /// Up to `n` occurrences, all within one horizon measured from `start`.
    pub fn next_n(&self, start: NaiveDateTime, n: usize) -> Vec<NaiveDateTime> {
        occurrence::next_sequence(start, &self.expr, n, self.horizon_for(start))
    }

    pub fn occurrences(&self, start: NaiveDateTime) -> Occurrences<'_> {
        occurrence::occurrences(start, &self.expr, self.horizon_for(start))
    }
}

impl From<Expr> for Schedule {
    fn from(expr: Expr) -> Self {
        Self::new(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecurError;
    use crate::expr::{Month, Weekday};
    use chrono::{NaiveDate, NaiveTime, TimeDelta};

    fn date(s: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(s, "%Y/%m/%d")
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_horizon_for() {
        let schedule = Schedule::new(Expr::day(1))
            .with_config(SearchConfig::new().with_lookahead_days(30))
            .unwrap();
        let start = date("2018/10/02") + TimeDelta::hours(9);
        assert_eq!(schedule.horizon_for(start), date("2018/11/01"));
        assert_eq!(schedule.next(start), Some(date("2018/11/01")));

        let short = schedule
            .clone()
            .with_config(SearchConfig::new().with_lookahead_days(29))
            .unwrap();
        assert_eq!(short.next(start), None);
    }

    #[test]
    fn test_with_invalid_config() {
        let err = Schedule::new(Expr::day(1))
            .with_config(SearchConfig::new().with_lookahead_days(0))
            .unwrap_err();
        assert!(matches!(err, RecurError::InvalidLookahead { days: 0 }));
    }

    #[test_log::test]
    fn test_leap_day_within_default_lookahead() {
        let schedule = Schedule::from(Expr::and([Expr::month(Month::February), Expr::day(29)]));
        assert_eq!(
            schedule.next_n(date("2019/01/01"), 3),
            vec![date("2020/02/29"), date("2024/02/29"), date("2028/02/29")]
        );
    }

    #[test]
    fn test_incremental_growth() {
        let mut schedule = Schedule::new(Expr::or([]));
        assert_eq!(schedule.next(date("2018/10/01")), None);

        schedule.push(Expr::weekday(Weekday::Friday)).unwrap();
        assert_eq!(schedule.next(date("2018/10/01")), Some(date("2018/10/05")));

        let mut fixed = Schedule::new(Expr::day(1));
        assert!(fixed.push(Expr::day(2)).is_err());
    }

    #[test]
    fn test_occurrences_take() {
        let schedule = Schedule::new(Expr::day(-1));
        let found: Vec<_> = schedule.occurrences(date("2018/01/15")).take(3).collect();
        assert_eq!(found, vec![date("2018/01/31"), date("2018/02/28"), date("2018/03/31")]);
    }
}
