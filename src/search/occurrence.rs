use std::iter::FusedIterator;

use chrono::{Days, NaiveDateTime};

use crate::calendar;
use crate::expr::Expr;

/// Finds the first day at or after `start` that `expr` includes.
///
/// Candidates are midnights, starting with the day containing `start` and
/// stepping one calendar day at a time. Returns `None` once a candidate would
/// fall after `horizon`.
pub fn next(start: NaiveDateTime, expr: &Expr, horizon: NaiveDateTime) -> Option<NaiveDateTime> {
    let mut candidate = calendar::beginning_of_day(start);
    while candidate <= horizon {
        if expr.includes(candidate) {
            tracing::trace!(%candidate, kind = expr.kind(), "found occurrence");
            return Some(candidate);
        }
        candidate = match candidate.checked_add_days(Days::new(1)) {
            Some(t) => t,
            None => {
                tracing::debug!(%start, %candidate, "search ran off the end of the calendar");
                return None;
            }
        };
    }
    tracing::debug!(%start, %horizon, kind = expr.kind(), "no occurrence before horizon");
    None
}

/// Collects up to `n` strictly increasing occurrences, each search resuming
/// the day after the previous match. Stops early when the horizon is reached.
pub fn next_sequence(
    start: NaiveDateTime,
    expr: &Expr,
    n: usize,
    horizon: NaiveDateTime,
) -> Vec<NaiveDateTime> {
    occurrences(start, expr, horizon).take(n).collect()
}

pub fn occurrences(start: NaiveDateTime, expr: &Expr, horizon: NaiveDateTime) -> Occurrences<'_> {
    Occurrences {
        expr,
        cursor: Some(start),
        horizon,
    }
}

/// Lazy sequence of occurrences up to a horizon.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    expr: &'a Expr,
    cursor: Option<NaiveDateTime>,
    horizon: NaiveDateTime,
}

impl Occurrences<'_> {
    pub fn horizon(&self) -> NaiveDateTime {
        self.horizon
    }
}

impl Iterator for Occurrences<'_> {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        let start = self.cursor.take()?;
        let found = next(start, self.expr, self.horizon)?;
        self.cursor = found.checked_add_days(Days::new(1));
        Some(found)
    }
}

impl FusedIterator for Occurrences<'_> {}
