//! Composable temporal expressions for recurring calendar events.
//!
//! Rules are built from calendar predicates (`Day`, `Weekday`, `Month`, ...)
//! joined with `Or`, `And` and `Not`, then either tested against an instant or
//! searched forward for matching days.
//!
//! ```
//! use chrono::NaiveDate;
//! use recurring::{next, Expr, Month, Weekday};
//!
//! // Tuesdays and Thursdays in October, except the last day of the month
//! let rule = Expr::month(Month::October)
//!     & (Expr::weekday(Weekday::Tuesday) | Expr::weekday(Weekday::Thursday))
//!     & !Expr::day(-1);
//!
//! let start = NaiveDate::from_ymd_opt(2019, 10, 30).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let horizon = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let found = next(start, &rule, horizon).unwrap();
//! assert_eq!(found.date(), NaiveDate::from_ymd_opt(2020, 10, 1).unwrap());
//! ```

pub mod calendar;
pub mod error;
pub mod expr;
pub mod search;

pub use error::{RecurError, Result};
pub use expr::{dates, days, evaluate, months, weekdays, weeks, years, Expr, Month, Weekday};
pub use search::{next, next_sequence, occurrences, Occurrences, Schedule, SearchConfig};
