//! Error types for the recurring crate.

/// Error type for all fallible operations in the recurring crate.
///
/// Evaluating an expression or searching for occurrences never fails; only
/// construction helpers, growing a non-combinator and configuration do.
#[derive(Debug, thiserror::Error)]
pub enum RecurError {
    /// Returned when a year/month/day triple is not a calendar date.
    #[error("{year:04}/{month:02}/{day:02} is not a valid date")]
    InvalidDate {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
        /// Requested day of month.
        day: u32,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("month must be in 1..=12, got {value}")]
    InvalidMonth {
        /// The invalid month number.
        value: u32,
    },

    /// Returned when a weekday number is outside 0..=6.
    #[error("weekday must be in 0..=6 (Sunday = 0), got {value}")]
    InvalidWeekday {
        /// The invalid weekday number.
        value: u8,
    },

    /// Returned when a child is appended to something other than `Or`/`And`.
    #[error("cannot add a child to a {kind} expression")]
    NotComposite {
        /// Kind of the expression that was asked to grow.
        kind: &'static str,
    },

    /// Returned when a search lookahead is zero days.
    #[error("lookahead must be >= 1 day, got {days}")]
    InvalidLookahead {
        /// The invalid lookahead in days.
        days: u32,
    },

    /// Returned when a configuration document cannot be parsed.
    #[error("invalid search config: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Convenient alias for `Result`.
pub type Result<T, E = RecurError> = std::result::Result<T, E>;
