//! Configuration for occurrence searches.

use serde::Deserialize;

use crate::error::{RecurError, Result};

/// Days scanned past the start day when no explicit horizon is given.
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 3660;

/// How far a [`Schedule`](super::Schedule) searches before giving up.
///
/// # Example
///
/// ```
/// use recurring::SearchConfig;
///
/// let config = SearchConfig::from_yaml_str("lookahead_days: 400").unwrap();
/// assert_eq!(config.lookahead_days(), 400);
/// assert!(SearchConfig::new().with_lookahead_days(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Distance in days from the start day to the search horizon.
    lookahead_days: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
        }
    }
}

impl SearchConfig {
    /// Creates a configuration with the default lookahead.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lookahead_days(mut self, days: u32) -> Self {
        self.lookahead_days = days;
        self
    }

    pub fn lookahead_days(&self) -> u32 {
        self.lookahead_days
    }

    /// Returns an error if the lookahead is zero days.
    pub fn validate(&self) -> Result<()> {
        if self.lookahead_days < 1 {
            return Err(RecurError::InvalidLookahead {
                days: self.lookahead_days,
            });
        }
        Ok(())
    }

    /// Parses and validates a YAML mapping. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: SearchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        tracing::debug!(lookahead_days = config.lookahead_days, "loaded search config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(SearchConfig::new().lookahead_days(), DEFAULT_LOOKAHEAD_DAYS);
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_yaml_missing_keys_use_defaults() {
        let config = SearchConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_yaml_unknown_key_rejected() {
        let err = SearchConfig::from_yaml_str("lookahead: 10").unwrap_err();
        assert!(matches!(err, RecurError::Config(_)));
    }

    #[test]
    fn test_yaml_zero_lookahead_rejected() {
        let err = SearchConfig::from_yaml_str("lookahead_days: 0").unwrap_err();
        assert!(matches!(err, RecurError::InvalidLookahead { days: 0 }));
    }

    #[test]
    fn test_yaml_negative_lookahead_rejected() {
        assert!(SearchConfig::from_yaml_str("lookahead_days: -5").is_err());
    }
}
