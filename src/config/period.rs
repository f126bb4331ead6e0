//! Multi-year analysis periods and their validation.

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive range of years, e.g. 1950–1969.
///
/// Serialized as a two-element array `[start, end]`.
///
/// # Examples
///
/// ```
/// use agroclimate_risk::Period;
///
/// let period = Period::new(1950, 1969);
/// assert!(period.contains(1969));
/// assert_eq!(period.label(), "1950-1969");
/// assert_eq!(period.column_suffix(), "1950_1969");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Period {
    pub start: i32,
    pub end: i32,
}

impl Period {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }

    pub fn label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }

    pub fn column_suffix(&self) -> String {
        format!("{}_{}", self.start, self.end)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl From<(i32, i32)> for Period {
    fn from((start, end): (i32, i32)) -> Self {
        Self::new(start, end)
    }
}

impl From<Period> for (i32, i32) {
    fn from(period: Period) -> Self {
        (period.start, period.end)
    }
}

/// Two historical reference windows, the recent past, and two projection windows.
pub fn default_periods() -> Vec<Period> {
    vec![
        Period::new(1950, 1969),
        Period::new(1970, 1989),
        Period::new(1990, 2009),
        Period::new(2010, 2029),
        Period::new(2030, 2050),
    ]
}

/// Checks that periods are non-empty, ordered, and tile the horizon without
/// overlaps or gaps.
pub fn validate_periods(periods: &[Period]) -> Result<(), ConfigError> {
    if periods.is_empty() {
        return Err(ConfigError::NoPeriods);
    }
    for period in periods {
        if period.end < period.start {
            return Err(ConfigError::InvertedPeriod(*period));
        }
    }
    for pair in periods.windows(2) {
        let (previous, next) = (pair[0], pair[1]);
        if next.start <= previous.end {
            return Err(ConfigError::OverlappingPeriods(previous, next));
        }
        if next.start > previous.end + 1 {
            return Err(ConfigError::PeriodGap(previous, next));
        }
    }
    Ok(())
}
