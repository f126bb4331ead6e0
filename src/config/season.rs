use crate::config::error::ConfigError;
use bon::Builder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar months (inclusive) treated as the growing season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct SeasonWindow {
    #[builder(default = 6)]
    pub start_month: u32,
    #[builder(default = 10)]
    pub end_month: u32,
}

impl SeasonWindow {
    pub fn contains(&self, month: u32) -> bool {
        month >= self.start_month && month <= self.end_month
    }

    /// The window may not wrap around the turn of the year.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = (1..=12).contains(&self.start_month)
            && (1..=12).contains(&self.end_month)
            && self.start_month <= self.end_month;
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidSeasonWindow {
                start: self.start_month,
                end: self.end_month,
            })
        }
    }
}

impl Default for SeasonWindow {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Parameters of the rainy-season onset and length detector.
///
/// Onset for the shift uses its own threshold; the length calculation has a
/// separate (lower) onset threshold and an end threshold tested with a strict
/// inequality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct SeasonDetection {
    /// Trailing window, in days, of the rolling precipitation sum.
    #[builder(default = 7)]
    pub window_days: usize,
    /// Rolling sum (mm) that marks onset for `season_start_shift` (`>=`).
    #[builder(default = 5.0)]
    pub onset_threshold: f64,
    /// Rolling sum (mm) that marks onset for `season_length` (`>=`).
    #[builder(default = 2.0)]
    pub length_start_threshold: f64,
    /// Rolling sum (mm) the last rainy window must exceed (`>`).
    #[builder(default = 2.0)]
    pub length_end_threshold: f64,
    #[builder(default = 6)]
    pub reference_month: u32,
    #[builder(default = 1)]
    pub reference_day: u32,
}

impl SeasonDetection {
    /// Reference onset date in `year`; `None` for e.g. February 29th in a common year.
    pub fn reference_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.reference_month, self.reference_day)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_days == 0 {
            return Err(ConfigError::EmptyRollingWindow);
        }
        // 2000 is a leap year, so February 29th passes.
        if self.reference_date(2000).is_none() {
            return Err(ConfigError::InvalidReferenceDate {
                month: self.reference_month,
                day: self.reference_day,
            });
        }
        Ok(())
    }
}

impl Default for SeasonDetection {
    fn default() -> Self {
        Self::builder().build()
    }
}
