use crate::config::period::Period;
use crate::types::indicator::Indicator;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Season window {start}..={end} is not an ordered range of calendar months")]
    InvalidSeasonWindow { start: u32, end: u32 },

    #[error("Season reference date {month:02}-{day:02} is not a valid calendar day")]
    InvalidReferenceDate { month: u32, day: u32 },

    #[error("Rolling precipitation window must span at least one day")]
    EmptyRollingWindow,

    #[error("No periods configured")]
    NoPeriods,

    #[error("Period {0} ends before it starts")]
    InvertedPeriod(Period),

    #[error("Periods {0} and {1} overlap or are out of order")]
    OverlappingPeriods(Period, Period),

    #[error("Years between periods {0} and {1} are not covered")]
    PeriodGap(Period, Period),

    #[error("Unknown indicator '{0}'")]
    UnknownIndicator(String),

    #[error("Indicator '{0}' is listed more than once")]
    DuplicateIndicator(Indicator),

    #[error("No score columns configured")]
    NoScoreColumns,

    #[error("Failed to read configuration file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse configuration")]
    Parse(#[from] serde_json::Error),
}
