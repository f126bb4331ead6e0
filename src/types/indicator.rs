//! Defines the agronomic dimensions that receive a yearly suitability score and
//! the row keys of a period risk table.

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One agronomic dimension scored 1 (suitable) or 0 (not suitable) each year.
///
/// The serialized name is the score column name used in risk tables and in the
/// final score record (e.g. `temperature_score_1950_1969`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    /// Mean temperature inside its band with a stable monthly profile.
    #[serde(rename = "temperature_score")]
    Temperature,
    /// Growing-degree-day total inside its band.
    #[serde(rename = "gdd_score")]
    Gdd,
    /// Rainfall total inside its band with a stable monthly profile.
    #[serde(rename = "precipitation_score")]
    Precipitation,
    /// Few enough days of extreme rainfall.
    #[serde(rename = "extreme_precipitation_score")]
    ExtremePrecipitation,
    /// Accumulated soil-moisture deficit low enough.
    #[serde(rename = "soil_moisture_score")]
    SoilMoisture,
    /// No month with too many windy days.
    #[serde(rename = "wind_score")]
    Wind,
    /// No month with too many heat-stress days.
    #[serde(rename = "heat_stress_score")]
    HeatStress,
    /// No month with too many humid days.
    #[serde(rename = "humidity_score")]
    Humidity,
    /// Enough incoming shortwave radiation.
    #[serde(rename = "solar_radiation_score")]
    SolarRadiation,
    /// Rainy-season onset shift on the configured side of its threshold.
    #[serde(rename = "season_start_shift_score")]
    SeasonStartShift,
    /// Rainy season long enough.
    #[serde(rename = "season_length_score")]
    SeasonLength,
}

impl Indicator {
    /// Every indicator, in the default score-column order.
    pub const ALL: [Indicator; 11] = [
        Indicator::Temperature,
        Indicator::Gdd,
        Indicator::Precipitation,
        Indicator::ExtremePrecipitation,
        Indicator::SoilMoisture,
        Indicator::Wind,
        Indicator::HeatStress,
        Indicator::Humidity,
        Indicator::SolarRadiation,
        Indicator::SeasonStartShift,
        Indicator::SeasonLength,
    ];

    pub fn column_name(&self) -> &'static str {
        match self {
            Indicator::Temperature => "temperature_score",
            Indicator::Gdd => "gdd_score",
            Indicator::Precipitation => "precipitation_score",
            Indicator::ExtremePrecipitation => "extreme_precipitation_score",
            Indicator::SoilMoisture => "soil_moisture_score",
            Indicator::Wind => "wind_score",
            Indicator::HeatStress => "heat_stress_score",
            Indicator::Humidity => "humidity_score",
            Indicator::SolarRadiation => "solar_radiation_score",
            Indicator::SeasonStartShift => "season_start_shift_score",
            Indicator::SeasonLength => "season_length_score",
        }
    }
}

/// Formats an `Indicator` as its score column name.
///
/// # Examples
///
/// ```
/// use agroclimate_risk::Indicator;
///
/// assert_eq!(Indicator::Gdd.to_string(), "gdd_score");
/// ```
impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Indicator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Indicator::ALL
            .into_iter()
            .find(|indicator| indicator.column_name() == s)
            .ok_or_else(|| ConfigError::UnknownIndicator(s.to_string()))
    }
}

/// Row key of a period risk table: either one indicator or the synthetic
/// `Final_Score` row averaging all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreColumn {
    Indicator(Indicator),
    Final,
}

impl ScoreColumn {
    pub const FINAL_NAME: &'static str = "Final_Score";

    pub fn name(&self) -> &'static str {
        match self {
            ScoreColumn::Indicator(indicator) => indicator.column_name(),
            ScoreColumn::Final => Self::FINAL_NAME,
        }
    }
}

impl From<Indicator> for ScoreColumn {
    fn from(indicator: Indicator) -> Self {
        ScoreColumn::Indicator(indicator)
    }
}

impl fmt::Display for ScoreColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
