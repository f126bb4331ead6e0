use crate::types::indicator::Indicator;

/// One growing season's aggregates, collected out of the yearly frame and joined
/// with the season onset/length detected from daily rainfall.
///
/// Every value is optional: a year without enough data keeps `None` instead of
/// failing the run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct YearlyRow {
    pub year: i32,
    pub temperature: Option<f64>,      // mean of monthly means
    pub cv_temperature: Option<f64>,   // %
    pub gdd: Option<f64>,              // degree-days
    pub precipitation: Option<f64>,    // mm
    pub cv_precipitation: Option<f64>, // %
    pub extreme_precipitation_days: Option<f64>,
    pub soil_moisture_deficit: Option<f64>,
    pub solar_radiation: Option<f64>, // MJ/m²
    pub wind_days_above_threshold: Option<f64>,
    pub heat_days_above_threshold: Option<f64>,
    pub humidity_days_above_threshold: Option<f64>,
    pub consecutive_dry_days: Option<f64>,
    pub season_start_shift: Option<i64>, // days relative to the reference date
    pub season_length: Option<i64>,      // days
}

/// Binary suitability scores for one year: `Some(1)` suitable, `Some(0)` not
/// suitable, `None` when the inputs were missing and the missing-data policy
/// excludes the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YearlyScoreRow {
    pub year: i32,
    pub temperature: Option<u8>,
    pub gdd: Option<u8>,
    pub precipitation: Option<u8>,
    pub extreme_precipitation: Option<u8>,
    pub soil_moisture: Option<u8>,
    pub wind: Option<u8>,
    pub heat_stress: Option<u8>,
    pub humidity: Option<u8>,
    pub solar_radiation: Option<u8>,
    pub season_start_shift: Option<u8>,
    pub season_length: Option<u8>,
}

impl YearlyScoreRow {
    pub fn get(&self, indicator: Indicator) -> Option<u8> {
        match indicator {
            Indicator::Temperature => self.temperature,
            Indicator::Gdd => self.gdd,
            Indicator::Precipitation => self.precipitation,
            Indicator::ExtremePrecipitation => self.extreme_precipitation,
            Indicator::SoilMoisture => self.soil_moisture,
            Indicator::Wind => self.wind,
            Indicator::HeatStress => self.heat_stress,
            Indicator::Humidity => self.humidity,
            Indicator::SolarRadiation => self.solar_radiation,
            Indicator::SeasonStartShift => self.season_start_shift,
            Indicator::SeasonLength => self.season_length,
        }
    }

    /// A row where every dimension carries the same score. Handy for fixtures.
    pub fn uniform(year: i32, score: Option<u8>) -> Self {
        Self {
            year,
            temperature: score,
            gdd: score,
            precipitation: score,
            extreme_precipitation: score,
            soil_moisture: score,
            wind: score,
            heat_stress: score,
            humidity: score,
            solar_radiation: score,
            season_start_shift: score,
            season_length: score,
        }
    }
}
