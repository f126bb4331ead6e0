//! Fixtures shared by the unit tests.

use crate::types::columns::*;
use crate::types::frames::daily_series::DailySeries;
use crate::types::location::LatLon;
use chrono::{Duration, NaiveDate};
use polars::prelude::*;

/// Raw values of one day. The defaults describe a warm, evenly wet day that
/// passes every daily threshold.
#[derive(Debug, Clone, Copy)]
pub struct DayValues {
    pub temp_mean: Option<f64>,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    pub wind_mean: Option<f64>,
    pub wind_max: Option<f64>,
    pub shortwave: Option<f64>,
    pub rh_mean: Option<f64>,
    pub rh_max: Option<f64>,
    pub rh_min: Option<f64>,
    pub precipitation: Option<f64>,
    pub soil_moisture: Option<f64>,
}

impl Default for DayValues {
    fn default() -> Self {
        Self {
            temp_mean: Some(27.0),
            temp_max: Some(32.0),
            temp_min: Some(22.0),
            wind_mean: Some(3.0),
            wind_max: Some(6.0),
            shortwave: Some(20.0),
            rh_mean: Some(70.0),
            rh_max: Some(85.0),
            rh_min: Some(50.0),
            precipitation: Some(5.0),
            soil_moisture: Some(0.3),
        }
    }
}

impl DayValues {
    pub fn temps(self, mean: f64, max: f64, min: f64) -> Self {
        Self {
            temp_mean: Some(mean),
            temp_max: Some(max),
            temp_min: Some(min),
            ..self
        }
    }

    pub fn precipitation(self, mm: f64) -> Self {
        Self {
            precipitation: Some(mm),
            ..self
        }
    }

    pub fn missing_precipitation(self) -> Self {
        Self {
            precipitation: None,
            ..self
        }
    }

    pub fn soil_moisture(self, value: f64) -> Self {
        Self {
            soil_moisture: Some(value),
            ..self
        }
    }

    pub fn wind_max(self, value: f64) -> Self {
        Self {
            wind_max: Some(value),
            ..self
        }
    }

    pub fn humidity(self, mean: f64) -> Self {
        Self {
            rh_mean: Some(mean),
            ..self
        }
    }

    pub fn shortwave(self, value: f64) -> Self {
        Self {
            shortwave: Some(value),
            ..self
        }
    }

    fn raw(&self, column: &str) -> Option<f64> {
        match column {
            COL_TEMP_MEAN => self.temp_mean,
            COL_TEMP_MAX => self.temp_max,
            COL_TEMP_MIN => self.temp_min,
            COL_WIND_MEAN => self.wind_mean,
            COL_WIND_MAX => self.wind_max,
            COL_SHORTWAVE => self.shortwave,
            COL_RH_MEAN => self.rh_mean,
            COL_RH_MAX => self.rh_max,
            COL_RH_MIN => self.rh_min,
            COL_PRECIP => self.precipitation,
            COL_SOIL_MOISTURE => self.soil_moisture,
            _ => None,
        }
    }
}

/// A raw daily table with `date`, `lat`, `lon` and every raw variable.
pub fn daily_frame(days: &[(NaiveDate, DayValues)]) -> PolarsResult<DataFrame> {
    let dates: Vec<NaiveDate> = days.iter().map(|(date, _)| *date).collect();
    let mut columns = vec![
        Column::new(COL_DATE.into(), dates),
        Column::new(COL_LAT.into(), vec![13.45; days.len()]),
        Column::new(COL_LON.into(), vec![-16.58; days.len()]),
    ];
    for variable in RAW_VARIABLES {
        let values: Vec<Option<f64>> = days.iter().map(|(_, day)| day.raw(variable)).collect();
        columns.push(Column::new(variable.into(), values));
    }
    DataFrame::new(columns)
}

/// Every calendar day of `first..=last` with values from `day`.
pub fn calendar_days(
    first: i32,
    last: i32,
    day: impl Fn(NaiveDate) -> DayValues,
) -> Vec<(NaiveDate, DayValues)> {
    let (Some(start), Some(end)) = (
        NaiveDate::from_ymd_opt(first, 1, 1),
        NaiveDate::from_ymd_opt(last, 12, 31),
    ) else {
        return Vec::new();
    };
    let count = (end - start).num_days();
    (0..=count)
        .map(|offset| {
            let date = start + Duration::days(offset);
            (date, day(date))
        })
        .collect()
}

pub fn synthetic_series(
    first: i32,
    last: i32,
    day: impl Fn(NaiveDate) -> DayValues,
) -> Result<DailySeries, Box<dyn std::error::Error>> {
    let df = daily_frame(&calendar_days(first, last, day))?;
    Ok(DailySeries::new(df, LatLon(13.45, -16.58))?)
}
