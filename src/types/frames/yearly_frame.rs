use crate::season::SeasonOutcome;
use crate::types::columns::*;
use crate::types::yearly::YearlyRow;
use crate::utils::{f64_values, i32_values};
use polars::prelude::*;
use std::collections::BTreeMap;

/// One row per year, sorted by year.
#[derive(Clone)]
pub struct YearlyFrame {
    pub frame: LazyFrame,
}

impl YearlyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Collects the frame into typed rows, attaching the detected season of each
    /// year. Years missing from `seasons` get no onset shift and no length.
    pub fn collect_rows(
        &self,
        seasons: &BTreeMap<i32, SeasonOutcome>,
    ) -> PolarsResult<Vec<YearlyRow>> {
        let df = self.frame.clone().collect()?;

        let years = i32_values(&df, COL_YEAR)?;
        let temperature = f64_values(&df, COL_TEMP_MEAN)?;
        let cv_temperature = f64_values(&df, COL_CV_TEMP)?;
        let gdd = f64_values(&df, COL_GDD)?;
        let precipitation = f64_values(&df, COL_PRECIP)?;
        let cv_precipitation = f64_values(&df, COL_CV_PRECIP)?;
        let extreme = f64_values(&df, COL_EXTREME_PRECIP)?;
        let deficit = f64_values(&df, COL_SOIL_DEFICIT)?;
        let solar = f64_values(&df, COL_SOLAR)?;
        let wind = f64_values(&df, COL_WIND_DAYS)?;
        let heat = f64_values(&df, COL_HEAT_DAYS)?;
        let humidity = f64_values(&df, COL_HUMIDITY_DAYS)?;
        let dry = f64_values(&df, COL_DRY_DAYS)?;

        let rows = years
            .iter()
            .enumerate()
            .filter_map(|(i, year)| {
                let year = (*year)?;
                let season = seasons.get(&year).copied().unwrap_or_default();
                Some(YearlyRow {
                    year,
                    temperature: temperature[i],
                    cv_temperature: cv_temperature[i],
                    gdd: gdd[i],
                    precipitation: precipitation[i],
                    cv_precipitation: cv_precipitation[i],
                    extreme_precipitation_days: extreme[i],
                    soil_moisture_deficit: deficit[i],
                    solar_radiation: solar[i],
                    wind_days_above_threshold: wind[i],
                    heat_days_above_threshold: heat[i],
                    humidity_days_above_threshold: humidity[i],
                    consecutive_dry_days: dry[i],
                    season_start_shift: season.start_shift,
                    season_length: season.length,
                })
            })
            .collect();

        Ok(rows)
    }
}
