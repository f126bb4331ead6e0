use crate::config::period::Period;
use crate::risk::classifier::PeriodRisk;
use crate::types::columns::{COL_FINAL_LAT, COL_FINAL_LON};
use crate::types::indicator::{Indicator, ScoreColumn};
use crate::types::location::LatLon;
use crate::weather_data::error::WeatherDataError;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Likelihood scores per location, one row per location.
///
/// Columns are `LAT`, `LON`, then `{indicator}_{start}_{end}` for every period
/// and every scored indicator followed by `Final_Score`, period by period:
///
/// ```text
/// LAT | LON | temperature_score_1950_1969 | ... | Final_Score_1950_1969 | temperature_score_1970_1989 | ...
/// ```
#[derive(Debug, Clone)]
pub struct FinalScoreTable {
    pub frame: DataFrame,
}

impl FinalScoreTable {
    /// The score column names for `periods` and `indicators`, in table order.
    pub fn column_names(periods: &[Period], indicators: &[Indicator]) -> Vec<String> {
        periods
            .iter()
            .flat_map(|period| {
                indicators
                    .iter()
                    .map(|i| ScoreColumn::Indicator(*i))
                    .chain(std::iter::once(ScoreColumn::Final))
                    .map(move |column| format!("{}_{}", column.name(), period.column_suffix()))
            })
            .collect()
    }

    /// A table with every column and no rows.
    pub fn empty(periods: &[Period], indicators: &[Indicator]) -> PolarsResult<Self> {
        let columns = [COL_FINAL_LAT.to_string(), COL_FINAL_LON.to_string()]
            .into_iter()
            .chain(Self::column_names(periods, indicators))
            .map(|name| Column::new(name.into(), Vec::<f64>::new()))
            .collect();
        Ok(Self {
            frame: DataFrame::new(columns)?,
        })
    }

    /// Builds the single-row table of one location from its period risk tables.
    pub fn from_period_risks(location: LatLon, risks: &[PeriodRisk]) -> PolarsResult<Self> {
        let mut columns = vec![
            Column::new(COL_FINAL_LAT.into(), [location.lat()]),
            Column::new(COL_FINAL_LON.into(), [location.lon()]),
        ];
        for risk in risks {
            let suffix = risk.period.column_suffix();
            for entry in &risk.entries {
                let name = format!("{}_{}", entry.column.name(), suffix);
                columns.push(Column::new(name.into(), [entry.score]));
            }
        }
        Ok(Self {
            frame: DataFrame::new(columns)?,
        })
    }

    /// Appends the rows of `other`. Both tables must share the same columns.
    pub fn vstack(&mut self, other: &FinalScoreTable) -> PolarsResult<()> {
        self.frame.vstack_mut(&other.frame)?;
        Ok(())
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Score of `column` in row `row`, e.g. `score(0, "gdd_score_1990_2009")`.
    pub fn score(&self, row: usize, column: &str) -> Option<f64> {
        self.frame.column(column).ok()?.f64().ok()?.get(row)
    }

    pub fn write_csv(&mut self, path: &Path) -> Result<(), WeatherDataError> {
        let mut file =
            File::create(path).map_err(|e| WeatherDataError::FileCreate(path.to_path_buf(), e))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut self.frame)
            .map_err(|e| WeatherDataError::CsvWrite(path.to_path_buf(), e))
    }
}
