//! Contains the `DailySeries` structure: the raw daily input of one location.

use crate::config::season::SeasonWindow;
use crate::config::thresholds::DailyThresholds;
use crate::types::columns::*;
use crate::types::frames::daily_indicator_frame::DailyIndicatorFrame;
use crate::types::location::LatLon;
use crate::weather_data::error::WeatherDataError;
use polars::prelude::*;

/// The raw daily weather table of a single location.
///
/// Holds a Polars `LazyFrame` with a `date` column (Polars `Date`) and the eleven
/// raw variables listed in [`RAW_VARIABLES`], all cast to `Float64`, plus the
/// coordinates of the point the series belongs to.
///
/// Rows are expected in increasing date order with one row per day; this is not
/// checked.
#[derive(Clone)]
pub struct DailySeries {
    /// The underlying Polars LazyFrame containing the daily data.
    pub frame: LazyFrame,
    pub location: LatLon,
}

impl DailySeries {
    /// Wraps an eager frame after checking that every required column exists.
    ///
    /// `date` may be a `Date` or `Datetime` column; datetimes are truncated to
    /// the calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherDataError::MissingColumn`] naming the first absent column.
    pub fn new(frame: DataFrame, location: LatLon) -> Result<Self, WeatherDataError> {
        for name in std::iter::once(COL_DATE).chain(RAW_VARIABLES) {
            if frame.column(name).is_err() {
                return Err(WeatherDataError::MissingColumn(name.to_string()));
            }
        }

        let casts: Vec<Expr> = std::iter::once(col(COL_DATE).cast(DataType::Date))
            .chain(
                RAW_VARIABLES
                    .iter()
                    .map(|name| col(*name).cast(DataType::Float64)),
            )
            .collect();

        Ok(Self {
            frame: frame.lazy().with_columns(casts),
            location,
        })
    }

    /// Restricts the series to the season window and derives per-day indicators.
    ///
    /// Adds `year` and `month` keys plus:
    ///
    /// * `gdd`: `max(0, (tmax + tmin) / 2 - base)`
    /// * `is_extreme_precipitation`: rain strictly above the extreme threshold
    /// * `consecutive_dry_days`: length of the current run of dry days, 0 on a wet day
    /// * `is_heat_stress`, `is_wind_above_threshold`, `is_humidity_above_threshold`
    /// * `soil_moisture_deficit`: `max(0, threshold - soil moisture)`
    /// * `solar_radiation_mj`: the shortwave radiation sum
    ///
    /// Missing inputs give missing indicators. A day with missing rain neither
    /// extends nor resets the dry-day run.
    pub fn indicators(
        &self,
        window: &SeasonWindow,
        thresholds: &DailyThresholds,
    ) -> DailyIndicatorFrame {
        let in_season = col(COL_MONTH)
            .gt_eq(lit(window.start_month as i32))
            .and(col(COL_MONTH).lt_eq(lit(window.end_month as i32)));

        // Each wet day opens a new run; dry days count up inside the run.
        let wet_run = col(COL_PRECIP)
            .gt_eq(lit(thresholds.dry_day))
            .fill_null(lit(false))
            .cast(DataType::Int64)
            .cum_sum(false);
        let dry_day = col(COL_PRECIP)
            .lt(lit(thresholds.dry_day))
            .fill_null(lit(false))
            .cast(DataType::Int64);

        let frame = self
            .frame
            .clone()
            .with_columns([
                col(COL_DATE).dt().year().cast(DataType::Int32).alias(COL_YEAR),
                col(COL_DATE).dt().month().cast(DataType::Int32).alias(COL_MONTH),
            ])
            .filter(in_season)
            .with_columns([
                floor_at_zero(
                    (col(COL_TEMP_MAX) + col(COL_TEMP_MIN)) / lit(2.0)
                        - lit(thresholds.gdd_base_temp),
                )
                .alias(COL_GDD),
                col(COL_PRECIP)
                    .gt(lit(thresholds.extreme_precipitation))
                    .alias(COL_EXTREME_PRECIP),
                dry_day.cum_sum(false).over([wet_run]).alias(COL_DRY_DAYS),
                col(COL_TEMP_MEAN)
                    .gt(lit(thresholds.heat_stress))
                    .alias(COL_HEAT_STRESS),
                col(COL_WIND_MAX).gt(lit(thresholds.wind)).alias(COL_WIND_ABOVE),
                col(COL_RH_MEAN)
                    .gt(lit(thresholds.humidity))
                    .alias(COL_HUMIDITY_ABOVE),
                floor_at_zero(lit(thresholds.soil_moisture) - col(COL_SOIL_MOISTURE))
                    .alias(COL_SOIL_DEFICIT),
                col(COL_SHORTWAVE).alias(COL_SOLAR),
            ]);

        DailyIndicatorFrame::new(frame)
    }
}

/// `max(0, expr)` that keeps nulls null.
fn floor_at_zero(expr: Expr) -> Expr {
    when(expr.clone().lt(lit(0.0)))
        .then(lit(0.0))
        .otherwise(expr)
}
