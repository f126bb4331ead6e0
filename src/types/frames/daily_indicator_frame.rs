use crate::config::aggregation::MonthlyAggregation;
use crate::config::thresholds::MonthlyThresholds;
use crate::types::columns::*;
use crate::types::frames::monthly_frame::MonthlyFrame;
use polars::prelude::*;

/// In-season daily rows carrying the derived per-day indicators.
///
/// Produced by [`DailySeries::indicators`](crate::DailySeries::indicators).
/// Keeps every raw variable next to the indicator columns so later stages can
/// reach both.
#[derive(Clone)]
pub struct DailyIndicatorFrame {
    pub frame: LazyFrame,
}

impl DailyIndicatorFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    pub fn filter(&self, predicate: Expr) -> Self {
        Self::new(self.frame.clone().filter(predicate))
    }

    /// The `date`, `year` and `precipitation_sum` columns used for season
    /// detection, in date order.
    pub fn precipitation(&self) -> LazyFrame {
        self.frame
            .clone()
            .select([col(COL_DATE), col(COL_YEAR), col(COL_PRECIP)])
            .sort([COL_DATE], SortMultipleOptions::default())
    }

    /// Groups the days into `(year, month)` rows.
    ///
    /// Each variable is reduced with the method configured in `aggregation`,
    /// then each year's months get the coefficient of variation of temperature
    /// and precipitation (sample standard deviation over mean, in percent; null
    /// when the year has a single month). The three day-count columns are turned
    /// into 0/1 month flags by comparing them to `thresholds`.
    pub fn monthly(
        &self,
        aggregation: &MonthlyAggregation,
        thresholds: &MonthlyThresholds,
    ) -> MonthlyFrame {
        let days = |name: &str| aggregation.day_counts.apply(col(name).cast(DataType::Float64));

        let grouped = self
            .frame
            .clone()
            .group_by([col(COL_YEAR), col(COL_MONTH)])
            .agg([
                aggregation.temperature.apply(col(COL_TEMP_MEAN)),
                aggregation.precipitation.apply(col(COL_PRECIP)),
                aggregation.gdd.apply(col(COL_GDD)),
                aggregation.solar_radiation.apply(col(COL_SOLAR)),
                aggregation.soil_moisture_deficit.apply(col(COL_SOIL_DEFICIT)),
                days(COL_EXTREME_PRECIP),
                days(COL_HEAT_STRESS),
                days(COL_WIND_ABOVE),
                days(COL_HUMIDITY_ABOVE),
                aggregation
                    .consecutive_dry_days
                    .apply(col(COL_DRY_DAYS).cast(DataType::Float64)),
            ])
            .sort([COL_YEAR, COL_MONTH], SortMultipleOptions::default());

        let frame = grouped.with_columns([
            coefficient_of_variation(COL_TEMP_MEAN).alias(COL_CV_TEMP),
            coefficient_of_variation(COL_PRECIP).alias(COL_CV_PRECIP),
            thresholds
                .comparison
                .expr(col(COL_WIND_ABOVE), thresholds.wind_days)
                .cast(DataType::Float64)
                .alias(COL_WIND_DAYS),
            thresholds
                .comparison
                .expr(col(COL_HEAT_STRESS), thresholds.heat_days)
                .cast(DataType::Float64)
                .alias(COL_HEAT_DAYS),
            thresholds
                .comparison
                .expr(col(COL_HUMIDITY_ABOVE), thresholds.humidity_days)
                .cast(DataType::Float64)
                .alias(COL_HUMIDITY_DAYS),
        ]);

        MonthlyFrame::new(frame)
    }
}

/// Per-year `std / mean * 100` of a monthly column, null for single-month years.
fn coefficient_of_variation(name: &str) -> Expr {
    let per_year = |e: Expr| e.over([col(COL_YEAR)]);
    when(per_year(col(name).count()).gt(lit(1)))
        .then(per_year(col(name).std(1) / col(name).mean() * lit(100.0)))
        .otherwise(lit(NULL).cast(DataType::Float64))
}
