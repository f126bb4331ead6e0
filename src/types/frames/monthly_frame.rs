use crate::config::aggregation::YearlyAggregation;
use crate::types::columns::*;
use crate::types::frames::yearly_frame::YearlyFrame;
use polars::prelude::*;

/// One row per in-season `(year, month)`, sorted by year then month.
///
/// Columns: `year`, `month`, the monthly aggregates of the daily indicators,
/// `cv_temperature`, `cv_precipitation` and the three
/// `is_*_days_above_threshold` month flags.
#[derive(Clone)]
pub struct MonthlyFrame {
    pub frame: LazyFrame,
}

impl MonthlyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Collapses the months of each year into a single row.
    ///
    /// The month flags become counts of flagged months; every other column is
    /// reduced with the function configured in `aggregation`.
    pub fn yearly(&self, aggregation: &YearlyAggregation) -> YearlyFrame {
        let frame = self
            .frame
            .clone()
            .group_by([col(COL_YEAR)])
            .agg([
                aggregation.temperature.apply(col(COL_TEMP_MEAN)),
                aggregation.cv.apply(col(COL_CV_TEMP)),
                aggregation.gdd.apply(col(COL_GDD)),
                aggregation.precipitation.apply(col(COL_PRECIP)),
                aggregation.cv.apply(col(COL_CV_PRECIP)),
                aggregation.day_counts.apply(col(COL_EXTREME_PRECIP)),
                aggregation
                    .soil_moisture_deficit
                    .apply(col(COL_SOIL_DEFICIT)),
                aggregation.solar_radiation.apply(col(COL_SOLAR)),
                aggregation.day_counts.apply(col(COL_WIND_DAYS)),
                aggregation.day_counts.apply(col(COL_HEAT_DAYS)),
                aggregation.day_counts.apply(col(COL_HUMIDITY_DAYS)),
                aggregation.consecutive_dry_days.apply(col(COL_DRY_DAYS)),
            ])
            .sort([COL_YEAR], SortMultipleOptions::default());

        YearlyFrame::new(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{f64_values, i32_values};

    fn monthly_fixture() -> PolarsResult<DataFrame> {
        df!(
            COL_YEAR => [2002, 2001, 2001],
            COL_MONTH => [6, 6, 7],
            COL_TEMP_MEAN => [26.0, 24.0, 28.0],
            COL_CV_TEMP => [None, Some(11.0), Some(11.0)],
            COL_GDD => [400.0, 300.0, 350.0],
            COL_PRECIP => [120.0, 80.0, 200.0],
            COL_CV_PRECIP => [None, Some(60.0), Some(60.0)],
            COL_EXTREME_PRECIP => [0.0, 1.0, 2.0],
            COL_SOIL_DEFICIT => [0.5, 1.0, 0.0],
            COL_SOLAR => [600.0, 550.0, 500.0],
            COL_WIND_DAYS => [0.0, 1.0, 0.0],
            COL_HEAT_DAYS => [0.0, 1.0, 1.0],
            COL_HUMIDITY_DAYS => [1.0, 0.0, 0.0],
            COL_DRY_DAYS => [4.0, 9.0, 3.0]
        )
    }

    #[test]
    fn test_yearly_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let monthly = MonthlyFrame::new(monthly_fixture()?.lazy());
        let df = monthly
            .yearly(&YearlyAggregation::default())
            .frame
            .collect()?;

        assert_eq!(i32_values(&df, COL_YEAR)?, vec![Some(2001), Some(2002)]);
        assert_eq!(f64_values(&df, COL_TEMP_MEAN)?, vec![Some(26.0), Some(26.0)]);
        assert_eq!(f64_values(&df, COL_CV_TEMP)?, vec![Some(11.0), None]);
        assert_eq!(f64_values(&df, COL_GDD)?, vec![Some(650.0), Some(400.0)]);
        assert_eq!(f64_values(&df, COL_PRECIP)?, vec![Some(280.0), Some(120.0)]);
        assert_eq!(f64_values(&df, COL_HEAT_DAYS)?, vec![Some(2.0), Some(0.0)]);
        assert_eq!(f64_values(&df, COL_DRY_DAYS)?, vec![Some(9.0), Some(4.0)]);
        Ok(())
    }

    #[test]
    fn test_yearly_respects_configured_functions() -> Result<(), Box<dyn std::error::Error>> {
        use crate::config::aggregation::Aggregation;

        let aggregation = YearlyAggregation::builder()
            .temperature(Aggregation::Max)
            .solar_radiation(Aggregation::Mean)
            .build();
        let df = MonthlyFrame::new(monthly_fixture()?.lazy())
            .yearly(&aggregation)
            .frame
            .collect()?;

        assert_eq!(f64_values(&df, COL_TEMP_MEAN)?, vec![Some(28.0), Some(26.0)]);
        assert_eq!(f64_values(&df, COL_SOLAR)?, vec![Some(525.0), Some(600.0)]);
        Ok(())
    }
}
