//! Runs the whole chain for one location: daily indicators, monthly and yearly
//! aggregates, season detection, yearly scores, period risk and the final
//! score record.

use crate::config::error::ConfigError;
use crate::config::pipeline_config::PipelineConfig;
use crate::error::AgroRiskError;
use crate::risk::classifier::{period_risk_frame, PeriodRisk, PeriodRiskClassifier};
use crate::risk::final_score::FinalScoreTable;
use crate::scoring::indicator_scores;
use crate::season::detect_seasons;
use crate::types::frames::daily_indicator_frame::DailyIndicatorFrame;
use crate::types::frames::daily_series::DailySeries;
use crate::types::frames::monthly_frame::MonthlyFrame;
use crate::types::location::LatLon;
use crate::types::yearly::{YearlyRow, YearlyScoreRow};
use crate::weather_data::data_loader::WeatherDataLoader;
use log::{debug, info, warn};
use polars::prelude::*;

/// Every intermediate result of one run.
#[derive(Debug, Clone)]
pub struct LocationRiskReport {
    pub location: LatLon,
    /// In-season daily rows with their indicators.
    pub daily: DataFrame,
    /// One row per in-season `(year, month)`.
    pub monthly: DataFrame,
    pub yearly: Vec<YearlyRow>,
    pub scores: Vec<YearlyScoreRow>,
    pub period_risks: Vec<PeriodRisk>,
    pub final_scores: FinalScoreTable,
}

impl LocationRiskReport {
    /// The risk tables of all periods side by side.
    pub fn risk_frame(&self) -> PolarsResult<DataFrame> {
        period_risk_frame(&self.period_risks)
    }
}

/// A validated configuration ready to score locations.
///
/// # Examples
///
/// ```
/// use agroclimate_risk::{PipelineConfig, RiskPipeline};
///
/// let pipeline = RiskPipeline::new(PipelineConfig::default())?;
/// assert_eq!(pipeline.config().periods.len(), 5);
/// # Ok::<(), agroclimate_risk::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RiskPipeline {
    config: PipelineConfig,
    classifier: PeriodRiskClassifier,
}

impl RiskPipeline {
    pub fn new(config: PipelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let classifier = PeriodRiskClassifier::from_config(&config)?;
        Ok(Self { config, classifier })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Scores one location.
    pub fn run(&self, series: &DailySeries) -> Result<LocationRiskReport, AgroRiskError> {
        let config = &self.config;
        info!("Scoring location {}", series.location);

        let daily = series
            .indicators(&config.season_window, &config.daily)
            .frame
            .collect()?;
        if daily.height() == 0 {
            warn!(
                "No in-season days for {}; every period will be empty",
                series.location
            );
        }
        let daily_frame = DailyIndicatorFrame::new(daily.clone().lazy());

        let monthly = daily_frame
            .monthly(&config.monthly_aggregation, &config.monthly)
            .frame
            .collect()?;
        let yearly_frame =
            MonthlyFrame::new(monthly.clone().lazy()).yearly(&config.yearly_aggregation);

        let precipitation = daily_frame.precipitation().collect()?;
        let seasons = detect_seasons(&precipitation, &config.season_detection)?;
        let yearly = yearly_frame.collect_rows(&seasons)?;
        debug!(
            "{} in-season days, {} months, {} years",
            daily.height(),
            monthly.height(),
            yearly.len()
        );

        let scores: Vec<YearlyScoreRow> = yearly
            .iter()
            .map(|row| indicator_scores(row, &config.yearly, config.missing_data))
            .collect();
        let period_risks = self.classifier.classify(&scores);
        let final_scores = FinalScoreTable::from_period_risks(series.location, &period_risks)?;

        Ok(LocationRiskReport {
            location: series.location,
            daily,
            monthly,
            yearly,
            scores,
            period_risks,
            final_scores,
        })
    }

    /// Scores several locations and stacks their final score rows in input order.
    pub fn run_many(&self, series: &[DailySeries]) -> Result<FinalScoreTable, AgroRiskError> {
        let mut table =
            FinalScoreTable::empty(&self.config.periods, &self.config.score_columns)?;
        for location in series {
            let report = self.run(location)?;
            table.vstack(&report.final_scores)?;
        }
        Ok(table)
    }

    /// Loads (or downloads) the series of `location` and scores it.
    pub async fn run_for_location(
        &self,
        loader: &WeatherDataLoader,
        location: LatLon,
    ) -> Result<LocationRiskReport, AgroRiskError> {
        let series = loader.get_series(location).await?;
        self.run(&series)
    }
}
