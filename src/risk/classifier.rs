//! Period-level failure frequencies and likelihood scores.

use crate::config::error::ConfigError;
use crate::config::period::{validate_periods, Period};
use crate::config::pipeline_config::{validate_score_columns, PipelineConfig};
use crate::risk::classify::{classify_risk_frequency, classify_risk_score};
use crate::types::indicator::{Indicator, ScoreColumn};
use crate::types::risk::RiskCategory;
use crate::types::yearly::YearlyScoreRow;
use log::{debug, warn};
use polars::prelude::*;

/// One row of a period's risk table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskEntry {
    pub column: ScoreColumn,
    /// Percentage of the period's usable years where the score was 0. `NaN` when
    /// the period had no usable year.
    pub frequency: f64,
    /// Likelihood score in `[0, 1]`.
    pub score: f64,
    pub category: RiskCategory,
}

/// The risk table of one period: one entry per scored indicator, in configured
/// order, followed by the `Final_Score` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodRisk {
    pub period: Period,
    pub entries: Vec<RiskEntry>,
}

impl PeriodRisk {
    pub fn entry(&self, column: impl Into<ScoreColumn>) -> Option<&RiskEntry> {
        let column = column.into();
        self.entries.iter().find(|e| e.column == column)
    }

    pub fn final_entry(&self) -> Option<&RiskEntry> {
        self.entry(ScoreColumn::Final)
    }

    /// Renders the table with the columns `indicator`, `Frequency {p} (%)`,
    /// `Risk {p}` and `Score {p}`, where `{p}` is the period label.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let label = self.period.label();
        let names: Vec<&str> = self.entries.iter().map(|e| e.column.name()).collect();
        let frequencies: Vec<f64> = self.entries.iter().map(|e| e.frequency).collect();
        let categories: Vec<&str> = self.entries.iter().map(|e| e.category.label()).collect();
        let scores: Vec<f64> = self.entries.iter().map(|e| e.score).collect();

        DataFrame::new(vec![
            Column::new("indicator".into(), names),
            Column::new(format!("Frequency {label} (%)").into(), frequencies),
            Column::new(format!("Risk {label}").into(), categories),
            Column::new(format!("Score {label}").into(), scores),
        ])
    }
}

/// Places the tables of several periods side by side, sharing one `indicator`
/// column.
pub fn period_risk_frame(periods: &[PeriodRisk]) -> PolarsResult<DataFrame> {
    let mut frames = periods.iter().map(PeriodRisk::to_frame);
    let mut combined = match frames.next() {
        Some(first) => first?,
        None => return Ok(DataFrame::empty()),
    };
    for frame in frames {
        let frame = frame?.drop("indicator")?;
        combined = combined.hstack(frame.get_columns())?;
    }
    Ok(combined)
}

/// Percentage of present scores equal to 0. Missing scores leave the
/// denominator; with no present score the result is `NaN`.
pub fn failure_frequency(scores: impl IntoIterator<Item = Option<u8>>) -> f64 {
    let (zeros, total) = scores
        .into_iter()
        .flatten()
        .fold((0usize, 0usize), |(zeros, total), s| {
            (zeros + usize::from(s == 0), total + 1)
        });
    if total == 0 {
        f64::NAN
    } else {
        zeros as f64 / total as f64 * 100.0
    }
}

/// Splits yearly scores into periods and classifies each indicator's failure
/// frequency.
#[derive(Debug, Clone)]
pub struct PeriodRiskClassifier {
    periods: Vec<Period>,
    score_columns: Vec<Indicator>,
}

impl PeriodRiskClassifier {
    /// # Errors
    ///
    /// Rejects empty, inverted, overlapping or gapped periods and empty or
    /// duplicated score columns.
    pub fn new(periods: Vec<Period>, score_columns: Vec<Indicator>) -> Result<Self, ConfigError> {
        validate_periods(&periods)?;
        validate_score_columns(&score_columns)?;
        Ok(Self {
            periods,
            score_columns,
        })
    }

    pub fn from_config(config: &PipelineConfig) -> Result<Self, ConfigError> {
        Self::new(config.periods.clone(), config.score_columns.clone())
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn score_columns(&self) -> &[Indicator] {
        &self.score_columns
    }

    /// Classifies every configured period. Years outside all periods are ignored.
    pub fn classify(&self, scores: &[YearlyScoreRow]) -> Vec<PeriodRisk> {
        self.periods
            .iter()
            .map(|period| self.classify_period(*period, scores))
            .collect()
    }

    fn classify_period(&self, period: Period, scores: &[YearlyScoreRow]) -> PeriodRisk {
        let years: Vec<&YearlyScoreRow> = scores
            .iter()
            .filter(|row| period.contains(row.year))
            .collect();
        debug!("Classifying {} years in period {period}", years.len());

        let mut entries: Vec<RiskEntry> = self
            .score_columns
            .iter()
            .map(|indicator| {
                let frequency = failure_frequency(years.iter().map(|row| row.get(*indicator)));
                if frequency.is_nan() {
                    warn!("No usable {indicator} values in period {period}");
                }
                let score = classify_risk_frequency(frequency);
                RiskEntry {
                    column: ScoreColumn::Indicator(*indicator),
                    frequency,
                    score,
                    category: classify_risk_score(score),
                }
            })
            .collect();

        let count = entries.len() as f64;
        let mean_frequency = entries.iter().map(|e| e.frequency).sum::<f64>() / count;
        let mean_score = entries.iter().map(|e| e.score).sum::<f64>() / count;
        entries.push(RiskEntry {
            column: ScoreColumn::Final,
            frequency: mean_frequency,
            score: mean_score,
            category: classify_risk_score(mean_score),
        });

        PeriodRisk { period, entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::f64_values;

    fn years(range: std::ops::RangeInclusive<i32>, score: Option<u8>) -> Vec<YearlyScoreRow> {
        range.map(|year| YearlyScoreRow::uniform(year, score)).collect()
    }

    fn single_period(start: i32, end: i32) -> Result<PeriodRiskClassifier, ConfigError> {
        PeriodRiskClassifier::new(vec![Period::new(start, end)], Indicator::ALL.to_vec())
    }

    #[test]
    fn test_always_suitable_is_exceptionally_improbable() -> Result<(), ConfigError> {
        let risks = single_period(1990, 2009)?.classify(&years(1990..=2009, Some(1)));
        for entry in &risks[0].entries {
            assert_eq!(entry.frequency, 0.0);
            assert_eq!(entry.score, 0.0);
            assert_eq!(entry.category, RiskCategory::ExceptionallyImprobable);
        }
        Ok(())
    }

    #[test]
    fn test_never_suitable_is_virtually_certain() -> Result<(), ConfigError> {
        let risks = single_period(1990, 2009)?.classify(&years(1990..=2009, Some(0)));
        for entry in &risks[0].entries {
            assert_eq!(entry.frequency, 100.0);
            assert_eq!(entry.score, 1.0);
            assert_eq!(entry.category, RiskCategory::VirtuallyCertain);
        }
        Ok(())
    }

    #[test]
    fn test_final_entry_is_mean_of_indicators() -> Result<(), ConfigError> {
        let classifier = PeriodRiskClassifier::new(
            vec![Period::new(2000, 2009)],
            vec![Indicator::Temperature, Indicator::Wind],
        )?;
        // temperature fails in 5 of 10 years, wind never fails
        let scores: Vec<_> = (2000..=2009)
            .map(|year| YearlyScoreRow {
                temperature: Some(u8::from(year % 2 == 0)),
                ..YearlyScoreRow::uniform(year, Some(1))
            })
            .collect();

        let risk = &classifier.classify(&scores)[0];
        assert_eq!(risk.entries.len(), 3);
        let temperature = risk.entry(Indicator::Temperature).unwrap();
        assert_eq!(temperature.frequency, 50.0);
        assert_eq!(temperature.score, 0.5);
        assert_eq!(temperature.category, RiskCategory::AsLikelyAsNot);

        let final_entry = risk.final_entry().unwrap();
        assert_eq!(final_entry.frequency, 25.0);
        assert_eq!(final_entry.score, 0.25);
        assert_eq!(final_entry.category, RiskCategory::Unlikely);
        Ok(())
    }

    #[test]
    fn test_years_are_partitioned_by_period() -> Result<(), ConfigError> {
        let classifier = PeriodRiskClassifier::new(
            vec![Period::new(2000, 2004), Period::new(2005, 2009)],
            vec![Indicator::Gdd],
        )?;
        let mut scores = years(2000..=2004, Some(0));
        scores.extend(years(2005..=2009, Some(1)));
        scores.extend(years(2010..=2012, Some(0)));

        let risks = classifier.classify(&scores);
        assert_eq!(risks[0].entry(Indicator::Gdd).unwrap().frequency, 100.0);
        assert_eq!(risks[1].entry(Indicator::Gdd).unwrap().frequency, 0.0);
        Ok(())
    }

    #[test]
    fn test_missing_scores_leave_the_denominator() {
        let scores = [Some(0), None, Some(1), None, Some(1), Some(1)];
        assert_eq!(failure_frequency(scores), 25.0);
        assert!(failure_frequency([None, None]).is_nan());
        assert!(failure_frequency(std::iter::empty()).is_nan());
    }

    #[test]
    fn test_empty_period_scores_zero_and_poisons_final_frequency() -> Result<(), ConfigError> {
        let risks = single_period(2030, 2050)?.classify(&years(1990..=2009, Some(0)));
        let risk = &risks[0];
        for entry in &risk.entries {
            assert!(entry.frequency.is_nan());
            assert_eq!(entry.score, 0.0);
            assert_eq!(entry.category, RiskCategory::ExceptionallyImprobable);
        }
        Ok(())
    }

    #[test]
    fn test_invalid_periods_are_rejected() {
        let gap = PeriodRiskClassifier::new(
            vec![Period::new(1950, 1969), Period::new(1971, 1990)],
            vec![Indicator::Gdd],
        );
        assert!(matches!(gap, Err(ConfigError::PeriodGap(_, _))));

        let empty = PeriodRiskClassifier::new(vec![], vec![Indicator::Gdd]);
        assert!(matches!(empty, Err(ConfigError::NoPeriods)));

        let no_columns = PeriodRiskClassifier::new(vec![Period::new(1950, 1969)], vec![]);
        assert!(matches!(no_columns, Err(ConfigError::NoScoreColumns)));
    }

    #[test]
    fn test_to_frame_layout() -> Result<(), Box<dyn std::error::Error>> {
        let classifier = PeriodRiskClassifier::new(
            vec![Period::new(1990, 2009), Period::new(2010, 2029)],
            vec![Indicator::Temperature, Indicator::SeasonLength],
        )?;
        let risks = classifier.classify(&years(1990..=2029, Some(1)));

        let df = risks[0].to_frame()?;
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "indicator",
                "Frequency 1990-2009 (%)",
                "Risk 1990-2009",
                "Score 1990-2009"
            ]
        );
        let indicators: Vec<Option<&str>> = df.column("indicator")?.str()?.into_iter().collect();
        assert_eq!(
            indicators,
            vec![
                Some("temperature_score"),
                Some("season_length_score"),
                Some("Final_Score")
            ]
        );

        let combined = period_risk_frame(&risks)?;
        assert_eq!(combined.width(), 7);
        assert_eq!(f64_values(&combined, "Score 2010-2029")?, vec![Some(0.0); 3]);
        Ok(())
    }
}
