use crate::config::aggregation::{MonthlyAggregation, YearlyAggregation};
use crate::config::error::ConfigError;
use crate::config::period::{default_periods, validate_periods, Period};
use crate::config::season::{SeasonDetection, SeasonWindow};
use crate::config::thresholds::{DailyThresholds, MonthlyThresholds, YearlyThresholds};
use crate::types::indicator::Indicator;
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// What a yearly score becomes when one of its inputs is missing (a year with a
/// single in-season month has no CV; a dry year has no detectable season).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingDataPolicy {
    /// The score is 0 and the year counts as a failure.
    #[default]
    Fail,
    /// The score is missing and the year leaves that indicator's frequency
    /// denominator.
    Exclude,
}

/// Every adjustable value of the scoring pipeline.
///
/// Build one in code with [`PipelineConfig::builder`], or load overrides from
/// JSON; fields absent from the JSON keep their defaults.
///
/// # Examples
///
/// ```
/// use agroclimate_risk::{Indicator, PipelineConfig, Period};
///
/// let config = PipelineConfig::from_json_str(
///     r#"{
///         "periods": [[1990, 2009], [2010, 2029]],
///         "score_columns": ["temperature_score", "season_length_score"],
///         "daily": { "heat_stress": 33.0 }
///     }"#,
/// )?;
/// assert_eq!(config.periods, vec![Period::new(1990, 2009), Period::new(2010, 2029)]);
/// assert_eq!(config.score_columns, vec![Indicator::Temperature, Indicator::SeasonLength]);
/// assert_eq!(config.daily.heat_stress, 33.0);
/// assert_eq!(config.daily.gdd_base_temp, 10.0);
/// # Ok::<(), agroclimate_risk::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct PipelineConfig {
    #[builder(default)]
    pub season_window: SeasonWindow,
    #[builder(default)]
    pub daily: DailyThresholds,
    #[builder(default)]
    pub monthly: MonthlyThresholds,
    #[builder(default)]
    pub yearly: YearlyThresholds,
    #[builder(default)]
    pub season_detection: SeasonDetection,
    #[builder(default)]
    pub monthly_aggregation: MonthlyAggregation,
    #[builder(default)]
    pub yearly_aggregation: YearlyAggregation,
    #[builder(default = default_periods())]
    pub periods: Vec<Period>,
    /// Indicators scored and reported, in output order.
    #[builder(default = Indicator::ALL.to_vec())]
    pub score_columns: Vec<Indicator>,
    #[builder(default)]
    pub missing_data: MissingDataPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PipelineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PipelineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        Self::from_json_str(&json)
    }

    /// Rejects configurations the classifier cannot give a meaning to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.season_window.validate()?;
        self.season_detection.validate()?;
        validate_periods(&self.periods)?;
        validate_score_columns(&self.score_columns)
    }
}

pub(crate) fn validate_score_columns(columns: &[Indicator]) -> Result<(), ConfigError> {
    if columns.is_empty() {
        return Err(ConfigError::NoScoreColumns);
    }
    let mut seen = HashSet::new();
    for indicator in columns {
        if !seen.insert(*indicator) {
            return Err(ConfigError::DuplicateIndicator(*indicator));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.score_columns.len(), 11);
        assert_eq!(config.periods.len(), 5);
        assert_eq!(config.missing_data, MissingDataPolicy::Fail);
    }

    #[test]
    fn test_empty_json_gives_defaults() -> Result<(), ConfigError> {
        assert_eq!(PipelineConfig::from_json_str("{}")?, PipelineConfig::default());
        Ok(())
    }

    #[test]
    fn test_unknown_score_column_is_a_parse_error() {
        let result = PipelineConfig::from_json_str(r#"{"score_columns": ["season_end_shift_score"]}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_duplicate_score_column_is_rejected() {
        let result = PipelineConfig::from_json_str(
            r#"{"score_columns": ["wind_score", "gdd_score", "wind_score"]}"#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::DuplicateIndicator(Indicator::Wind))
        ));
    }

    #[test]
    fn test_empty_score_columns_is_rejected() {
        let config = PipelineConfig::builder().score_columns(vec![]).build();
        assert!(matches!(config.validate(), Err(ConfigError::NoScoreColumns)));
    }

    #[test]
    fn test_gapped_periods_are_rejected_on_load() {
        let result = PipelineConfig::from_json_str(r#"{"periods": [[1950, 1969], [1980, 1999]]}"#);
        assert!(matches!(result, Err(ConfigError::PeriodGap(_, _))));
    }

    #[test]
    fn test_missing_data_policy_from_json() -> Result<(), ConfigError> {
        let config = PipelineConfig::from_json_str(r#"{"missing_data": "exclude"}"#)?;
        assert_eq!(config.missing_data, MissingDataPolicy::Exclude);
        Ok(())
    }

    #[test]
    fn test_from_json_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        write!(
            file,
            r#"{{"season_window": {{"start_month": 5, "end_month": 9}}, "monthly_aggregation": {{"solar_radiation": "mean"}}}}"#
        )?;
        let config = PipelineConfig::from_json_file(file.path())?;
        assert_eq!(config.season_window.start_month, 5);
        assert_eq!(config.season_window.end_month, 9);
        Ok(())
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("/definitely/not/here/config.json");
        let result = PipelineConfig::from_json_file(path);
        assert!(matches!(result, Err(ConfigError::Read(p, _)) if p == path));
    }

    #[test]
    fn test_config_round_trips_through_json() -> Result<(), Box<dyn std::error::Error>> {
        let config = PipelineConfig::builder()
            .missing_data(MissingDataPolicy::Exclude)
            .periods(vec![Period::new(2000, 2010)])
            .build();
        let json = serde_json::to_string(&config)?;
        assert_eq!(PipelineConfig::from_json_str(&json)?, config);
        Ok(())
    }
}
