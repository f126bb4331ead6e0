use crate::config::error::ConfigError;
use crate::weather_data::error::WeatherDataError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgroRiskError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    WeatherData(#[from] WeatherDataError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrame(#[from] PolarsError),
}
