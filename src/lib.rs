mod config;
mod error;
mod pipeline;
mod risk;
mod scoring;
mod season;
mod types;
mod utils;
mod weather_data;

#[cfg(test)]
mod test_support;

pub use error::AgroRiskError;
pub use pipeline::*;

pub use config::aggregation::{Aggregation, MonthlyAggregation, YearlyAggregation};
pub use config::error::ConfigError;
pub use config::period::{default_periods, validate_periods, Period};
pub use config::pipeline_config::{MissingDataPolicy, PipelineConfig};
pub use config::season::{SeasonDetection, SeasonWindow};
pub use config::thresholds::{
    Bounds, Comparison, DailyThresholds, MonthlyThresholds, YearlyThresholds,
};

pub use types::columns;
pub use types::frames::daily_indicator_frame::*;
pub use types::frames::daily_series::*;
pub use types::frames::monthly_frame::*;
pub use types::frames::yearly_frame::*;
pub use types::indicator::{Indicator, ScoreColumn};
pub use types::location::LatLon;
pub use types::risk::{ExposureClass, RiskCategory, SuitabilityClass};
pub use types::yearly::{YearlyRow, YearlyScoreRow};

pub use risk::classifier::*;
pub use risk::classify::*;
pub use risk::final_score::FinalScoreTable;
pub use scoring::indicator_scores;
pub use season::*;

pub use utils::get_cache_dir;
pub use weather_data::csv_loader::load_daily_csv;
pub use weather_data::data_loader::WeatherDataLoader;
pub use weather_data::error::WeatherDataError;
pub use weather_data::open_meteo::{
    ClimateResponse, DailyBlock, OpenMeteoClient, RetryPolicy, CLIMATE_API_URL, DEFAULT_MODEL,
};
