pub mod aggregation;
pub mod error;
pub mod period;
pub mod pipeline_config;
pub mod season;
pub mod thresholds;
