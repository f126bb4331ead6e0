//! Aggregation function per field for the daily→monthly and monthly→yearly
//! resampling steps.

use bon::Builder;
use polars::prelude::Expr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Sum,
    Mean,
    Max,
    Min,
}

impl Aggregation {
    pub(crate) fn apply(self, expr: Expr) -> Expr {
        match self {
            Aggregation::Sum => expr.sum(),
            Aggregation::Mean => expr.mean(),
            Aggregation::Max => expr.max(),
            Aggregation::Min => expr.min(),
        }
    }
}

/// How daily indicators collapse into one row per (year, month).
///
/// Day-count fields (extreme rain, heat, wind, humidity) share one function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct MonthlyAggregation {
    #[builder(default = Aggregation::Mean)]
    pub temperature: Aggregation,
    #[builder(default = Aggregation::Sum)]
    pub precipitation: Aggregation,
    #[builder(default = Aggregation::Sum)]
    pub gdd: Aggregation,
    #[builder(default = Aggregation::Sum)]
    pub solar_radiation: Aggregation,
    #[builder(default = Aggregation::Sum)]
    pub soil_moisture_deficit: Aggregation,
    #[builder(default = Aggregation::Sum)]
    pub day_counts: Aggregation,
    #[builder(default = Aggregation::Max)]
    pub consecutive_dry_days: Aggregation,
}

impl Default for MonthlyAggregation {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// How monthly rows collapse into one row per year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct YearlyAggregation {
    #[builder(default = Aggregation::Mean)]
    pub temperature: Aggregation,
    #[builder(default = Aggregation::Sum)]
    pub precipitation: Aggregation,
    #[builder(default = Aggregation::Sum)]
    pub gdd: Aggregation,
    #[builder(default = Aggregation::Sum)]
    pub solar_radiation: Aggregation,
    #[builder(default = Aggregation::Sum)]
    pub soil_moisture_deficit: Aggregation,
    /// Applied to both coefficient-of-variation columns.
    #[builder(default = Aggregation::Mean)]
    pub cv: Aggregation,
    #[builder(default = Aggregation::Sum)]
    pub day_counts: Aggregation,
    #[builder(default = Aggregation::Max)]
    pub consecutive_dry_days: Aggregation,
}

impl Default for YearlyAggregation {
    fn default() -> Self {
        Self::builder().build()
    }
}
