//! Daily, monthly and yearly thresholds that turn weather into indicator flags
//! and yearly suitability scores.

use bon::Builder;
use polars::prelude::{lit, Expr};
use serde::{Deserialize, Serialize};

/// Direction of a threshold test, serialized as the operator symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessOrEqual,
}

impl Comparison {
    /// Evaluates `value <op> threshold`. `NaN` never satisfies a comparison.
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::Greater => value > threshold,
            Comparison::GreaterOrEqual => value >= threshold,
            Comparison::Less => value < threshold,
            Comparison::LessOrEqual => value <= threshold,
        }
    }

    /// The same test as a Polars expression. Nulls stay null.
    pub(crate) fn expr(self, value: Expr, threshold: f64) -> Expr {
        match self {
            Comparison::Greater => value.gt(lit(threshold)),
            Comparison::GreaterOrEqual => value.gt_eq(lit(threshold)),
            Comparison::Less => value.lt(lit(threshold)),
            Comparison::LessOrEqual => value.lt_eq(lit(threshold)),
        }
    }
}

/// Inclusive band with optional ends, so one-sided ("at least 1500 GDD") and
/// two-sided ("between 1500 and 3500 GDD") requirements share one type.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        !value.is_nan()
            && self.min.is_none_or(|min| value >= min)
            && self.max.is_none_or(|max| value <= max)
    }
}

/// Per-day thresholds of the daily indicator stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct DailyThresholds {
    /// Base temperature (°C) subtracted from the daily mid-range temperature.
    #[builder(default = 10.0)]
    pub gdd_base_temp: f64,
    /// Daily rainfall (mm) strictly above which a day counts as extreme.
    #[builder(default = 50.0)]
    pub extreme_precipitation: f64,
    /// Daily rainfall (mm) below which a day counts as dry.
    #[builder(default = 1.0)]
    pub dry_day: f64,
    /// Mean temperature (°C) strictly above which a day counts as heat stress.
    #[builder(default = 35.0)]
    pub heat_stress: f64,
    /// Maximum wind speed (m/s) strictly above which a day counts as windy.
    #[builder(default = 10.0)]
    pub wind: f64,
    /// Mean relative humidity (%) strictly above which a day counts as humid.
    #[builder(default = 90.0)]
    pub humidity: f64,
    /// Soil moisture (m³/m³) below which the shortfall accrues as deficit.
    #[builder(default = 0.2)]
    pub soil_moisture: f64,
}

impl Default for DailyThresholds {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Per-month day counts that flag a month as stressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct MonthlyThresholds {
    #[builder(default = 5.0)]
    pub wind_days: f64,
    #[builder(default = 10.0)]
    pub heat_days: f64,
    #[builder(default = 10.0)]
    pub humidity_days: f64,
    /// How a month's day count is tested against its threshold.
    #[builder(default = Comparison::Greater)]
    pub comparison: Comparison,
}

impl Default for MonthlyThresholds {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Yearly suitability requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct YearlyThresholds {
    #[builder(default = Bounds::between(24.0, 30.0))]
    pub temperature: Bounds,
    /// Exclusive upper limit of the temperature CV (%).
    #[builder(default = 10.0)]
    pub max_cv_temperature: f64,
    #[builder(default = Bounds::between(1500.0, 3500.0))]
    pub gdd: Bounds,
    #[builder(default = Bounds::between(700.0, 2000.0))]
    pub precipitation: Bounds,
    /// Exclusive upper limit of the precipitation CV (%).
    #[builder(default = 150.0)]
    pub max_cv_precipitation: f64,
    #[builder(default = 3.0)]
    pub max_extreme_precipitation_days: f64,
    #[builder(default = 5.0)]
    pub max_soil_moisture_deficit: f64,
    #[builder(default = 3000.0)]
    pub min_solar_radiation: f64,
    #[builder(default = 20.0)]
    pub season_start_shift: f64,
    /// Deployments disagree on which side of the shift threshold is suitable,
    /// so the operator is part of the configuration.
    #[builder(default = Comparison::Greater)]
    pub season_start_shift_comparison: Comparison,
    /// Exclusive lower limit of the season length (days).
    #[builder(default = 120.0)]
    pub min_season_length: f64,
}

impl Default for YearlyThresholds {
    fn default() -> Self {
        Self::builder().build()
    }
}
