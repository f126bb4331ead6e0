//! Binary yearly suitability scores.

use crate::config::pipeline_config::MissingDataPolicy;
use crate::config::thresholds::{Bounds, YearlyThresholds};
use crate::types::yearly::{YearlyRow, YearlyScoreRow};

/// Scores every agronomic dimension of one year: 1 when the year met its
/// threshold, 0 when it did not.
///
/// A dimension whose inputs are missing (no CV, no detected season) becomes 0
/// under [`MissingDataPolicy::Fail`] and `None` under
/// [`MissingDataPolicy::Exclude`]. A condition that fails on present data fails
/// the score whatever the other inputs are. `NaN` counts as present and fails
/// every comparison.
pub fn indicator_scores(
    row: &YearlyRow,
    thresholds: &YearlyThresholds,
    policy: MissingDataPolicy,
) -> YearlyScoreRow {
    let score = |check: Option<bool>| match (check, policy) {
        (Some(true), _) => Some(1),
        (Some(false), _) | (None, MissingDataPolicy::Fail) => Some(0),
        (None, MissingDataPolicy::Exclude) => None,
    };
    let within = |value: Option<f64>, bounds: &Bounds| value.map(|v| bounds.contains(v));
    let below = |value: Option<f64>, max: f64| value.map(|v| v < max);
    let at_most = |value: Option<f64>, max: f64| value.map(|v| v <= max);
    let none_above = |count: Option<f64>| count.map(|c| c == 0.0);

    YearlyScoreRow {
        year: row.year,
        temperature: score(all([
            within(row.temperature, &thresholds.temperature),
            below(row.cv_temperature, thresholds.max_cv_temperature),
        ])),
        gdd: score(within(row.gdd, &thresholds.gdd)),
        precipitation: score(all([
            within(row.precipitation, &thresholds.precipitation),
            below(row.cv_precipitation, thresholds.max_cv_precipitation),
        ])),
        extreme_precipitation: score(at_most(
            row.extreme_precipitation_days,
            thresholds.max_extreme_precipitation_days,
        )),
        soil_moisture: score(at_most(
            row.soil_moisture_deficit,
            thresholds.max_soil_moisture_deficit,
        )),
        wind: score(none_above(row.wind_days_above_threshold)),
        heat_stress: score(none_above(row.heat_days_above_threshold)),
        humidity: score(none_above(row.humidity_days_above_threshold)),
        solar_radiation: score(
            row.solar_radiation
                .map(|v| v >= thresholds.min_solar_radiation),
        ),
        season_start_shift: score(row.season_start_shift.map(|shift| {
            thresholds
                .season_start_shift_comparison
                .holds(shift as f64, thresholds.season_start_shift)
        })),
        season_length: score(
            row.season_length
                .map(|length| length as f64 > thresholds.min_season_length),
        ),
    }
}

/// Three-valued AND: any definite `false` wins over missing values.
fn all<const N: usize>(checks: [Option<bool>; N]) -> Option<bool> {
    if checks.contains(&Some(false)) {
        Some(false)
    } else if checks.contains(&None) {
        None
    } else {
        Some(true)
    }
}
