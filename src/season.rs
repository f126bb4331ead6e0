//! Rainy-season onset and length detection from daily precipitation.
//!
//! Both quantities come from a trailing rolling sum over a fixed number of rows,
//! computed separately for every year of in-season days. A window containing a
//! missing day, or not yet full, has no sum.

use crate::config::season::SeasonDetection;
use crate::types::columns::{COL_DATE, COL_PRECIP, COL_YEAR};
use crate::utils::{date_values, f64_values, i32_values};
use chrono::NaiveDate;
use log::warn;
use polars::prelude::{DataFrame, PolarsResult};
use std::collections::BTreeMap;

/// The season detected in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeasonOutcome {
    /// Days from the reference date (June 1st by default) to onset.
    pub start_shift: Option<i64>,
    /// Days from the length onset to the last rainy window.
    pub length: Option<i64>,
}

/// Trailing sums over `window` rows. The first `window - 1` entries, and any
/// entry whose window holds a missing value, are `None`.
pub fn rolling_sums(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }
            values[i + 1 - window..=i]
                .iter()
                .try_fold(0.0, |acc, v| v.map(|v| acc + v))
        })
        .collect()
}

/// Days between `reference` and the first date whose rolling sum reaches `threshold`.
pub fn season_start_shift(
    dates: &[NaiveDate],
    sums: &[Option<f64>],
    threshold: f64,
    reference: NaiveDate,
) -> Option<i64> {
    first_date(dates, sums, |s| s >= threshold).map(|onset| (onset - reference).num_days())
}

/// Days between the first date whose rolling sum reaches `start_threshold`
/// and the last date whose rolling sum exceeds `end_threshold`.
pub fn season_length(
    dates: &[NaiveDate],
    sums: &[Option<f64>],
    start_threshold: f64,
    end_threshold: f64,
) -> Option<i64> {
    let start = first_date(dates, sums, |s| s >= start_threshold)?;
    let end = dates
        .iter()
        .zip(sums)
        .rev()
        .find(|(_, s)| s.is_some_and(|s| s > end_threshold))
        .map(|(d, _)| *d)?;
    Some((end - start).num_days())
}

fn first_date(
    dates: &[NaiveDate],
    sums: &[Option<f64>],
    predicate: impl Fn(f64) -> bool,
) -> Option<NaiveDate> {
    dates
        .iter()
        .zip(sums)
        .find(|(_, s)| s.is_some_and(&predicate))
        .map(|(d, _)| *d)
}

/// Detects the season of every year present in `precipitation`.
///
/// Expects the `date`, `year` and `precipitation_sum` columns in date order, as
/// returned by [`DailyIndicatorFrame::precipitation`](crate::DailyIndicatorFrame::precipitation).
/// Rows with a missing date or year are skipped.
pub fn detect_seasons(
    precipitation: &DataFrame,
    detection: &SeasonDetection,
) -> PolarsResult<BTreeMap<i32, SeasonOutcome>> {
    let dates = date_values(precipitation, COL_DATE)?;
    let years = i32_values(precipitation, COL_YEAR)?;
    let rain = f64_values(precipitation, COL_PRECIP)?;

    let mut by_year: BTreeMap<i32, (Vec<NaiveDate>, Vec<Option<f64>>)> = BTreeMap::new();
    for ((date, year), value) in dates.into_iter().zip(years).zip(rain) {
        if let (Some(date), Some(year)) = (date, year) {
            let (year_dates, year_rain) = by_year.entry(year).or_default();
            year_dates.push(date);
            year_rain.push(value);
        }
    }

    Ok(by_year
        .into_iter()
        .map(|(year, (dates, rain))| (year, detect_year(year, &dates, &rain, detection)))
        .collect())
}

fn detect_year(
    year: i32,
    dates: &[NaiveDate],
    rain: &[Option<f64>],
    detection: &SeasonDetection,
) -> SeasonOutcome {
    let sums = rolling_sums(rain, detection.window_days);

    let start_shift = detection.reference_date(year).and_then(|reference| {
        season_start_shift(dates, &sums, detection.onset_threshold, reference)
    });
    if start_shift.is_none() {
        warn!("No rainy season onset found in {year}");
    }

    let length = season_length(
        dates,
        &sums,
        detection.length_start_threshold,
        detection.length_end_threshold,
    );
    if length.is_none() {
        warn!("Could not determine rainy season length in {year}");
    }

    SeasonOutcome {
        start_shift,
        length,
    }
}
