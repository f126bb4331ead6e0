//! Client for the Open-Meteo climate API, which serves modelled daily weather
//! from 1950 to 2050 for any point.

use crate::types::columns::{COL_DATE, COL_LAT, COL_LON, RAW_VARIABLES};
use crate::types::frames::daily_series::DailySeries;
use crate::types::location::LatLon;
use crate::weather_data::error::WeatherDataError;
use bon::bon;
use chrono::NaiveDate;
use log::{info, warn};
use polars::prelude::*;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

pub const CLIMATE_API_URL: &str = "https://climate-api.open-meteo.com/v1/climate";
pub const DEFAULT_MODEL: &str = "MRI_AGCM3_2_S";

pub const DEFAULT_START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1950, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};
pub const DEFAULT_END_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2050, 12, 31) {
    Some(date) => date,
    None => NaiveDate::MAX,
};

/// How often, and how patiently, a failed request is repeated.
///
/// Only timeouts, connection failures, `429` and `5xx` responses are retried.
/// The wait before retry `n` (0-based) is `backoff_factor * 2^n` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            backoff_factor: 0.2,
        }
    }
}

impl RetryPolicy {
    pub fn delay(&self, retry: u32) -> Duration {
        Duration::from_secs_f64((self.backoff_factor * 2f64.powi(retry as i32)).max(0.0))
    }
}

/// The subset of the climate API response the pipeline reads.
#[derive(Debug, Clone, Deserialize)]
pub struct ClimateResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub daily: DailyBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyBlock {
    /// ISO dates, one per row.
    pub time: Vec<String>,
    /// Every requested variable, keyed by its API name.
    #[serde(flatten)]
    pub variables: HashMap<String, Vec<Option<f64>>>,
}

impl ClimateResponse {
    /// Converts the response into the daily series of `location`.
    ///
    /// `location` is the requested point; the API may answer with the nearest
    /// grid cell, whose coordinates are only logged.
    pub fn into_series(mut self, location: LatLon) -> Result<DailySeries, WeatherDataError> {
        let expected = self.daily.time.len();
        let dates = self
            .daily
            .time
            .iter()
            .enumerate()
            .map(|(row, value)| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                    WeatherDataError::InvalidDate {
                        row,
                        value: value.clone(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut columns = vec![
            Column::new(COL_DATE.into(), dates),
            Column::new(COL_LAT.into(), vec![location.lat(); expected]),
            Column::new(COL_LON.into(), vec![location.lon(); expected]),
        ];
        for variable in RAW_VARIABLES {
            let values = self
                .daily
                .variables
                .remove(variable)
                .ok_or_else(|| WeatherDataError::MissingColumn(variable.to_string()))?;
            if values.len() != expected {
                return Err(WeatherDataError::LengthMismatch {
                    variable: variable.to_string(),
                    expected,
                    found: values.len(),
                });
            }
            columns.push(Column::new(variable.into(), values));
        }

        info!(
            "Received {expected} days for {location} (grid cell {:.4}, {:.4})",
            self.latitude, self.longitude
        );
        DailySeries::new(DataFrame::new(columns)?, location)
    }
}

pub struct OpenMeteoClient {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[bon]
impl OpenMeteoClient {
    pub fn new() -> Self {
        Self::with_base_url(CLIMATE_API_URL)
    }

    /// A client talking to another deployment of the climate API.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Downloads the daily series of one point.
    ///
    /// Wind speed is requested in m/s and dates in the point's local time zone.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The point to download.
    /// * `.start_date(NaiveDate)`: Optional. Defaults to 1950-01-01.
    /// * `.end_date(NaiveDate)`: Optional. Defaults to 2050-12-31.
    /// * `.model(&str)`: Optional. Defaults to [`DEFAULT_MODEL`].
    ///
    /// # Errors
    ///
    /// Network and HTTP failures surface once the retry policy is exhausted;
    /// a malformed body gives [`WeatherDataError::ResponseDecode`].
    #[builder]
    pub async fn fetch_daily(
        &self,
        location: LatLon,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        model: Option<&str>,
    ) -> Result<DailySeries, WeatherDataError> {
        let start_date = start_date.unwrap_or(DEFAULT_START_DATE).to_string();
        let end_date = end_date.unwrap_or(DEFAULT_END_DATE).to_string();
        let params = [
            ("latitude", location.lat().to_string()),
            ("longitude", location.lon().to_string()),
            ("start_date", start_date),
            ("end_date", end_date),
            ("models", model.unwrap_or(DEFAULT_MODEL).to_string()),
            ("daily", RAW_VARIABLES.join(",")),
            ("timezone", "auto".to_string()),
            ("wind_speed_unit", "ms".to_string()),
        ];

        let mut retry = 0;
        let response = loop {
            match self.request(&params).await {
                Ok(response) => break response,
                Err(e) if e.is_retryable() && retry < self.retry.max_retries => {
                    let delay = self.retry.delay(retry);
                    warn!(
                        "Request for {location} failed ({e}), retrying in {:.1}s",
                        delay.as_secs_f64()
                    );
                    tokio::time::sleep(delay).await;
                    retry += 1;
                }
                Err(e) => return Err(e),
            }
        };

        response.into_series(location)
    }

    async fn request(&self, params: &[(&str, String)]) -> Result<ClimateResponse, WeatherDataError> {
        let url = self.base_url.clone();
        info!("Requesting {url}");

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| WeatherDataError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(match e.status() {
                    Some(status) => WeatherDataError::HttpStatus {
                        url,
                        status,
                        source: e,
                    },
                    None => WeatherDataError::NetworkRequest(url, e),
                });
            }
        };

        response
            .json::<ClimateResponse>()
            .await
            .map_err(|source| WeatherDataError::ResponseDecode { url, source })
    }
}
