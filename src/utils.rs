use crate::weather_data::error::WeatherDataError;
use chrono::NaiveDate;
use log::info;
use polars::prelude::{DataFrame, DataType, PolarsResult};
use std::io;
use std::path::{Path, PathBuf};

const CACHE_DIR_NAME: &str = "agroclimate_risk_cache";

// 1970-01-01 counted from 0001-01-01 (day 1 of the common era).
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

pub fn get_cache_dir() -> Result<PathBuf, WeatherDataError> {
    dirs::cache_dir()
        .map(|p| p.join(CACHE_DIR_NAME))
        .ok_or(WeatherDataError::CacheDirResolution)
}

pub async fn ensure_cache_dir_exists(path: &Path) -> Result<(), WeatherDataError> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(WeatherDataError::CacheDirCreation(
            path.to_path_buf(),
            io::Error::new(io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Creating cache directory: {}", path.display());
            tokio::fs::create_dir_all(path)
                .await
                .map_err(|e| WeatherDataError::CacheDirCreation(path.to_path_buf(), e))
        }
        Err(e) => Err(WeatherDataError::CacheDirCreation(path.to_path_buf(), e)),
    }
}

/// Converts a Polars `Date` physical value (days since 1970-01-01).
pub(crate) fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(EPOCH_DAYS_FROM_CE)?)
}

/// Reads a column as nullable `f64` values, casting numeric types as needed.
pub(crate) fn f64_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.into_iter().collect())
}

pub(crate) fn i32_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<i32>>> {
    let column = df.column(name)?.cast(&DataType::Int32)?;
    Ok(column.i32()?.into_iter().collect())
}

/// Reads a `Date` column as calendar dates.
pub(crate) fn date_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<NaiveDate>>> {
    Ok(i32_values(df, name)?
        .into_iter()
        .map(|days| days.and_then(date_from_epoch_days))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_date_from_epoch_days() {
        assert_eq!(date_from_epoch_days(0), NaiveDate::from_ymd_opt(1970, 1, 1));
        assert_eq!(date_from_epoch_days(-1), NaiveDate::from_ymd_opt(1969, 12, 31));
        assert_eq!(date_from_epoch_days(19_723), NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn test_column_helpers_cast_and_keep_nulls() -> Result<(), Box<dyn std::error::Error>> {
        let dates = [
            NaiveDate::from_ymd_opt(2001, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2001, 6, 2).unwrap(),
        ];
        let df = DataFrame::new(vec![
            Column::new("date".into(), dates.as_slice()),
            Column::new("count".into(), &[Some(3i64), None]),
        ])?;
        assert_eq!(f64_values(&df, "count")?, vec![Some(3.0), None]);
        assert_eq!(i32_values(&df, "count")?, vec![Some(3), None]);
        assert_eq!(
            date_values(&df, "date")?,
            dates.iter().copied().map(Some).collect::<Vec<_>>()
        );
        assert!(f64_values(&df, "missing").is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_cache_dir_creates_nested_dirs() -> Result<(), Box<dyn std::error::Error>> {
        let root = tempfile::tempdir()?;
        let nested = root.path().join("a").join("b");
        ensure_cache_dir_exists(&nested).await?;
        assert!(nested.is_dir());
        // second call is a no-op
        ensure_cache_dir_exists(&nested).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_cache_dir_rejects_files() -> Result<(), Box<dyn std::error::Error>> {
        let file = tempfile::NamedTempFile::new()?;
        let result = ensure_cache_dir_exists(file.path()).await;
        assert!(matches!(result, Err(WeatherDataError::CacheDirCreation(_, _))));
        Ok(())
    }
}
