use crate::types::frames::daily_series::DailySeries;
use crate::types::location::LatLon;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::open_meteo::OpenMeteoClient;
use log::{info, warn};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::{fs, task};

/// Downloads daily series through an [`OpenMeteoClient`] and keeps each point's
/// series as a parquet file, so a location is downloaded once.
pub struct WeatherDataLoader {
    cache_dir: PathBuf,
    client: OpenMeteoClient,
}

impl WeatherDataLoader {
    pub fn new(cache_dir: &Path, client: OpenMeteoClient) -> WeatherDataLoader {
        WeatherDataLoader {
            cache_dir: cache_dir.to_path_buf(),
            client,
        }
    }

    /// A loader caching under the user cache directory
    /// (e.g. `~/.cache/agroclimate_risk_cache` on Linux).
    pub async fn with_default_cache(client: OpenMeteoClient) -> Result<Self, WeatherDataError> {
        let cache_dir = get_cache_dir()?;
        ensure_cache_dir_exists(&cache_dir).await?;
        Ok(Self::new(&cache_dir, client))
    }

    pub fn cache_path(&self, location: LatLon) -> PathBuf {
        self.cache_dir.join(format!(
            "open-meteo-{:.4}_{:.4}.parquet",
            location.lat(),
            location.lon()
        ))
    }

    /// Returns the full daily series of `location`, downloading it on a cache miss.
    pub async fn get_series(&self, location: LatLon) -> Result<DailySeries, WeatherDataError> {
        let parquet_path = self.cache_path(location);

        if fs::metadata(&parquet_path).await.is_ok() {
            info!("Cache hit for {location} at {:?}", parquet_path);
        } else {
            warn!("Cache miss for {location}. Downloading.");
            let series = self.client.fetch_daily().location(location).call().await?;
            let df = series.frame.collect()?;

            ensure_cache_dir_exists(&self.cache_dir).await?;
            Self::cache_dataframe(df, &self.cache_dir, &parquet_path).await?;
            info!("Cached daily data for {location} to {:?}", parquet_path);
        }

        let df = LazyFrame::scan_parquet(&parquet_path, Default::default())
            .and_then(|frame| frame.collect())
            .map_err(|e| WeatherDataError::ParquetScan(parquet_path.clone(), e))?;
        DailySeries::new(df, location)
    }

    /// Writes the frame next to its final path and moves it into place, so a
    /// reader never sees a half-written file.
    async fn cache_dataframe(
        mut df: DataFrame,
        cache_dir: &Path,
        path: &Path,
    ) -> Result<(), WeatherDataError> {
        let dir = cache_dir.to_path_buf();
        let path_buf = path.to_path_buf();
        task::spawn_blocking(move || {
            let mut temp_file = NamedTempFile::new_in(&dir)
                .map_err(|e| WeatherDataError::ParquetWriteIo(path_buf.clone(), e))?;
            ParquetWriter::new(temp_file.as_file_mut())
                .with_compression(ParquetCompression::Snappy)
                .finish(&mut df)
                .map_err(|e| WeatherDataError::ParquetWritePolars(path_buf.clone(), e))?;
            temp_file
                .persist(&path_buf)
                .map_err(|e| WeatherDataError::ParquetWriteIo(path_buf.clone(), e.error))?;
            Ok::<(), WeatherDataError>(())
        })
        .await??;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::columns::COL_DATE;
    use crate::weather_data::open_meteo::tests::{climate_json, serve};
    use crate::weather_data::open_meteo::RetryPolicy;

    fn no_retry(url: String) -> OpenMeteoClient {
        OpenMeteoClient::with_base_url(url).with_retry(RetryPolicy {
            max_retries: 0,
            backoff_factor: 0.0,
        })
    }

    #[test]
    fn test_cache_path_rounds_coordinates() {
        let loader = WeatherDataLoader::new(Path::new("/tmp/cache"), OpenMeteoClient::new());
        assert_eq!(
            loader.cache_path(LatLon(13.45, -16.583333)),
            PathBuf::from("/tmp/cache/open-meteo-13.4500_-16.5833.parquet")
        );
    }

    #[tokio::test]
    async fn test_miss_downloads_then_hit_reads_cache() -> Result<(), Box<dyn std::error::Error>> {
        let cache = tempfile::tempdir()?;
        let url = serve(vec![(200, climate_json(5))]).await?;
        let loader = WeatherDataLoader::new(cache.path(), no_retry(url));
        let location = LatLon(13.45, -16.58);

        let first = loader.get_series(location).await?.frame.collect()?;
        assert_eq!(first.height(), 5);
        assert!(loader.cache_path(location).is_file());

        // the server only answers once, so this must come from the cache
        let second = loader.get_series(location).await?.frame.collect()?;
        assert_eq!(second.height(), 5);
        assert_eq!(
            second.column(COL_DATE)?.dtype(),
            first.column(COL_DATE)?.dtype()
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_download_leaves_no_cache_file() -> Result<(), Box<dyn std::error::Error>> {
        let cache = tempfile::tempdir()?;
        let url = serve(vec![(404, "{}".to_string())]).await?;
        let loader = WeatherDataLoader::new(cache.path(), no_retry(url));

        let result = loader.get_series(LatLon(1.0, 2.0)).await;
        assert!(matches!(result, Err(WeatherDataError::HttpStatus { .. })));
        assert!(!loader.cache_path(LatLon(1.0, 2.0)).exists());
        Ok(())
    }
}
