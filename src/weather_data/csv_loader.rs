use crate::types::columns::{COL_DATE, COL_LAT, COL_LON};
use crate::types::frames::daily_series::DailySeries;
use crate::types::location::LatLon;
use crate::utils::f64_values;
use crate::weather_data::error::WeatherDataError;
use chrono::NaiveDate;
use log::info;
use polars::prelude::*;
use std::path::Path;

/// Reads a per-location daily CSV as written by the download step.
///
/// The file needs a header with `date`, `lat`, `lon` and the eleven raw
/// variables; extra columns (such as a leading unnamed index) are ignored.
/// `date` may carry a time and offset (`1950-01-01 00:00:00+00:00`), only the
/// calendar day is kept. The location is read from the first row.
pub fn load_daily_csv(path: &Path) -> Result<DailySeries, WeatherDataError> {
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| WeatherDataError::CsvRead(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| WeatherDataError::CsvRead(path.to_path_buf(), e))?;

    if df.height() == 0 {
        return Err(WeatherDataError::EmptyInput);
    }
    for name in [COL_DATE, COL_LAT, COL_LON] {
        if df.column(name).is_err() {
            return Err(WeatherDataError::MissingColumn(name.to_string()));
        }
    }

    if df.column(COL_DATE)?.dtype() == &DataType::String {
        let dates = parse_dates(df.column(COL_DATE)?.str()?)?;
        df.with_column(Column::new(COL_DATE.into(), dates))?;
    }

    let lat = f64_values(&df, COL_LAT)?[0];
    let lon = f64_values(&df, COL_LON)?[0];
    let (Some(lat), Some(lon)) = (lat, lon) else {
        return Err(WeatherDataError::MissingColumn(format!(
            "{COL_LAT}/{COL_LON} (empty in first row)"
        )));
    };

    info!(
        "Loaded {} daily rows for ({lat}, {lon}) from {}",
        df.height(),
        path.display()
    );
    DailySeries::new(df, LatLon(lat, lon))
}

fn parse_dates(values: &StringChunked) -> Result<Vec<NaiveDate>, WeatherDataError> {
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let value = value.unwrap_or_default();
            let day = value.get(..10).unwrap_or(value);
            NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| WeatherDataError::InvalidDate {
                row,
                value: value.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::columns::*;
    use crate::utils::date_values;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(rows: &[&str]) -> Result<NamedTempFile, std::io::Error> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, ",date,lat,lon,{}", RAW_VARIABLES.join(","))?;
        for row in rows {
            writeln!(file, "{row}")?;
        }
        file.flush()?;
        Ok(file)
    }

    const VALUES: &str = "27.1,32.0,22.3,2.1,5.4,20.5,71.0,90.0,50.0,0.0,0.31";

    #[test]
    fn test_load_daily_csv() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            &format!("0,1950-01-01 00:00:00+00:00,13.45,-16.58,{VALUES}"),
            &format!("1,1950-01-02 00:00:00+00:00,13.45,-16.58,{VALUES}"),
        ])?;

        let series = load_daily_csv(file.path())?;
        assert_eq!(series.location, LatLon(13.45, -16.58));

        let df = series.frame.collect()?;
        assert_eq!(df.height(), 2);
        assert_eq!(
            date_values(&df, COL_DATE)?,
            vec![
                NaiveDate::from_ymd_opt(1950, 1, 1),
                NaiveDate::from_ymd_opt(1950, 1, 2)
            ]
        );
        assert_eq!(df.column(COL_PRECIP)?.dtype(), &DataType::Float64);
        Ok(())
    }

    #[test]
    fn test_plain_dates_are_accepted() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[&format!("0,2001-06-01,1.0,2.0,{VALUES}")])?;
        let df = load_daily_csv(file.path())?.frame.collect()?;
        assert_eq!(
            date_values(&df, COL_DATE)?,
            vec![NaiveDate::from_ymd_opt(2001, 6, 1)]
        );
        Ok(())
    }

    #[test]
    fn test_invalid_date_reports_row() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            &format!("0,2001-06-01,1.0,2.0,{VALUES}"),
            &format!("1,June 2nd,1.0,2.0,{VALUES}"),
        ])?;
        let result = load_daily_csv(file.path());
        assert!(matches!(
            result,
            Err(WeatherDataError::InvalidDate { row: 1, .. })
        ));
        Ok(())
    }

    #[test]
    fn test_header_only_file_is_empty_input() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[])?;
        assert!(matches!(
            load_daily_csv(file.path()),
            Err(WeatherDataError::EmptyInput)
        ));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_csv_read_error() {
        let path = Path::new("/definitely/not/here.csv");
        assert!(matches!(
            load_daily_csv(path),
            Err(WeatherDataError::CsvRead(p, _)) if p == path
        ));
    }
}
