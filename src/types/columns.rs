// Raw daily variables, named as the Open-Meteo climate API names them.
pub const COL_DATE: &str = "date";
pub const COL_LAT: &str = "lat";
pub const COL_LON: &str = "lon";
pub const COL_TEMP_MEAN: &str = "temperature_2m_mean";
pub const COL_TEMP_MAX: &str = "temperature_2m_max";
pub const COL_TEMP_MIN: &str = "temperature_2m_min";
pub const COL_WIND_MEAN: &str = "wind_speed_10m_mean";
pub const COL_WIND_MAX: &str = "wind_speed_10m_max";
pub const COL_SHORTWAVE: &str = "shortwave_radiation_sum";
pub const COL_RH_MEAN: &str = "relative_humidity_2m_mean";
pub const COL_RH_MAX: &str = "relative_humidity_2m_max";
pub const COL_RH_MIN: &str = "relative_humidity_2m_min";
pub const COL_PRECIP: &str = "precipitation_sum";
pub const COL_SOIL_MOISTURE: &str = "soil_moisture_0_to_10cm_mean";

/// The eleven raw variables every daily series must carry, in request order.
pub const RAW_VARIABLES: [&str; 11] = [
    COL_TEMP_MEAN,
    COL_TEMP_MAX,
    COL_TEMP_MIN,
    COL_WIND_MEAN,
    COL_WIND_MAX,
    COL_SHORTWAVE,
    COL_RH_MEAN,
    COL_RH_MAX,
    COL_RH_MIN,
    COL_PRECIP,
    COL_SOIL_MOISTURE,
];

// Calendar keys added by the daily stage
pub const COL_YEAR: &str = "year";
pub const COL_MONTH: &str = "month";

// Daily indicators
pub const COL_GDD: &str = "gdd";
pub const COL_EXTREME_PRECIP: &str = "is_extreme_precipitation";
pub const COL_DRY_DAYS: &str = "consecutive_dry_days";
pub const COL_HEAT_STRESS: &str = "is_heat_stress";
pub const COL_WIND_ABOVE: &str = "is_wind_above_threshold";
pub const COL_HUMIDITY_ABOVE: &str = "is_humidity_above_threshold";
pub const COL_SOIL_DEFICIT: &str = "soil_moisture_deficit";
pub const COL_SOLAR: &str = "solar_radiation_mj";

// Monthly additions
pub const COL_CV_TEMP: &str = "cv_temperature";
pub const COL_CV_PRECIP: &str = "cv_precipitation";
pub const COL_WIND_DAYS: &str = "is_wind_days_above_threshold";
pub const COL_HEAT_DAYS: &str = "is_heat_days_above_threshold";
pub const COL_HUMIDITY_DAYS: &str = "is_humidity_days_above_threshold";

// Final score table
pub const COL_FINAL_LAT: &str = "LAT";
pub const COL_FINAL_LON: &str = "LON";
