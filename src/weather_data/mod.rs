pub mod csv_loader;
pub mod data_loader;
pub mod error;
pub mod open_meteo;
