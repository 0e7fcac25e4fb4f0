pub mod app_config;
pub mod config;
pub mod error;
pub mod records;
pub mod rows;

pub use app_config::{AppConfig, Environment, MapSettings};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use records::{Coordinate, Record, UNNAMED};
pub use rows::{CellValue, RawRow};
