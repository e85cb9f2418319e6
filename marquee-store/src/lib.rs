pub mod app_config;

pub use app_config::{CatalogConfig, Config, LoggingConfig, MovieConfig};
