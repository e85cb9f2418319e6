use marquee_catalog::ShowingSpec;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

fn default_filter() -> String {
    "marquee=info".to_string()
}

/// Movies loaded into the catalog at startup.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub movies: Vec<MovieConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MovieConfig {
    pub title: String,
    pub genre: String,
    pub showings: Vec<ShowingSpec>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment and local overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `MARQUEE_LOGGING__FILTER=debug`
            .add_source(
                config::Environment::with_prefix("MARQUEE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_from_toml() {
        let config = Config::from_toml_str(
            r#"
            [[catalog.movies]]
            title = "Titanic"
            genre = "Documentary"
            showings = [
                { time = "12:00 PM", total_seats = 15 },
                { time = "03:00 PM", total_seats = 10 },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.filter, default_filter());
        assert_eq!(config.catalog.movies.len(), 1);
        let movie = &config.catalog.movies[0];
        assert_eq!(movie.title, "Titanic");
        assert_eq!(movie.showings[1], ShowingSpec::new("03:00 PM", 10));
    }

    #[test]
    fn test_logging_override() {
        let config = Config::from_toml_str(
            r#"
            [logging]
            filter = "debug"

            [catalog]
            movies = []
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert!(config.catalog.movies.is_empty());
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        assert!(Config::from_toml_str("[logging]\nfilter = \"info\"").is_err());
    }

    #[test]
    fn test_default_file_parses() {
        let config = Config::from_toml_str(include_str!("../../config/default.toml")).unwrap();
        let titles: Vec<&str> = config.catalog.movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Titanic", "Thor"]);
        assert!(config.catalog.movies.iter().all(|m| m.showings.len() == 3));
        // A crate-name prefix directive covers every marquee_* target
        assert_eq!(config.logging.filter, "marquee=info");
        assert_eq!(config.logging.filter, default_filter());
    }
}
