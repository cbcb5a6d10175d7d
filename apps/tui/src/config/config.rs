use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Display configuration resolved once at startup and passed to every chart.
///
/// The scan is parameterized by city; nothing here changes after init, so
/// charts only ever read it.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub city: String,
    pub country: String,
    pub data_dir: PathBuf,
}

impl ScanConfig {
    /// "City, Country" subtitle line; just the city when no country is set.
    pub fn location(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }
}

/// Initializes the application configuration from .env / environment
/// variables. CLI flags override these via `CliArgs::apply_env_overrides`.
pub fn init_app_config() -> ScanConfig {
    // Load environment variables from .env file
    dotenv().ok();

    let city = env::var("CITY_NAME").unwrap_or_else(|_| "City".to_string());
    let country = env::var("COUNTRY_NAME").unwrap_or_default();
    let data_dir = env::var("DATA_DIR")
        .map_or_else(|_| PathBuf::from("./data/processed"), PathBuf::from);

    ScanConfig {
        city,
        country,
        data_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_omits_missing_country() {
        let config = ScanConfig {
            city: "Nouakchott".to_string(),
            country: String::new(),
            data_dir: PathBuf::from("."),
        };
        assert_eq!(config.location(), "Nouakchott");
    }

    #[test]
    fn location_joins_city_and_country() {
        let config = ScanConfig {
            city: "Nouakchott".to_string(),
            country: "Mauritania".to_string(),
            data_dir: PathBuf::from("."),
        };
        assert_eq!(config.location(), "Nouakchott, Mauritania");
    }
}
