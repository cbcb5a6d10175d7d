// Export our modules for use in binaries and tests
pub mod config;
pub mod data;
pub mod domain;
pub mod stats;

pub use data::{load_city_data, CityData, DataError};
pub use stats::{DependencyRatios, DerivedSeries};
