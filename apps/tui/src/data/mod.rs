// Data loading layer: CSV record types and the parallel loader.

pub mod loader;
pub mod records;

pub use loader::{load_city_data, DataError};
pub use records::CityData;
