// Pure classification and aggregation over loaded tables.

pub mod bins;
pub mod demography;
pub mod distribution;
pub mod indicators;

pub use demography::DependencyRatios;
pub use distribution::CategoryCount;
pub use indicators::DerivedSeries;
