use serde::Deserialize;

/// One year of total population (`pg.csv`).
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct PopulationYear {
    #[serde(rename = "yearName")]
    pub year_name: i32,
    pub population: f64,
    /// Year-over-year growth, absent for the first observed year.
    #[serde(default, rename = "populationGrowthPercentage")]
    pub growth_percentage: Option<f64>,
}

/// One age-bracket/sex share of the population (`pas.csv`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AgeSexRow {
    #[serde(rename = "ageBracket")]
    pub age_bracket: String,
    pub sex: String,
    pub count: f64,
    pub percentage: f64,
}

/// One categorical or interval bin with its share of the city area.
///
/// Shared by the wealth, built-era, solar, air-quality, temperature, NDVI,
/// elevation, slope, landslide and liquefaction area distributions.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BinRow {
    pub bin: String,
    pub count: f64,
    pub percentage: f64,
}

impl BinRow {
    pub fn zero(bin: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            count: 0.0,
            percentage: 0.0,
        }
    }
}

/// One land-cover class share (`lc.csv`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LandCoverRow {
    #[serde(rename = "lcType")]
    pub lc_type: String,
    #[serde(rename = "pixelCount")]
    pub pixel_count: f64,
    pub percentage: f64,
}

/// One year of urban built-up extent (`uba.csv`): absolute sq km plus the
/// share of the present-day footprint already built.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct UrbanExtentRow {
    #[serde(rename = "yearName")]
    pub year_name: i32,
    pub uba: f64,
    pub percentage: f64,
}

/// Population-to-urban growth ratio series (`pug.csv`). The ratio is null in
/// years where either component series has no observation.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct GrowthRatioRow {
    #[serde(rename = "yearName")]
    pub year_name: i32,
    #[serde(rename = "populationUrbanGrowthRatio")]
    pub ratio: Option<f64>,
    /// Population per built-up sq km in that year.
    #[serde(default)]
    pub density: Option<f64>,
}

/// One month of photovoltaic yield (`pv.csv`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PvMonth {
    #[serde(rename = "monthName")]
    pub month_name: String,
    pub pv: f64,
    pub condition: String,
}

/// One week of 95th-percentile Fire Weather Index (`fwi.csv`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FwiWeek {
    pub week: u32,
    #[serde(rename = "monthName")]
    pub month_name: String,
    pub fwi: f64,
    pub danger: String,
}

/// One year of hazard-exposed built-up area. The measure column is named
/// after its dataset (`fu`, `pu`, `cu`, `comb`), so the field accepts any of
/// the four spellings.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct ExposureRow {
    #[serde(rename = "yearName")]
    pub year_name: i32,
    #[serde(alias = "fu", alias = "pu", alias = "cu", alias = "comb")]
    pub value: f64,
}

/// A recorded flood event affecting the city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloodEvent {
    pub begin_year: i32,
    pub begin_month: u32,
    pub displaced: u64,
    pub severity: &'static str,
}

/// Every dataset the dashboard renders, keyed by its source file stem.
#[derive(Debug, Clone, Default)]
pub struct CityData {
    pub pg: Vec<PopulationYear>,
    pub pas: Vec<AgeSexRow>,
    pub rwi_area: Vec<BinRow>,
    pub uba: Vec<UrbanExtentRow>,
    pub uba_area: Vec<BinRow>,
    pub lc: Vec<LandCoverRow>,
    pub pug: Vec<GrowthRatioRow>,
    pub pv: Vec<PvMonth>,
    pub pv_area: Vec<BinRow>,
    pub aq_area: Vec<BinRow>,
    pub summer_area: Vec<BinRow>,
    pub ndvi_area: Vec<BinRow>,
    pub fu: Vec<ExposureRow>,
    pub pu: Vec<ExposureRow>,
    pub cu: Vec<ExposureRow>,
    pub comb: Vec<ExposureRow>,
    pub e: Vec<BinRow>,
    pub s: Vec<BinRow>,
    pub ls_area: Vec<BinRow>,
    pub l_area: Vec<BinRow>,
    pub fwi: Vec<FwiWeek>,
    pub fe: Vec<FloodEvent>,
}
