use ratatui::style::Color;

/// Fallback color for any label a classification table does not know.
pub const UNCLASSIFIED_COLOR: Color = Color::Gray;

/// Relative Wealth Index category (five classes, least to most wealthy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WealthClass {
    LeastWealthy,
    LessWealthy,
    AverageWealth,
    MoreWealthy,
    MostWealthy,
}

impl WealthClass {
    pub const ALL: [Self; 5] = [
        Self::LeastWealthy,
        Self::LessWealthy,
        Self::AverageWealth,
        Self::MoreWealthy,
        Self::MostWealthy,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::LeastWealthy => "Least wealthy",
            Self::LessWealthy => "Less wealthy",
            Self::AverageWealth => "Average wealth",
            Self::MoreWealthy => "More wealthy",
            Self::MostWealthy => "Most wealthy",
        }
    }

    /// Ordinal rank used to sort wealth bins left to right.
    pub const fn rank(self) -> u8 {
        match self {
            Self::LeastWealthy => 1,
            Self::LessWealthy => 2,
            Self::AverageWealth => 3,
            Self::MoreWealthy => 4,
            Self::MostWealthy => 5,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Least wealthy" => Some(Self::LeastWealthy),
            "Less wealthy" => Some(Self::LessWealthy),
            "Average wealth" => Some(Self::AverageWealth),
            "More wealthy" => Some(Self::MoreWealthy),
            "Most wealthy" => Some(Self::MostWealthy),
            _ => None,
        }
    }

    // Same palette as the wealth map layer.
    pub const fn color(self) -> Color {
        match self {
            Self::LeastWealthy => Color::Rgb(0x44, 0xb5, 0x9c),
            Self::LessWealthy => Color::Rgb(0x94, 0xd1, 0xc0),
            Self::AverageWealth => Color::Rgb(0xfa, 0xf9, 0xc8),
            Self::MoreWealthy => Color::Rgb(0xfa, 0xab, 0x90),
            Self::MostWealthy => Color::Rgb(0xeb, 0x76, 0x5a),
        }
    }
}

/// Construction era of the urban built-up area (WSF epochs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltEra {
    Before1986,
    Era1986To1995,
    Era1996To2005,
    Era2006To2015,
}

impl BuiltEra {
    pub const ALL: [Self; 4] = [
        Self::Before1986,
        Self::Era1986To1995,
        Self::Era1996To2005,
        Self::Era2006To2015,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Before1986 => "Before 1986",
            Self::Era1986To1995 => "1986-1995",
            Self::Era1996To2005 => "1996-2005",
            Self::Era2006To2015 => "2006-2015",
        }
    }

    /// Display name for the era ("Before 1986" collapses to its anchor year).
    pub const fn year_name(self) -> &'static str {
        match self {
            Self::Before1986 => "1985",
            Self::Era1986To1995 => "1986-1995",
            Self::Era1996To2005 => "1996-2005",
            Self::Era2006To2015 => "2006-2015",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Before 1986" => Some(Self::Before1986),
            "1986-1995" => Some(Self::Era1986To1995),
            "1996-2005" => Some(Self::Era1996To2005),
            "2006-2015" => Some(Self::Era2006To2015),
            _ => None,
        }
    }

    // Same palette as the urban extent and change map, 1985-2015.
    pub const fn color(self) -> Color {
        match self {
            Self::Before1986 => Color::Rgb(0xf6, 0xf5, 0xd6),
            Self::Era1986To1995 => Color::Rgb(0xe5, 0xc7, 0x82),
            Self::Era1996To2005 => Color::Rgb(0xcc, 0x7b, 0x6f),
            Self::Era2006To2015 => Color::Rgb(0x62, 0x53, 0x4e),
        }
    }
}

/// Photovoltaic yield condition, classified from daily kWh/kWp bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PvCondition {
    LessThanFavorable,
    Favorable,
    Excellent,
}

impl PvCondition {
    pub const ALL: [Self; 3] = [Self::LessThanFavorable, Self::Favorable, Self::Excellent];

    pub const fn label(self) -> &'static str {
        match self {
            Self::LessThanFavorable => "Less than Favorable",
            Self::Favorable => "Favorable",
            Self::Excellent => "Excellent",
        }
    }

    /// Yield bin label as it appears in `pv_area.csv`.
    pub const fn bin(self) -> &'static str {
        match self {
            Self::LessThanFavorable => "<3.5",
            Self::Favorable => "3.5-4.5",
            Self::Excellent => ">4.5",
        }
    }

    /// Accepts either the bin label or the condition name.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "<3.5" | "Less than Favorable" => Some(Self::LessThanFavorable),
            "3.5-4.5" | "Favorable" => Some(Self::Favorable),
            ">4.5" | "Excellent" => Some(Self::Excellent),
            _ => None,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::LessThanFavorable => Color::Rgb(0xff, 0x98, 0x00),
            Self::Favorable => Color::Rgb(0xff, 0xc1, 0x07),
            Self::Excellent => Color::Rgb(0x4c, 0xaf, 0x50),
        }
    }

    /// Darker variant used by the monthly condition-count chart.
    pub const fn emphasis_color(self) -> Color {
        match self {
            Self::LessThanFavorable => Color::Rgb(0x8b, 0x00, 0x00),
            Self::Favorable => Color::Rgb(0xff, 0xc1, 0x07),
            Self::Excellent => Color::Rgb(0x4c, 0xaf, 0x50),
        }
    }
}

/// Vegetation cover type derived from NDVI value bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VegetationType {
    Water,
    BuiltUp,
    Barren,
    ShrubAndGrassland,
    Sparse,
    Dense,
}

impl VegetationType {
    pub const ALL: [Self; 6] = [
        Self::Water,
        Self::BuiltUp,
        Self::Barren,
        Self::ShrubAndGrassland,
        Self::Sparse,
        Self::Dense,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::BuiltUp => "Built-up",
            Self::Barren => "Barren",
            Self::ShrubAndGrassland => "Shrub and Grassland",
            Self::Sparse => "Sparse",
            Self::Dense => "Dense",
        }
    }

    /// NDVI bin label as it appears in `ndvi_area.csv`.
    pub const fn bin(self) -> &'static str {
        match self {
            Self::Water => "-1-0.015",
            Self::BuiltUp => "0.015-0.14",
            Self::Barren => "0.14-0.18",
            Self::ShrubAndGrassland => "0.18-0.27",
            Self::Sparse => "0.27-0.36",
            Self::Dense => "0.36-1",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "-1-0.015" | "Water" => Some(Self::Water),
            "0.015-0.14" | "Built-up" => Some(Self::BuiltUp),
            "0.14-0.18" | "Barren" => Some(Self::Barren),
            "0.18-0.27" | "Shrub and Grassland" => Some(Self::ShrubAndGrassland),
            "0.27-0.36" | "Sparse" => Some(Self::Sparse),
            "0.36-1" | "Dense" => Some(Self::Dense),
            _ => None,
        }
    }

    // Sparse and Dense intentionally share a hue, as on the NDVI map.
    pub const fn color(self) -> Color {
        match self {
            Self::Water => Color::Rgb(0xb2, 0xb2, 0xd5),
            Self::BuiltUp => Color::Rgb(0xef, 0xf4, 0xd8),
            Self::Barren => Color::Rgb(0xcf, 0xe4, 0xc7),
            Self::ShrubAndGrassland => Color::Rgb(0xa5, 0xcd, 0x9f),
            Self::Sparse | Self::Dense => Color::Rgb(0x82, 0xb6, 0x85),
        }
    }
}

/// Five-step susceptibility scale shared by the landslide and liquefaction
/// hazard layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Susceptibility {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Susceptibility {
    pub const ALL: [Self; 5] = [
        Self::VeryLow,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::VeryHigh,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very high",
        }
    }

    /// Numeric class label used by the susceptibility rasters.
    pub const fn class(self) -> &'static str {
        match self {
            Self::VeryLow => "1",
            Self::Low => "2",
            Self::Medium => "3",
            Self::High => "4",
            Self::VeryHigh => "5",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Very low" | "1" => Some(Self::VeryLow),
            "Low" | "2" => Some(Self::Low),
            "Medium" | "3" => Some(Self::Medium),
            "High" | "4" => Some(Self::High),
            "Very high" | "5" => Some(Self::VeryHigh),
            _ => None,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::VeryLow => Color::Rgb(0xf6, 0xef, 0xe5),
            Self::Low => Color::Rgb(0xf1, 0xcd, 0xa8),
            Self::Medium => Color::Rgb(0xe9, 0xac, 0x81),
            Self::High => Color::Rgb(0xdc, 0x8b, 0x6d),
            Self::VeryHigh => Color::Rgb(0xb2, 0x73, 0x65),
        }
    }
}

/// EFFIS Fire Weather Index danger classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireDanger {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl FireDanger {
    pub const ALL: [Self; 6] = [
        Self::VeryLow,
        Self::Low,
        Self::Moderate,
        Self::High,
        Self::VeryHigh,
        Self::Extreme,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low Risk",
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
            Self::VeryHigh => "Very High Risk",
            Self::Extreme => "Extreme Risk",
        }
    }

    /// Danger label as it appears in the `fwi.csv` danger column.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very low",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very high",
            Self::Extreme => "Extreme",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Very low" | "Very Low Risk" => Some(Self::VeryLow),
            "Low" | "Low Risk" => Some(Self::Low),
            "Moderate" | "Moderate Risk" => Some(Self::Moderate),
            "High" | "High Risk" => Some(Self::High),
            "Very high" | "Very High Risk" => Some(Self::VeryHigh),
            "Extreme" | "Extreme Risk" => Some(Self::Extreme),
            _ => None,
        }
    }

    /// EFFIS threshold band `[min, max)` for this danger class.
    pub const fn band(self) -> (f64, f64) {
        match self {
            Self::VeryLow => (0.0, 5.2),
            Self::Low => (5.2, 11.2),
            Self::Moderate => (11.2, 21.3),
            Self::High => (21.3, 38.0),
            Self::VeryHigh => (38.0, 50.0),
            Self::Extreme => (50.0, f64::INFINITY),
        }
    }

    /// Classify a 95th-percentile FWI score into its danger class.
    pub fn from_score(fwi: f64) -> Self {
        match fwi {
            f if f < 5.2 => Self::VeryLow,
            f if f < 11.2 => Self::Low,
            f if f < 21.3 => Self::Moderate,
            f if f < 38.0 => Self::High,
            f if f < 50.0 => Self::VeryHigh,
            _ => Self::Extreme,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::VeryLow => Color::Rgb(0x4c, 0xaf, 0x50),
            Self::Low => Color::Rgb(0x8b, 0xc3, 0x4a),
            Self::Moderate => Color::Rgb(0xff, 0xc1, 0x07),
            Self::High => Color::Rgb(0xff, 0x98, 0x00),
            Self::VeryHigh => Color::Rgb(0xf4, 0x43, 0x36),
            Self::Extreme => Color::Rgb(0x8b, 0x00, 0x00),
        }
    }
}

/// ESA WorldCover land-cover classes present in the treemap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandCoverClass {
    Cropland,
    BuiltUp,
    Grassland,
    TreeCover,
    PermanentWaterBodies,
    Shrubland,
    BareSparseVegetation,
    HerbaceousWetland,
    SnowAndIce,
    Mangroves,
    MossAndLichens,
}

impl LandCoverClass {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Cropland" => Some(Self::Cropland),
            "Built up" => Some(Self::BuiltUp),
            "Grassland" => Some(Self::Grassland),
            "Tree cover" => Some(Self::TreeCover),
            "Permanent water bodies" => Some(Self::PermanentWaterBodies),
            "Shrubland" => Some(Self::Shrubland),
            "Bare sparse vegetation" => Some(Self::BareSparseVegetation),
            "Herbaceous wetland" => Some(Self::HerbaceousWetland),
            "Snow and ice" => Some(Self::SnowAndIce),
            "Mangroves" => Some(Self::Mangroves),
            "Moss and lichens" => Some(Self::MossAndLichens),
            _ => None,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Cropland => Color::Rgb(0xea, 0xa8, 0x6f),
            Self::BuiltUp => Color::Rgb(0xd3, 0x60, 0x5f),
            Self::Grassland => Color::Rgb(0x9b, 0xbb, 0x7f),
            Self::TreeCover => Color::Rgb(0x62, 0x97, 0x77),
            Self::PermanentWaterBodies => Color::Rgb(0x61, 0xac, 0xdc),
            Self::Shrubland => Color::Rgb(0xe2, 0xc9, 0x85),
            Self::BareSparseVegetation => Color::Rgb(0xb4, 0xad, 0xa4),
            Self::HerbaceousWetland => Color::Rgb(0x97, 0x9e, 0xc9),
            Self::SnowAndIce => Color::Rgb(0xe2, 0xe3, 0xe3),
            Self::Mangroves => Color::Rgb(0x48, 0xd3, 0x94),
            Self::MossAndLichens => Color::Rgb(0xf6, 0xeb, 0xa0),
        }
    }

    /// Color for an arbitrary land-cover name, falling back to gray.
    pub fn color_for(name: &str) -> Color {
        Self::parse(name).map_or(UNCLASSIFIED_COLOR, Self::color)
    }
}

/// Demographic age group used by the dependency-ratio calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    Youth,
    WorkingAge,
    Elderly,
}

impl AgeGroup {
    pub const ALL: [Self; 3] = [Self::Youth, Self::WorkingAge, Self::Elderly];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Youth => "Youth (under 15)",
            Self::WorkingAge => "Working age (15-64)",
            Self::Elderly => "Elderly (65+)",
        }
    }

    /// Five-year brackets belonging to this group.
    pub const fn brackets(self) -> &'static [&'static str] {
        match self {
            Self::Youth => &["0-4", "5-9", "10-14"],
            Self::WorkingAge => &[
                "15-19", "20-24", "25-29", "30-34", "35-39", "40-44", "45-49", "50-54", "55-59",
                "60-64",
            ],
            Self::Elderly => &["65-69", "70-74", "75-79", "80+"],
        }
    }

    pub fn from_bracket(bracket: &str) -> Option<Self> {
        let bracket = bracket.trim();
        Self::ALL
            .into_iter()
            .find(|group| group.brackets().contains(&bracket))
    }

    // Color-blind inclusive palette (Wong).
    pub const fn color(self) -> Color {
        match self {
            Self::Youth => Color::Rgb(0xf0, 0xe4, 0x42),
            Self::WorkingAge => Color::Rgb(0x00, 0x9e, 0x73),
            Self::Elderly => Color::Rgb(0xd5, 0x5e, 0x00),
        }
    }
}

/// Pyramid bar color per sex.
pub fn sex_color(sex: &str) -> Color {
    match sex.trim().to_lowercase().as_str() {
        "female" => Color::Rgb(0xf0, 0x5f, 0x5c),
        "male" => Color::Rgb(0x00, 0xb4, 0xb7),
        _ => UNCLASSIFIED_COLOR,
    }
}

/// Color for an air-quality PM2.5 concentration bin.
pub fn air_quality_color(bin: &str) -> Color {
    match bin.trim() {
        "0-5" => Color::Rgb(0xff, 0xf7, 0xde),
        "5-10" => Color::Rgb(0xf8, 0xdb, 0xc4),
        "10-15" => Color::Rgb(0xee, 0xc0, 0xae),
        "15-20" => Color::Rgb(0xe0, 0xa7, 0x9d),
        "20-30" => Color::Rgb(0xd5, 0x94, 0x9f),
        "30-40" => Color::Rgb(0xcf, 0x94, 0xaa),
        "40-50" | "50-100" => Color::Rgb(0xc3, 0x94, 0xb5),
        "100+" => Color::Rgb(0xa0, 0x7c, 0xa0),
        _ => UNCLASSIFIED_COLOR,
    }
}

/// Canonical PM2.5 concentration bins (ug/m3).
pub const AIR_QUALITY_BINS: [&str; 9] = [
    "0-5", "5-10", "10-15", "15-20", "20-30", "30-40", "40-50", "50-100", "100+",
];

/// Color for a slope bin (degrees).
pub fn slope_color(bin: &str) -> Color {
    match bin.trim() {
        "0-2" => Color::Rgb(0xf9, 0xf9, 0xdb),
        "2-5" => Color::Rgb(0xeb, 0xd5, 0xb4),
        "5-10" => Color::Rgb(0xda, 0xb3, 0x8f),
        "10-20" => Color::Rgb(0xc8, 0x8f, 0x6e),
        "20-90" => Color::Rgb(0xb2, 0x6b, 0x4a),
        _ => UNCLASSIFIED_COLOR,
    }
}

/// Canonical slope bins (degrees).
pub const SLOPE_BINS: [&str; 5] = ["0-2", "2-5", "5-10", "10-20", "20-90"];

/// Elevation bins are city-specific, so color follows position in the sorted
/// bin order rather than the label itself (lowest to highest MASL).
pub fn elevation_color(index: usize) -> Color {
    const PALETTE: [Color; 5] = [
        Color::Rgb(0xf9, 0xd7, 0xd4),
        Color::Rgb(0xe3, 0xb9, 0xc5),
        Color::Rgb(0xcd, 0x9d, 0xb8),
        Color::Rgb(0xb6, 0x82, 0xac),
        Color::Rgb(0x9f, 0x65, 0xa0),
    ];
    PALETTE.get(index).copied().unwrap_or(UNCLASSIFIED_COLOR)
}

/// Blue-to-red gradient for summer surface temperature bins, interpolated
/// over the observed temperature range.
pub fn summer_temperature_color(midpoint: f64, min: f64, max: f64) -> Color {
    const STOPS: [(u8, u8, u8); 4] = [
        (0x8d, 0xb4, 0xd4),
        (0xd3, 0xda, 0xba),
        (0xf2, 0xcb, 0x94),
        (0xe3, 0x7b, 0x74),
    ];

    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        let (r, g, b) = STOPS[0];
        return Color::Rgb(r, g, b);
    }

    let t = ((midpoint - min) / span).clamp(0.0, 1.0) * (STOPS.len() - 1) as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let segment = (t.floor() as usize).min(STOPS.len() - 2);
    let frac = t - segment as f64;

    let (r0, g0, b0) = STOPS[segment];
    let (r1, g1, b1) = STOPS[segment + 1];
    let lerp = |a: u8, b: u8| -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = f64::from(a).mul_add(1.0 - frac, f64::from(b) * frac).round() as u8;
        value
    };

    Color::Rgb(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wealth_rank_orders_categories() {
        let ranks: Vec<u8> = WealthClass::ALL.into_iter().map(WealthClass::rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn unknown_labels_fall_back_without_panicking() {
        assert!(WealthClass::parse("Wealthiest").is_none());
        assert!(VegetationType::parse("0.5-0.6").is_none());
        assert!(Susceptibility::parse("Severe").is_none());
        assert_eq!(LandCoverClass::color_for("Lava fields"), UNCLASSIFIED_COLOR);
        assert_eq!(air_quality_color("999-1000"), UNCLASSIFIED_COLOR);
    }

    #[test]
    fn pv_condition_accepts_bin_and_name() {
        assert_eq!(PvCondition::parse("<3.5"), Some(PvCondition::LessThanFavorable));
        assert_eq!(PvCondition::parse("Excellent"), Some(PvCondition::Excellent));
        assert_eq!(PvCondition::parse(">4.5"), Some(PvCondition::Excellent));
    }

    #[test]
    fn fire_danger_thresholds_match_effis_bands() {
        assert_eq!(FireDanger::from_score(0.0), FireDanger::VeryLow);
        assert_eq!(FireDanger::from_score(5.2), FireDanger::Low);
        assert_eq!(FireDanger::from_score(21.2), FireDanger::Moderate);
        assert_eq!(FireDanger::from_score(21.3), FireDanger::High);
        assert_eq!(FireDanger::from_score(49.9), FireDanger::VeryHigh);
        assert_eq!(FireDanger::from_score(120.0), FireDanger::Extreme);
    }

    #[test]
    fn fire_danger_bands_tile_the_scale() {
        for pair in FireDanger::ALL.windows(2) {
            assert!((pair[0].band().1 - pair[1].band().0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn age_groups_cover_all_brackets() {
        assert_eq!(AgeGroup::from_bracket("0-4"), Some(AgeGroup::Youth));
        assert_eq!(AgeGroup::from_bracket("20-24"), Some(AgeGroup::WorkingAge));
        assert_eq!(AgeGroup::from_bracket("80+"), Some(AgeGroup::Elderly));
        assert_eq!(AgeGroup::from_bracket("105+"), None);
    }

    #[test]
    fn susceptibility_parses_both_label_styles() {
        assert_eq!(Susceptibility::parse("Very high"), Some(Susceptibility::VeryHigh));
        assert_eq!(Susceptibility::parse("5"), Some(Susceptibility::VeryHigh));
    }

    #[test]
    fn summer_gradient_ends_at_the_stops() {
        assert_eq!(
            summer_temperature_color(20.0, 20.0, 55.0),
            Color::Rgb(0x8d, 0xb4, 0xd4)
        );
        assert_eq!(
            summer_temperature_color(55.0, 20.0, 55.0),
            Color::Rgb(0xe3, 0x7b, 0x74)
        );
    }
}
