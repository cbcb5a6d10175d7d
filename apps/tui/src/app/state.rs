use std::time::Instant;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use throbber_widgets_tui::ThrobberState;

use crate::config::ScanConfig;
use crate::data::CityData;
use crate::stats::DerivedSeries;

/// Top-level dashboard screens, one per indicator family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Overview,
    Demographics,
    BuiltForm,
    LandCover,
    Climate,
    Hazards,
}

impl AppScreen {
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Demographics,
        Self::BuiltForm,
        Self::LandCover,
        Self::Climate,
        Self::Hazards,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Demographics => "Demographics",
            Self::BuiltForm => "Built Form",
            Self::LandCover => "Land Cover",
            Self::Climate => "Climate",
            Self::Hazards => "Hazards",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Overview),
            1 => Some(Self::Demographics),
            2 => Some(Self::BuiltForm),
            3 => Some(Self::LandCover),
            4 => Some(Self::Climate),
            5 => Some(Self::Hazards),
            _ => None,
        }
    }
}

/// Every chart the dashboard can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartId {
    PopulationGrowth,
    PopulationPyramid,
    AgeGroups,
    DependencyGrid,
    Wealth,
    BuiltEraDistribution,
    BuiltUpArea,
    BuiltUpShare,
    GrowthDashboard,
    LandCoverTreemap,
    Vegetation,
    SolarYieldDistribution,
    SolarMonthly,
    SolarConditionMonths,
    SummerTemperature,
    AirQuality,
    FireWeather,
    FireDangerWeeks,
    FloodExposure,
    FloodEvents,
    Elevation,
    Slope,
    Landslide,
    Liquefaction,
}

impl ChartId {
    pub const ALL: [Self; 24] = [
        Self::PopulationGrowth,
        Self::PopulationPyramid,
        Self::AgeGroups,
        Self::DependencyGrid,
        Self::Wealth,
        Self::BuiltEraDistribution,
        Self::BuiltUpArea,
        Self::BuiltUpShare,
        Self::GrowthDashboard,
        Self::LandCoverTreemap,
        Self::Vegetation,
        Self::SolarYieldDistribution,
        Self::SolarMonthly,
        Self::SolarConditionMonths,
        Self::SummerTemperature,
        Self::AirQuality,
        Self::FireWeather,
        Self::FireDangerWeeks,
        Self::FloodExposure,
        Self::FloodEvents,
        Self::Elevation,
        Self::Slope,
        Self::Landslide,
        Self::Liquefaction,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            Self::PopulationGrowth => "Population Growth",
            Self::PopulationPyramid => "Population Pyramid",
            Self::AgeGroups => "Age Group Distribution",
            Self::DependencyGrid => "Age Dependency Ratio",
            Self::Wealth => "Relative Wealth Index Distribution",
            Self::BuiltEraDistribution => "Urban Built-up Area by Era",
            Self::BuiltUpArea => "Urban Built-up Area",
            Self::BuiltUpShare => "Urban Built-up Area Percentage",
            Self::GrowthDashboard => "Urban Development Dashboard",
            Self::LandCoverTreemap => "Land Cover",
            Self::Vegetation => "Vegetated Area Distribution",
            Self::SolarYieldDistribution => "Photovoltaic Yield Distribution",
            Self::SolarMonthly => "Monthly Photovoltaic Yield",
            Self::SolarConditionMonths => "Months per Solar Condition",
            Self::SummerTemperature => "Summer Surface Temperature Distribution",
            Self::AirQuality => "Air Quality Distribution",
            Self::FireWeather => "Weekly Fire Weather Index",
            Self::FireDangerWeeks => "Weeks per Fire Danger Level",
            Self::FloodExposure => "Flood-Exposed Built-up Area",
            Self::FloodEvents => "Recorded Flood Events",
            Self::Elevation => "Elevation Distribution",
            Self::Slope => "Slope Distribution",
            Self::Landslide => "Landslide Susceptibility",
            Self::Liquefaction => "Liquefaction Susceptibility",
        }
    }

    pub const fn screen(self) -> AppScreen {
        match self {
            Self::PopulationGrowth
            | Self::PopulationPyramid
            | Self::AgeGroups
            | Self::DependencyGrid
            | Self::Wealth => AppScreen::Demographics,
            Self::BuiltEraDistribution
            | Self::BuiltUpArea
            | Self::BuiltUpShare
            | Self::GrowthDashboard => AppScreen::BuiltForm,
            Self::LandCoverTreemap | Self::Vegetation => AppScreen::LandCover,
            Self::SolarYieldDistribution
            | Self::SolarMonthly
            | Self::SolarConditionMonths
            | Self::SummerTemperature
            | Self::AirQuality => AppScreen::Climate,
            Self::FireWeather
            | Self::FireDangerWeeks
            | Self::FloodExposure
            | Self::FloodEvents
            | Self::Elevation
            | Self::Slope
            | Self::Landslide
            | Self::Liquefaction => AppScreen::Hazards,
        }
    }

    /// Charts shown as tabs on a screen, in tab order.
    pub fn on_screen(screen: AppScreen) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|chart| chart.screen() == screen)
            .collect()
    }

    /// Tab position of this chart within its screen.
    pub fn tab_position(self) -> usize {
        Self::on_screen(self.screen())
            .iter()
            .position(|chart| *chart == self)
            .unwrap_or(0)
    }
}

/// State of the fuzzy chart-finder overlay.
#[derive(Debug, Clone)]
pub struct FinderState {
    pub query: String,
    pub selected: usize,
    pub matches: Vec<ChartId>,
}

impl FinderState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            selected: 0,
            matches: ChartId::ALL.to_vec(),
        }
    }

    /// Re-rank charts against the current query.
    pub fn refresh(&mut self) {
        if self.query.is_empty() {
            self.matches = ChartId::ALL.to_vec();
        } else {
            let matcher = SkimMatcherV2::default();
            let mut scored: Vec<(i64, ChartId)> = ChartId::ALL
                .into_iter()
                .filter_map(|chart| {
                    matcher
                        .fuzzy_match(chart.title(), &self.query)
                        .map(|score| (score, chart))
                })
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            self.matches = scored.into_iter().map(|(_, chart)| chart).collect();
        }
        self.selected = self.selected.min(self.matches.len().saturating_sub(1));
    }
}

impl Default for FinderState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub config: ScanConfig,
    pub screen: AppScreen,
    /// Selected chart tab, remembered per screen.
    pub tabs: [usize; AppScreen::ALL.len()],
    /// Record cursor within the active chart.
    pub selected: usize,
    pub show_inspector: bool,
    pub show_help: bool,
    pub status_message: String,
    pub data: Option<CityData>,
    pub derived: Option<DerivedSeries>,
    pub finder: Option<FinderState>,
    pub animation_counter: f64,
    pub last_frame: Instant,
    pub throbber: ThrobberState,
}

impl App {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            running: true,
            config,
            screen: AppScreen::Overview,
            tabs: [0; AppScreen::ALL.len()],
            selected: 0,
            show_inspector: false,
            show_help: false,
            status_message: String::new(),
            data: None,
            derived: None,
            finder: None,
            animation_counter: 0.0,
            last_frame: Instant::now(),
            throbber: ThrobberState::default(),
        }
    }

    pub const fn is_loading(&self) -> bool {
        self.data.is_none()
    }

    /// Install a completed load and derive every chart series from it.
    pub fn finish_loading(&mut self, data: CityData) {
        self.derived = Some(DerivedSeries::from_data(&data));
        self.data = Some(data);
        self.status_message = format!("Loaded datasets for {}", self.config.city);
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        if self.is_loading() {
            self.throbber.calc_next();
        }
    }

    /// The chart behind the active tab, if the screen shows charts.
    pub fn current_chart(&self) -> Option<ChartId> {
        let charts = ChartId::on_screen(self.screen);
        charts.get(self.tabs[self.screen.index()]).copied()
    }

    /// Number of selectable records in the active chart, for cursor bounds.
    pub fn record_count(&self) -> usize {
        let (Some(data), Some(derived)) = (&self.data, &self.derived) else {
            return 0;
        };
        match self.current_chart() {
            Some(ChartId::PopulationGrowth) => data.pg.len(),
            Some(ChartId::PopulationPyramid) => {
                crate::stats::indicators::sorted_age_brackets(data).len()
            }
            Some(ChartId::AgeGroups | ChartId::DependencyGrid) => {
                crate::domain::AgeGroup::ALL.len()
            }
            Some(ChartId::Wealth) => derived.wealth.len(),
            Some(ChartId::BuiltEraDistribution) => derived.built_era.len(),
            Some(ChartId::BuiltUpArea | ChartId::BuiltUpShare) => data.uba.len(),
            Some(ChartId::LandCoverTreemap) => {
                data.lc.iter().filter(|row| row.percentage > 0.0).count()
            }
            Some(ChartId::Vegetation) => derived.vegetation.len(),
            Some(ChartId::SolarYieldDistribution) => derived.pv_yield.len(),
            Some(ChartId::SolarMonthly) => data.pv.len(),
            Some(ChartId::SolarConditionMonths) => derived.pv_condition_months.len(),
            Some(ChartId::SummerTemperature) => derived.summer.len(),
            Some(ChartId::AirQuality) => derived.air_quality.len(),
            Some(ChartId::FireWeather) => data.fwi.len(),
            Some(ChartId::FireDangerWeeks) => derived.fwi_danger_weeks.len(),
            Some(ChartId::FloodExposure) => data.comb.len(),
            Some(ChartId::FloodEvents) => data.fe.len(),
            Some(ChartId::Elevation) => derived.elevation.len(),
            Some(ChartId::Slope) => derived.slope.len(),
            Some(ChartId::Landslide) => derived.landslide.len(),
            Some(ChartId::Liquefaction) => derived.liquefaction.len(),
            Some(ChartId::GrowthDashboard) | None => 0,
        }
    }

    pub fn select_screen(&mut self, screen: AppScreen) {
        if self.screen != screen {
            self.screen = screen;
            self.selected = 0;
            self.show_inspector = false;
        }
    }

    pub fn next_tab(&mut self) {
        let count = ChartId::on_screen(self.screen).len();
        if count > 0 {
            let slot = &mut self.tabs[self.screen.index()];
            *slot = (*slot + 1) % count;
            self.selected = 0;
            self.show_inspector = false;
        }
    }

    pub fn prev_tab(&mut self) {
        let count = ChartId::on_screen(self.screen).len();
        if count > 0 {
            let slot = &mut self.tabs[self.screen.index()];
            *slot = (*slot + count - 1) % count;
            self.selected = 0;
            self.show_inspector = false;
        }
    }

    pub fn select_next(&mut self) {
        let count = self.record_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self) {
        let count = self.record_count();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Jump straight to a chart picked in the finder.
    pub fn jump_to_chart(&mut self, chart: ChartId) {
        self.screen = chart.screen();
        self.tabs[self.screen.index()] = chart.tab_position();
        self.selected = 0;
        self.show_inspector = false;
        self.finder = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_app() -> App {
        App::new(ScanConfig {
            city: "Testville".to_string(),
            country: String::new(),
            data_dir: PathBuf::from("."),
        })
    }

    #[test]
    fn every_chart_has_a_home_screen_tab() {
        for chart in ChartId::ALL {
            let charts = ChartId::on_screen(chart.screen());
            assert_eq!(charts[chart.tab_position()], chart);
        }
    }

    #[test]
    fn jump_to_chart_sets_screen_and_tab() {
        let mut app = test_app();
        app.jump_to_chart(ChartId::Slope);
        assert_eq!(app.screen, AppScreen::Hazards);
        assert_eq!(app.current_chart(), Some(ChartId::Slope));
    }

    #[test]
    fn tab_cycling_wraps() {
        let mut app = test_app();
        app.select_screen(AppScreen::LandCover);
        assert_eq!(app.current_chart(), Some(ChartId::LandCoverTreemap));
        app.next_tab();
        assert_eq!(app.current_chart(), Some(ChartId::Vegetation));
        app.next_tab();
        assert_eq!(app.current_chart(), Some(ChartId::LandCoverTreemap));
        app.prev_tab();
        assert_eq!(app.current_chart(), Some(ChartId::Vegetation));
    }

    #[test]
    fn finder_ranks_title_matches() {
        let mut finder = FinderState::new();
        finder.query = "fire".to_string();
        finder.refresh();
        // Fuzzy matching may admit loose subsequence hits, but the compact
        // matches must outrank them.
        assert!(!finder.matches.is_empty());
        assert!(finder.matches[0].title().to_lowercase().contains("fire"));
    }

    #[test]
    fn finder_with_empty_query_lists_everything() {
        let mut finder = FinderState::new();
        finder.query.clear();
        finder.refresh();
        assert_eq!(finder.matches.len(), ChartId::ALL.len());
    }

    #[test]
    fn selection_is_inert_without_data() {
        let mut app = test_app();
        app.select_screen(AppScreen::Demographics);
        app.select_next();
        assert_eq!(app.selected, 0);
    }
}
