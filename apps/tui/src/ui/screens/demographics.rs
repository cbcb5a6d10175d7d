use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::{App, ChartId};
use crate::data::records::{BinRow, CityData};
use crate::domain::{AgeGroup, UNCLASSIFIED_COLOR, WealthClass};
use crate::stats::demography::group_shares;
use crate::stats::DerivedSeries;
use crate::ui::screens::{render_chart_tabs, split_tabs_and_body};
use crate::ui::widgets::bubble_grid::{render_bubble_grid, BubbleGridSpec};
use crate::ui::widgets::charts::{
    axis_labels, compact_number, render_distribution_bars, render_line_chart, DistributionSpec,
    LineChartSpec, LineSeries,
};
use crate::ui::widgets::pyramid::{render_pyramid, PyramidSpec};

pub fn render_demographics(app: &App, f: &mut Frame<'_>, area: Rect) {
    let (Some(data), Some(derived)) = (&app.data, &app.derived) else {
        return;
    };

    let (tabs_area, body) = split_tabs_and_body(area);
    render_chart_tabs(app, f, tabs_area);

    match app.current_chart() {
        Some(ChartId::PopulationGrowth) => render_population_growth(app, data, f, body),
        Some(ChartId::PopulationPyramid) => {
            let spec = PyramidSpec {
                title: pyramid_title(app, data),
                data,
                selected: Some(app.selected),
            };
            render_pyramid(&spec, f, body);
        }
        Some(ChartId::AgeGroups) => render_age_groups(app, data, f, body),
        Some(ChartId::DependencyGrid) => {
            let spec = BubbleGridSpec {
                title: format!("{} - {}", ChartId::DependencyGrid.title(), app.config.location()),
                ratios: derived.ratios,
                selected: Some(app.selected),
            };
            render_bubble_grid(&spec, f, body);
        }
        Some(ChartId::Wealth) => render_wealth(app, derived, f, body),
        _ => {}
    }
}

fn render_population_growth(app: &App, data: &CityData, f: &mut Frame<'_>, area: Rect) {
    let points: Vec<(f64, f64)> = data
        .pg
        .iter()
        .map(|row| (f64::from(row.year_name), row.population))
        .collect();

    let min_year = data.pg.iter().map(|r| r.year_name).min().unwrap_or(0);
    let max_year = data.pg.iter().map(|r| r.year_name).max().unwrap_or(0);
    let max_population = data.pg.iter().map(|r| r.population).fold(0.0, f64::max);

    let x_bounds = [f64::from(min_year), f64::from(max_year)];
    let y_bounds = [0.0, max_population * 1.1];

    let spec = LineChartSpec {
        title: format!(
            "Population Growth, {min_year}-{max_year} - {}",
            app.config.location()
        ),
        x_title: "Year",
        y_title: "Population",
        x_bounds,
        y_bounds,
        x_labels: axis_labels(x_bounds, 5, |v| format!("{v:.0}")),
        y_labels: axis_labels(y_bounds, 5, compact_number),
        series: vec![LineSeries {
            name: "Population",
            color: ratatui::style::Color::White,
            points: &points,
        }],
        selected: points.get(app.selected).copied(),
    };

    render_line_chart(&spec, f, area);
}

fn render_age_groups(app: &App, data: &CityData, f: &mut Frame<'_>, area: Rect) {
    let shares = group_shares(&data.pas);
    let rows: Vec<BinRow> = AgeGroup::ALL
        .into_iter()
        .map(|group| BinRow {
            bin: group.label().to_string(),
            count: 0.0,
            percentage: shares[group as usize],
        })
        .collect();

    let spec = DistributionSpec {
        title: format!("{} - {}", ChartId::AgeGroups.title(), app.config.location()),
        x_title: "Age Group",
        rows: &rows,
        colors: AgeGroup::ALL.iter().map(|group| group.color()).collect(),
        selected: Some(app.selected),
    };

    render_distribution_bars(&spec, f, area);
}

fn render_wealth(app: &App, derived: &DerivedSeries, f: &mut Frame<'_>, area: Rect) {
    let colors = derived
        .wealth
        .iter()
        .map(|row| WealthClass::parse(&row.bin).map_or(UNCLASSIFIED_COLOR, WealthClass::color))
        .collect();

    let spec = DistributionSpec {
        title: format!("{} - {}", ChartId::Wealth.title(), app.config.location()),
        x_title: "Relative Wealth Index",
        rows: &derived.wealth,
        colors,
        selected: Some(app.selected),
    };

    render_distribution_bars(&spec, f, area);
}

fn pyramid_title(app: &App, data: &CityData) -> String {
    let total: f64 = data.pas.iter().map(|row| row.count).sum();
    format!(
        "{} - {} (total {})",
        ChartId::PopulationPyramid.title(),
        app.config.location(),
        crate::ui::widgets::charts::thousands(total)
    )
}
