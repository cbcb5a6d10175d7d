use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;
use ratatui::Frame;

use crate::app::{App, ChartId};
use crate::data::records::CityData;
use crate::domain::{BuiltEra, UNCLASSIFIED_COLOR};
use crate::stats::DerivedSeries;
use crate::ui::screens::{render_chart_tabs, split_tabs_and_body};
use crate::ui::widgets::charts::{
    axis_labels, compact_number, render_distribution_bars, render_line_chart, DistributionSpec,
    LineChartSpec, LineSeries,
};

pub fn render_built_form(app: &App, f: &mut Frame<'_>, area: Rect) {
    let (Some(data), Some(derived)) = (&app.data, &app.derived) else {
        return;
    };

    let (tabs_area, body) = split_tabs_and_body(area);
    render_chart_tabs(app, f, tabs_area);

    match app.current_chart() {
        Some(ChartId::BuiltEraDistribution) => render_era_distribution(app, derived, f, body),
        Some(ChartId::BuiltUpArea) => render_built_up_area(app, data, f, body),
        Some(ChartId::BuiltUpShare) => render_built_up_share(app, data, f, body),
        Some(ChartId::GrowthDashboard) => render_growth_dashboard(app, data, f, body),
        _ => {}
    }
}

fn render_era_distribution(app: &App, derived: &DerivedSeries, f: &mut Frame<'_>, area: Rect) {
    let colors = derived
        .built_era
        .iter()
        .map(|row| BuiltEra::parse(&row.bin).map_or(UNCLASSIFIED_COLOR, BuiltEra::color))
        .collect();

    let spec = DistributionSpec {
        title: format!(
            "{} - {}",
            ChartId::BuiltEraDistribution.title(),
            app.config.location()
        ),
        x_title: "Construction Era",
        rows: &derived.built_era,
        colors,
        selected: Some(app.selected),
    };

    render_distribution_bars(&spec, f, area);
}

fn render_built_up_area(app: &App, data: &CityData, f: &mut Frame<'_>, area: Rect) {
    let points: Vec<(f64, f64)> = data
        .uba
        .iter()
        .map(|row| (f64::from(row.year_name), row.uba))
        .collect();
    let (x_bounds, max_value) = year_bounds(data, |row| row.uba);
    let y_bounds = [0.0, max_value * 1.1];

    let spec = LineChartSpec {
        title: format!("{} - {}", ChartId::BuiltUpArea.title(), app.config.location()),
        x_title: "Year",
        y_title: "Urban Built-up Area (sq km)",
        x_bounds,
        y_bounds,
        x_labels: axis_labels(x_bounds, 5, |v| format!("{v:.0}")),
        y_labels: axis_labels(y_bounds, 5, |v| format!("{v:.0}")),
        series: vec![LineSeries {
            name: "Built-up area",
            color: Color::White,
            points: &points,
        }],
        selected: points.get(app.selected).copied(),
    };

    render_line_chart(&spec, f, area);
}

fn render_built_up_share(app: &App, data: &CityData, f: &mut Frame<'_>, area: Rect) {
    let points: Vec<(f64, f64)> = data
        .uba
        .iter()
        .map(|row| (f64::from(row.year_name), row.percentage))
        .collect();
    let (x_bounds, _) = year_bounds(data, |row| row.percentage);
    let y_bounds = [0.0, 100.0];

    let spec = LineChartSpec {
        title: format!(
            "{} - {}",
            ChartId::BuiltUpShare.title(),
            app.config.location()
        ),
        x_title: "Year",
        y_title: "Percentage of Present Extent (%)",
        x_bounds,
        y_bounds,
        x_labels: axis_labels(x_bounds, 5, |v| format!("{v:.0}")),
        y_labels: axis_labels(y_bounds, 5, |v| format!("{v:.0}")),
        series: vec![LineSeries {
            name: "Share built",
            color: Color::White,
            points: &points,
        }],
        selected: points.get(app.selected).copied(),
    };

    render_line_chart(&spec, f, area);
}

/// Six mini charts combining the population and built-form series, the way
/// the scan's urban development overview presents them side by side.
fn render_growth_dashboard(app: &App, data: &CityData, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(rows[1]);

    let population: Vec<(f64, f64)> = data
        .pg
        .iter()
        .map(|row| (f64::from(row.year_name), row.population))
        .collect();
    render_mini_line(
        "Population",
        "",
        &population,
        compact_number,
        f,
        top[0],
    );

    let growth: Vec<(f64, f64)> = data
        .pg
        .iter()
        .filter_map(|row| {
            row.growth_percentage
                .map(|growth| (f64::from(row.year_name), growth))
        })
        .collect();
    render_mini_line("Population Growth (%)", "", &growth, |v| format!("{v:.1}"), f, top[1]);

    let built: Vec<(f64, f64)> = data
        .uba
        .iter()
        .map(|row| (f64::from(row.year_name), row.uba))
        .collect();
    render_mini_line("Built-up Area (sq km)", "", &built, |v| format!("{v:.0}"), f, top[2]);

    let share: Vec<(f64, f64)> = data
        .uba
        .iter()
        .map(|row| (f64::from(row.year_name), row.percentage))
        .collect();
    render_mini_line("Built-up Share (%)", "", &share, |v| format!("{v:.0}"), f, bottom[0]);

    let density: Vec<(f64, f64)> = data
        .pug
        .iter()
        .filter_map(|row| row.density.map(|d| (f64::from(row.year_name), d)))
        .collect();
    render_mini_line(
        "Density (pop / built sq km)",
        "",
        &density,
        compact_number,
        f,
        bottom[1],
    );

    let ratio: Vec<(f64, f64)> = data
        .pug
        .iter()
        .filter_map(|row| row.ratio.map(|r| (f64::from(row.year_name), r)))
        .collect();
    render_mini_line(
        "Population / Urban Growth Ratio",
        "ratio 1 = balanced growth",
        &ratio,
        |v| format!("{v:.1}"),
        f,
        bottom[2],
    );
}

fn render_mini_line(
    title: &str,
    x_title: &str,
    points: &[(f64, f64)],
    fmt: impl Fn(f64) -> String,
    f: &mut Frame<'_>,
    area: Rect,
) {
    if points.is_empty() {
        return;
    }

    let min_x = points.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
    let max_x = points
        .iter()
        .map(|(x, _)| *x)
        .fold(f64::NEG_INFINITY, f64::max);
    let max_y = points.iter().map(|(_, y)| *y).fold(0.0, f64::max);
    let min_y = points.iter().map(|(_, y)| *y).fold(0.0, f64::min);

    let x_bounds = [min_x, max_x];
    let y_bounds = [min_y.min(0.0), max_y * 1.1];

    let spec = LineChartSpec {
        title: title.to_string(),
        x_title,
        y_title: "",
        x_bounds,
        y_bounds,
        x_labels: axis_labels(x_bounds, 3, |v| format!("{v:.0}")),
        y_labels: axis_labels(y_bounds, 3, fmt),
        series: vec![LineSeries {
            name: title,
            color: Color::White,
            points,
        }],
        selected: None,
    };

    render_line_chart(&spec, f, area);
}

fn year_bounds(data: &CityData, value: impl Fn(&crate::data::records::UrbanExtentRow) -> f64) -> ([f64; 2], f64) {
    let min_year = data.uba.iter().map(|r| r.year_name).min().unwrap_or(0);
    let max_year = data.uba.iter().map(|r| r.year_name).max().unwrap_or(0);
    let max_value = data.uba.iter().map(value).fold(0.0, f64::max);
    ([f64::from(min_year), f64::from(max_year)], max_value)
}
