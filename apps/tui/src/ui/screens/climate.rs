use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Frame;

use crate::app::{App, ChartId};
use crate::data::records::CityData;
use crate::domain::{air_quality_color, summer_temperature_color, PvCondition, UNCLASSIFIED_COLOR};
use crate::stats::bins::midpoint;
use crate::stats::DerivedSeries;
use crate::ui::screens::{render_chart_tabs, split_tabs_and_body};
use crate::ui::widgets::charts::{
    axis_labels, render_category_bars, render_distribution_bars, render_line_chart,
    CategoryBarsSpec, DistributionSpec, LineChartSpec, LineSeries,
};

pub fn render_climate(app: &App, f: &mut Frame<'_>, area: Rect) {
    let (Some(data), Some(derived)) = (&app.data, &app.derived) else {
        return;
    };

    let (tabs_area, body) = split_tabs_and_body(area);
    render_chart_tabs(app, f, tabs_area);

    match app.current_chart() {
        Some(ChartId::SolarYieldDistribution) => render_yield_distribution(app, derived, f, body),
        Some(ChartId::SolarMonthly) => render_monthly_yield(app, data, f, body),
        Some(ChartId::SolarConditionMonths) => render_condition_months(app, derived, f, body),
        Some(ChartId::SummerTemperature) => render_summer(app, derived, f, body),
        Some(ChartId::AirQuality) => render_air_quality(app, derived, f, body),
        _ => {}
    }
}

fn render_yield_distribution(app: &App, derived: &DerivedSeries, f: &mut Frame<'_>, area: Rect) {
    let colors = derived
        .pv_yield
        .iter()
        .map(|row| PvCondition::parse(&row.bin).map_or(UNCLASSIFIED_COLOR, PvCondition::color))
        .collect();

    let spec = DistributionSpec {
        title: format!(
            "{} - {}",
            ChartId::SolarYieldDistribution.title(),
            app.config.location()
        ),
        x_title: "Daily Yield (kWh/kWp)",
        rows: &derived.pv_yield,
        colors,
        selected: Some(app.selected),
    };

    render_distribution_bars(&spec, f, area);
}

fn render_monthly_yield(app: &App, data: &CityData, f: &mut Frame<'_>, area: Rect) {
    let chunks = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Min(30),
            ratatui::layout::Constraint::Length(30),
        ])
        .split(area);

    let points: Vec<(f64, f64)> = data
        .pv
        .iter()
        .enumerate()
        .map(|(index, month)| (index as f64 + 1.0, month.pv))
        .collect();

    let max_pv = data.pv.iter().map(|m| m.pv).fold(0.0, f64::max);
    #[allow(clippy::cast_precision_loss)]
    let x_bounds = [1.0, data.pv.len().max(2) as f64];
    let y_bounds = [0.0, max_pv * 1.1];

    // Month names straight off the records, quarterly.
    let x_labels: Vec<String> = [0, 3, 6, 9, data.pv.len().saturating_sub(1)]
        .iter()
        .filter_map(|&i| data.pv.get(i).map(|m| m.month_name.clone()))
        .collect();

    let spec = LineChartSpec {
        title: format!(
            "{} - {}",
            ChartId::SolarMonthly.title(),
            app.config.location()
        ),
        x_title: "Month",
        y_title: "PV Output (kWh/kWp)",
        x_bounds,
        y_bounds,
        x_labels,
        y_labels: axis_labels(y_bounds, 4, |v| format!("{v:.1}")),
        series: vec![LineSeries {
            name: "Daily yield",
            color: Color::Rgb(0xff, 0xc1, 0x07),
            points: &points,
        }],
        selected: points.get(app.selected).copied(),
    };

    render_line_chart(&spec, f, chunks[0]);
    render_condition_legend(f, chunks[1]);
}

/// Yield thresholds behind the condition classification, best first.
fn render_condition_legend(f: &mut Frame<'_>, area: Rect) {
    use ratatui::style::{Modifier, Style};
    use ratatui::text::{Line as TextLine, Span};
    use ratatui::widgets::{Block, Borders, Paragraph};

    let block = Block::default()
        .title("Condition Bands")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines: Vec<TextLine<'_>> = PvCondition::ALL
        .iter()
        .rev()
        .map(|condition| {
            TextLine::from(vec![
                Span::styled("■ ", Style::default().fg(condition.color())),
                Span::styled(
                    format!("{:<7}", condition.bin()),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                Span::styled(condition.label(), Style::default().fg(condition.color())),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_condition_months(app: &App, derived: &DerivedSeries, f: &mut Frame<'_>, area: Rect) {
    let entries = derived
        .pv_condition_months
        .iter()
        .map(|entry| {
            let color = PvCondition::parse(&entry.label)
                .map_or(UNCLASSIFIED_COLOR, PvCondition::emphasis_color);
            (
                entry.label.clone(),
                entry.count as u64,
                entry.percentage,
                color,
            )
        })
        .collect();

    let spec = CategoryBarsSpec {
        title: format!(
            "{} - {}",
            ChartId::SolarConditionMonths.title(),
            app.config.location()
        ),
        entries,
        unit: "months",
        selected: Some(app.selected),
    };

    render_category_bars(&spec, f, area);
}

fn render_summer(app: &App, derived: &DerivedSeries, f: &mut Frame<'_>, area: Rect) {
    // Gradient anchored to the observed temperature range.
    let min = derived
        .summer
        .first()
        .map_or(0.0, |row| crate::stats::bins::lower_bound(&row.bin));
    let max = derived
        .summer
        .last()
        .map_or(0.0, |row| midpoint(&row.bin).max(min));

    let colors = derived
        .summer
        .iter()
        .map(|row| summer_temperature_color(midpoint(&row.bin), min, max))
        .collect();

    let spec = DistributionSpec {
        title: format!(
            "{} - {}",
            ChartId::SummerTemperature.title(),
            app.config.location()
        ),
        x_title: "Surface Temperature (C)",
        rows: &derived.summer,
        colors,
        selected: Some(app.selected),
    };

    render_distribution_bars(&spec, f, area);
}

fn render_air_quality(app: &App, derived: &DerivedSeries, f: &mut Frame<'_>, area: Rect) {
    let colors = derived
        .air_quality
        .iter()
        .map(|row| air_quality_color(&row.bin))
        .collect();

    let spec = DistributionSpec {
        title: format!(
            "{} - {}",
            ChartId::AirQuality.title(),
            app.config.location()
        ),
        x_title: "PM2.5 Concentration (ug/m3)",
        rows: &derived.air_quality,
        colors,
        selected: Some(app.selected),
    };

    render_distribution_bars(&spec, f, area);
}
