use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::{
    Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph,
};
use ratatui::Frame;

use crate::app::{App, ChartId};
use crate::data::records::CityData;
use crate::domain::{
    elevation_color, slope_color, FireDanger, Susceptibility, UNCLASSIFIED_COLOR,
};
use crate::stats::DerivedSeries;
use crate::ui::screens::{render_chart_tabs, split_tabs_and_body};
use crate::ui::widgets::charts::{
    axis_labels, render_category_bars, render_distribution_bars, render_line_chart, thousands,
    CategoryBarsSpec, DistributionSpec, LineChartSpec, LineSeries,
};

pub fn render_hazards(app: &App, f: &mut Frame<'_>, area: Rect) {
    let (Some(data), Some(derived)) = (&app.data, &app.derived) else {
        return;
    };

    let (tabs_area, body) = split_tabs_and_body(area);
    render_chart_tabs(app, f, tabs_area);

    match app.current_chart() {
        Some(ChartId::FireWeather) => render_fire_weather(app, data, f, body),
        Some(ChartId::FireDangerWeeks) => render_danger_weeks(app, derived, f, body),
        Some(ChartId::FloodExposure) => render_flood_exposure(app, data, f, body),
        Some(ChartId::FloodEvents) => render_flood_events(app, data, f, body),
        Some(ChartId::Elevation) => render_elevation(app, derived, f, body),
        Some(ChartId::Slope) => render_slope(app, derived, f, body),
        Some(ChartId::Landslide) => render_landslide(app, derived, f, body),
        Some(ChartId::Liquefaction) => render_liquefaction(app, derived, f, body),
        _ => {}
    }
}

/// Weekly FWI line with the EFFIS danger thresholds as a side legend; each
/// week's point takes the color of its danger class.
fn render_fire_weather(app: &App, data: &CityData, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(30)])
        .split(area);

    let line: Vec<(f64, f64)> = data
        .fwi
        .iter()
        .map(|week| (f64::from(week.week), week.fwi))
        .collect();

    let max_fwi = data.fwi.iter().map(|w| w.fwi).fold(0.0, f64::max);
    #[allow(clippy::cast_precision_loss)]
    let x_bounds = [1.0, data.fwi.len().max(2) as f64];
    let y_bounds = [0.0, max_fwi * 1.1];

    // One scatter dataset per danger class so the points take their band
    // color.
    let mut class_points: Vec<Vec<(f64, f64)>> = vec![Vec::new(); FireDanger::ALL.len()];
    for week in &data.fwi {
        let danger = FireDanger::parse(&week.danger)
            .unwrap_or_else(|| FireDanger::from_score(week.fwi));
        class_points[danger as usize].push((f64::from(week.week), week.fwi));
    }

    let highlight = line.get(app.selected).map(|point| [*point]);

    let mut datasets = vec![Dataset::default()
        .name("95th percentile FWI")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Gray))
        .data(&line)];

    for (index, points) in class_points.iter().enumerate() {
        if points.is_empty() {
            continue;
        }
        let danger = FireDanger::ALL[index];
        datasets.push(
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(danger.color()))
                .data(points),
        );
    }

    if let Some(point) = &highlight {
        datasets.push(
            Dataset::default()
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                .data(point),
        );
    }

    // Month names at the quarter weeks.
    let x_labels: Vec<Span<'_>> = [0, data.fwi.len() / 4, data.fwi.len() / 2,
        3 * data.fwi.len() / 4, data.fwi.len().saturating_sub(1)]
        .iter()
        .filter_map(|&i| data.fwi.get(i).map(|w| Span::raw(w.month_name.clone())))
        .collect();
    let y_labels: Vec<Span<'_>> = axis_labels(y_bounds, 5, |v| format!("{v:.0}"))
        .into_iter()
        .map(Span::raw)
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(
                    "{} - {}",
                    ChartId::FireWeather.title(),
                    app.config.location()
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .title("Week")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("95th Percentile FWI")
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    f.render_widget(chart, chunks[0]);
    render_danger_legend(f, chunks[1]);
}

/// EFFIS band thresholds, worst danger on top.
fn render_danger_legend(f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("EFFIS Danger Bands")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines: Vec<TextLine<'_>> = FireDanger::ALL
        .iter()
        .rev()
        .map(|danger| {
            let (min, max) = danger.band();
            let range = if max.is_finite() {
                format!("{min:>5.1} - {max:<5.1}")
            } else {
                format!("{min:>5.1}+      ")
            };
            TextLine::from(vec![
                Span::styled("■ ", Style::default().fg(danger.color())),
                Span::styled(range, Style::default().fg(Color::Gray)),
                Span::raw(" "),
                Span::styled(danger.label(), Style::default().fg(danger.color())),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

fn render_danger_weeks(app: &App, derived: &DerivedSeries, f: &mut Frame<'_>, area: Rect) {
    let entries = derived
        .fwi_danger_weeks
        .iter()
        .map(|entry| {
            let color =
                FireDanger::parse(&entry.label).map_or(UNCLASSIFIED_COLOR, FireDanger::color);
            (
                FireDanger::parse(&entry.label)
                    .map_or_else(|| entry.label.clone(), |d| d.label().to_string()),
                entry.count as u64,
                entry.percentage,
                color,
            )
        })
        .collect();

    let spec = CategoryBarsSpec {
        title: format!(
            "{} - {}",
            ChartId::FireDangerWeeks.title(),
            app.config.location()
        ),
        entries,
        unit: "weeks",
        selected: Some(app.selected),
    };

    render_category_bars(&spec, f, area);
}

fn render_flood_exposure(app: &App, data: &CityData, f: &mut Frame<'_>, area: Rect) {
    let to_points = |series: &[crate::data::records::ExposureRow]| -> Vec<(f64, f64)> {
        series
            .iter()
            .map(|row| (f64::from(row.year_name), row.value))
            .collect()
    };

    let combined = to_points(&data.comb);
    let fluvial = to_points(&data.fu);
    let pluvial = to_points(&data.pu);
    let coastal = to_points(&data.cu);

    let min_year = data.comb.iter().map(|r| r.year_name).min().unwrap_or(0);
    let max_year = data.comb.iter().map(|r| r.year_name).max().unwrap_or(0);
    let max_value = data.comb.iter().map(|r| r.value).fold(0.0, f64::max);

    let x_bounds = [f64::from(min_year), f64::from(max_year)];
    let y_bounds = [0.0, max_value * 1.2];

    let spec = LineChartSpec {
        title: format!(
            "{} - {}",
            ChartId::FloodExposure.title(),
            app.config.location()
        ),
        x_title: "Year",
        y_title: "Exposed Built-up Area (sq km)",
        x_bounds,
        y_bounds,
        x_labels: axis_labels(x_bounds, 5, |v| format!("{v:.0}")),
        y_labels: axis_labels(y_bounds, 4, |v| format!("{v:.1}")),
        series: vec![
            LineSeries {
                name: "Combined",
                color: Color::White,
                points: &combined,
            },
            LineSeries {
                name: "Fluvial",
                color: Color::Rgb(0x61, 0xac, 0xdc),
                points: &fluvial,
            },
            LineSeries {
                name: "Pluvial",
                color: Color::Cyan,
                points: &pluvial,
            },
            LineSeries {
                name: "Coastal",
                color: Color::Magenta,
                points: &coastal,
            },
        ],
        selected: combined.get(app.selected).copied(),
    };

    render_line_chart(&spec, f, area);
}

/// Recorded flood events as bubbles on a month x year plane, sized and
/// shaded by the displaced population.
fn render_flood_events(app: &App, data: &CityData, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(
            "{} - {}",
            ChartId::FloodEvents.title(),
            app.config.location()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if data.fe.is_empty() {
        let paragraph = Paragraph::new("No recorded flood events")
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let max_displaced = data
        .fe
        .iter()
        .map(|event| event.displaced)
        .max()
        .unwrap_or(1)
        .max(1);

    let events: Vec<(usize, f64, f64, f64)> = data
        .fe
        .iter()
        .enumerate()
        .map(|(index, event)| {
            #[allow(clippy::cast_precision_loss)]
            let size = (event.displaced as f64 / max_displaced as f64).sqrt();
            (
                index,
                f64::from(event.begin_month),
                f64::from(event.begin_year),
                size,
            )
        })
        .collect();

    let selected = app.selected;

    let canvas = Canvas::default()
        .x_bounds([0.5, 12.5])
        .y_bounds([1980.0, 2026.0])
        .marker(Marker::Braille)
        .paint(move |ctx| {
            for (index, month, year, size) in &events {
                // Sky blue to navy with displacement, as on the source chart.
                let color = if *size > 0.66 {
                    Color::Rgb(0x00, 0x00, 0x80)
                } else if *size > 0.33 {
                    Color::Rgb(0x43, 0x67, 0xb5)
                } else {
                    Color::Rgb(0x87, 0xce, 0xeb)
                };

                ctx.draw(&Circle {
                    x: *month,
                    y: *year,
                    radius: size.mul_add(1.2, 0.3),
                    color,
                });

                if *index == selected {
                    ctx.draw(&Circle {
                        x: *month,
                        y: *year,
                        radius: size.mul_add(1.2, 0.8),
                        color: Color::Yellow,
                    });
                }
            }
        });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(data.fe.len().min(4) as u16)])
        .split(inner);

    f.render_widget(canvas, chunks[0]);

    // Caption the events below the plane; the canvas is too coarse for text.
    let captions: Vec<TextLine<'_>> = data
        .fe
        .iter()
        .enumerate()
        .take(4)
        .map(|(index, event)| {
            let style = if index == selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            TextLine::from(Span::styled(
                format!(
                    "{}/{} - {} displaced ({})",
                    event.begin_month,
                    event.begin_year,
                    thousands(event.displaced as f64),
                    event.severity
                ),
                style,
            ))
        })
        .collect();

    f.render_widget(Paragraph::new(captions), chunks[1]);
}

fn render_elevation(app: &App, derived: &DerivedSeries, f: &mut Frame<'_>, area: Rect) {
    let colors = (0..derived.elevation.len()).map(elevation_color).collect();

    let spec = DistributionSpec {
        title: format!(
            "{} - {}",
            ChartId::Elevation.title(),
            app.config.location()
        ),
        x_title: "Elevation (MASL)",
        rows: &derived.elevation,
        colors,
        selected: Some(app.selected),
    };

    render_distribution_bars(&spec, f, area);
}

fn render_slope(app: &App, derived: &DerivedSeries, f: &mut Frame<'_>, area: Rect) {
    let colors = derived
        .slope
        .iter()
        .map(|row| slope_color(&row.bin))
        .collect();

    let spec = DistributionSpec {
        title: format!("{} - {}", ChartId::Slope.title(), app.config.location()),
        x_title: "Slope (degrees)",
        rows: &derived.slope,
        colors,
        selected: Some(app.selected),
    };

    render_distribution_bars(&spec, f, area);
}

fn render_landslide(app: &App, derived: &DerivedSeries, f: &mut Frame<'_>, area: Rect) {
    render_susceptibility(
        ChartId::Landslide,
        app,
        &derived.landslide,
        "Landslide Susceptibility",
        f,
        area,
    );
}

fn render_liquefaction(app: &App, derived: &DerivedSeries, f: &mut Frame<'_>, area: Rect) {
    render_susceptibility(
        ChartId::Liquefaction,
        app,
        &derived.liquefaction,
        "Liquefaction Susceptibility",
        f,
        area,
    );
}

fn render_susceptibility(
    chart: ChartId,
    app: &App,
    rows: &[crate::data::records::BinRow],
    x_title: &str,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let colors = rows
        .iter()
        .map(|row| {
            Susceptibility::parse(&row.bin).map_or(UNCLASSIFIED_COLOR, Susceptibility::color)
        })
        .collect();

    let spec = DistributionSpec {
        title: format!("{} - {}", chart.title(), app.config.location()),
        x_title,
        rows,
        colors,
        selected: Some(app.selected),
    };

    render_distribution_bars(&spec, f, area);
}
