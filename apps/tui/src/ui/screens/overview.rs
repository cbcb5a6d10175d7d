use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::domain::FireDanger;
use crate::ui::widgets::charts::{
    axis_labels, compact_number, render_line_chart, thousands, LineChartSpec, LineSeries,
};

/// Headline indicators plus a small population sparkline: the screen the
/// dashboard opens on.
pub fn render_overview(app: &App, f: &mut Frame<'_>, area: Rect) {
    let (Some(data), Some(derived)) = (&app.data, &app.derived) else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let block = Block::default()
        .title(format!(" {} at a glance ", app.config.city))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let mut lines: Vec<TextLine<'_>> = Vec::new();

    if let Some(latest) = data.pg.iter().max_by_key(|row| row.year_name) {
        lines.push(TextLine::from(vec![
            Span::styled("Population: ", label_style),
            Span::styled(
                format!("{} ({})", thousands(latest.population), latest.year_name),
                value_style,
            ),
        ]));
    }

    lines.push(TextLine::from(vec![
        Span::styled("Total dependency ratio: ", label_style),
        Span::styled(
            format!("{:.0} per 100 workers", derived.ratios.total_dependency_ratio),
            value_style,
        ),
    ]));

    if let Some(latest) = data.uba.iter().max_by_key(|row| row.year_name) {
        lines.push(TextLine::from(vec![
            Span::styled("Built-up area: ", label_style),
            Span::styled(
                format!("{:.1} sq km ({})", latest.uba, latest.year_name),
                value_style,
            ),
        ]));
    }

    if let Some(dominant) = data
        .lc
        .iter()
        .max_by(|a, b| a.percentage.total_cmp(&b.percentage))
    {
        lines.push(TextLine::from(vec![
            Span::styled("Dominant land cover: ", label_style),
            Span::styled(
                format!("{} ({:.1}%)", dominant.lc_type, dominant.percentage),
                value_style,
            ),
        ]));
    }

    if let Some(peak) = data
        .fwi
        .iter()
        .max_by(|a, b| a.fwi.total_cmp(&b.fwi))
    {
        let danger = FireDanger::from_score(peak.fwi);
        lines.push(TextLine::from(vec![
            Span::styled("Peak fire weather: ", label_style),
            Span::styled(
                format!("FWI {:.1} in {} ", peak.fwi, peak.month_name),
                value_style,
            ),
            Span::styled(danger.label(), Style::default().fg(danger.color())),
        ]));
    }

    if let Some(event) = data.fe.first() {
        lines.push(TextLine::from(vec![
            Span::styled("Last major flood: ", label_style),
            Span::styled(
                format!(
                    "{}/{}, {} displaced",
                    event.begin_month,
                    event.begin_year,
                    thousands(event.displaced as f64)
                ),
                value_style,
            ),
        ]));
    }

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "Screens 2-6 hold the full chart set; press / to jump to any chart.",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, chunks[0]);

    render_population_sparkline(app, f, chunks[1]);
}

fn render_population_sparkline(app: &App, f: &mut Frame<'_>, area: Rect) {
    let Some(data) = &app.data else {
        return;
    };

    let points: Vec<(f64, f64)> = data
        .pg
        .iter()
        .map(|row| (f64::from(row.year_name), row.population))
        .collect();
    if points.is_empty() {
        return;
    }

    let min_year = data.pg.iter().map(|r| r.year_name).min().unwrap_or(0);
    let max_year = data.pg.iter().map(|r| r.year_name).max().unwrap_or(0);
    let max_population = data.pg.iter().map(|r| r.population).fold(0.0, f64::max);

    let x_bounds = [f64::from(min_year), f64::from(max_year)];
    let y_bounds = [0.0, max_population * 1.1];

    let spec = LineChartSpec {
        title: format!("Population, {min_year}-{max_year}"),
        x_title: "Year",
        y_title: "",
        x_bounds,
        y_bounds,
        x_labels: axis_labels(x_bounds, 3, |v| format!("{v:.0}")),
        y_labels: axis_labels(y_bounds, 3, compact_number),
        series: vec![LineSeries {
            name: "Population",
            color: Color::White,
            points: &points,
        }],
        selected: None,
    };

    render_line_chart(&spec, f, area);
}
