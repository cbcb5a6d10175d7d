//! Shared chart builders.
//!
//! Every indicator chart is one of a handful of archetypes: a line with
//! points, a vertical distribution over a completed bin domain, or
//! horizontal per-category occurrence bars. The archetype builders here are
//! parameterized by an explicit spec struct instead of display globals.

use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType,
};
use ratatui::Frame;

use crate::data::records::BinRow;

/// One named line in a line chart.
pub struct LineSeries<'a> {
    pub name: &'a str,
    pub color: Color,
    pub points: &'a [(f64, f64)],
}

/// A line-with-points chart: axis bounds, labels and any number of series.
pub struct LineChartSpec<'a> {
    pub title: String,
    pub x_title: &'a str,
    pub y_title: &'a str,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub series: Vec<LineSeries<'a>>,
    /// Record under the cursor, drawn as a block marker.
    pub selected: Option<(f64, f64)>,
}

pub fn render_line_chart(spec: &LineChartSpec<'_>, f: &mut Frame<'_>, area: Rect) {
    let highlight = spec.selected.map(|point| [point]);

    let mut datasets = Vec::new();
    for series in &spec.series {
        datasets.push(
            Dataset::default()
                .name(series.name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series.color))
                .data(series.points),
        );
        datasets.push(
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(series.color))
                .data(series.points),
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

    let x_labels: Vec<Span<'_>> = spec.x_labels.iter().map(|l| Span::raw(l.clone())).collect();
    let y_labels: Vec<Span<'_>> = spec.y_labels.iter().map(|l| Span::raw(l.clone())).collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(spec.title.clone())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .title(spec.x_title)
                .style(Style::default().fg(Color::Gray))
                .bounds(spec.x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(spec.y_title)
                .style(Style::default().fg(Color::Gray))
                .bounds(spec.y_bounds)
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

/// A completed bin distribution rendered as vertical percentage bars on a
/// fixed 0-100 domain.
pub struct DistributionSpec<'a> {
    pub title: String,
    pub x_title: &'a str,
    pub rows: &'a [BinRow],
    /// One color per row, resolved by the caller's classification table.
    pub colors: Vec<Color>,
    pub selected: Option<usize>,
}

pub fn render_distribution_bars(spec: &DistributionSpec<'_>, f: &mut Frame<'_>, area: Rect) {
    let bars: Vec<Bar<'_>> = spec
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let color = spec.colors.get(index).copied().unwrap_or(Color::Gray);
            let selected = spec.selected == Some(index);

            let label_style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if row.percentage > 0.0 {
                Style::default().fg(Color::White)
            } else {
                // Zero bins stay visible so the full domain always renders.
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
            };

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let value = row.percentage.round().clamp(0.0, 100.0) as u64;

            Bar::default()
                .value(value)
                .text_value(format!("{:.1}%", row.percentage))
                .label(TextLine::from(Span::styled(row.bin.clone(), label_style)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    #[allow(clippy::cast_possible_truncation)]
    let bar_width = {
        let slots = spec.rows.len().max(1) as u16;
        ((area.width.saturating_sub(2)) / slots).saturating_sub(1).clamp(3, 12)
    };

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(spec.title.clone())
                .title_bottom(TextLine::from(spec.x_title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .max(100)
        .bar_gap(1)
        .bar_width(bar_width);

    f.render_widget(chart, area);
}

/// One horizontal occurrence bar per category (e.g. weeks per danger level).
pub struct CategoryBarsSpec<'a> {
    pub title: String,
    /// `(label, count, percentage, color)` per category, display order.
    pub entries: Vec<(String, u64, f64, Color)>,
    pub unit: &'a str,
    pub selected: Option<usize>,
}

pub fn render_category_bars(spec: &CategoryBarsSpec<'_>, f: &mut Frame<'_>, area: Rect) {
    let max_count = spec
        .entries
        .iter()
        .map(|(_, count, _, _)| *count)
        .max()
        .unwrap_or(0)
        .max(1);

    let bars: Vec<Bar<'_>> = spec
        .entries
        .iter()
        .enumerate()
        .map(|(index, (label, count, percentage, color))| {
            let selected = spec.selected == Some(index);
            let label_style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Bar::default()
                .value(*count)
                .text_value(format!("{count} {} ({percentage:.1}%)", spec.unit))
                .label(TextLine::from(Span::styled(label.clone(), label_style)))
                .style(Style::default().fg(*color))
                .value_style(Style::default().fg(Color::Black).bg(*color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(spec.title.clone())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .max(max_count)
        .bar_gap(1)
        .bar_width(1);

    f.render_widget(chart, area);
}

/// Thousands-separated integer display ("1,234,567").
pub fn thousands(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let negative = value < 0.0;
    let mut digits = format!("{:.0}", value.abs()).into_bytes();
    digits.reverse();
    let mut grouped = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && index % 3 == 0 {
            grouped.push(b',');
        }
        grouped.push(*digit);
    }
    grouped.reverse();
    let body = String::from_utf8_lossy(&grouped).to_string();
    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// Compact axis-tick display: "1.2M", "450K", "87".
pub fn compact_number(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        let millions = value / 1_000_000.0;
        if (millions - millions.round()).abs() < 1e-9 {
            format!("{millions:.0}M")
        } else {
            format!("{millions:.1}M")
        }
    } else if magnitude >= 1_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

/// Evenly spaced numeric axis labels across a bound range.
pub fn axis_labels(bounds: [f64; 2], count: usize, fmt: impl Fn(f64) -> String) -> Vec<String> {
    if count < 2 {
        return vec![fmt(bounds[0])];
    }
    #[allow(clippy::cast_precision_loss)]
    (0..count)
        .map(|step| {
            let t = step as f64 / (count - 1) as f64;
            fmt((bounds[1] - bounds[0]).mul_add(t, bounds[0]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(1_234_567.0), "1,234,567");
        assert_eq!(thousands(950.0), "950");
        assert_eq!(thousands(-12_000.0), "-12,000");
    }

    #[test]
    fn compact_number_picks_magnitude() {
        assert_eq!(compact_number(2_000_000.0), "2M");
        assert_eq!(compact_number(1_500_000.0), "1.5M");
        assert_eq!(compact_number(45_000.0), "45K");
        assert_eq!(compact_number(87.0), "87");
    }

    #[test]
    fn axis_labels_span_the_bounds() {
        let labels = axis_labels([0.0, 100.0], 3, |v| format!("{v:.0}"));
        assert_eq!(labels, vec!["0", "50", "100"]);
    }
}
