//! Population pyramid: mirrored horizontal bars per age bracket, female on
//! the left and male on the right, oldest bracket on top.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::data::records::CityData;
use crate::domain::sex_color;
use crate::stats::indicators::{bracket_share, sorted_age_brackets};

pub struct PyramidSpec<'a> {
    pub title: String,
    pub data: &'a CityData,
    /// Cursor over brackets, youngest = 0 (matching the sorted bracket list).
    pub selected: Option<usize>,
}

pub fn render_pyramid(spec: &PyramidSpec<'_>, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(spec.title.clone())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let brackets = sorted_age_brackets(spec.data);
    if brackets.is_empty() {
        let paragraph = Paragraph::new("No population data")
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let max_share = spec
        .data
        .pas
        .iter()
        .map(|row| row.percentage)
        .fold(0.0_f64, f64::max)
        .max(f64::EPSILON);

    // label + two mirrored bar halves + percentage readouts
    const LABEL_WIDTH: usize = 7;
    const VALUE_WIDTH: usize = 7;
    let half_width = (usize::from(inner.width).saturating_sub(LABEL_WIDTH + 2 * VALUE_WIDTH + 2)) / 2;
    if half_width < 4 {
        return;
    }

    let mut lines: Vec<TextLine<'_>> = Vec::with_capacity(brackets.len() + 1);
    lines.push(TextLine::from(vec![
        Span::styled(
            format!("{:>width$}  ", "Female", width = VALUE_WIDTH + half_width / 2),
            Style::default().fg(sex_color("female")).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(LABEL_WIDTH)),
        Span::styled(
            format!("{:<width$}", "Male", width = half_width / 2),
            Style::default().fg(sex_color("male")).add_modifier(Modifier::BOLD),
        ),
    ]));

    // Oldest bracket on top.
    for (index, bracket) in brackets.iter().enumerate().rev() {
        let female = bracket_share(spec.data, bracket, "female");
        let male = bracket_share(spec.data, bracket, "male");

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let female_cells = ((female / max_share) * half_width as f64).round() as usize;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let male_cells = ((male / max_share) * half_width as f64).round() as usize;

        let selected = spec.selected == Some(index);
        let label_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(TextLine::from(vec![
            Span::styled(format!("{female:>5.1}% "), Style::default().fg(Color::Gray)),
            Span::raw(" ".repeat(half_width - female_cells.min(half_width))),
            Span::styled(
                "█".repeat(female_cells.min(half_width)),
                Style::default().fg(sex_color("female")),
            ),
            Span::styled(format!("{bracket:^width$}", width = LABEL_WIDTH), label_style),
            Span::styled(
                "█".repeat(male_cells.min(half_width)),
                Style::default().fg(sex_color("male")),
            ),
            Span::raw(" ".repeat(half_width - male_cells.min(half_width))),
            Span::styled(format!(" {male:>5.1}%"), Style::default().fg(Color::Gray)),
        ]));
    }

    let paragraph = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, inner);
}
