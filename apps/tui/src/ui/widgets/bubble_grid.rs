//! Dependency-ratio unit grid: 100 bubbles, one per working-age resident's
//! "load", filled youth first, then elderly, remainder baseline.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::domain::AgeGroup;
use crate::stats::DependencyRatios;

pub struct BubbleGridSpec {
    pub title: String,
    pub ratios: DependencyRatios,
    /// Cursor over age groups (legend order).
    pub selected: Option<usize>,
}

/// Group assignment for each of the 100 grid slots, in draw order.
fn grid_assignment(ratios: &DependencyRatios) -> [Option<AgeGroup>; 100] {
    let mut slots = [None; 100];
    let mut youth = 0.0;
    let mut elderly = 0.0;

    for slot in &mut slots {
        if youth < ratios.youth_dependency_ratio {
            *slot = Some(AgeGroup::Youth);
            youth += 1.0;
        } else if elderly < ratios.elderly_dependency_ratio {
            *slot = Some(AgeGroup::Elderly);
            elderly += 1.0;
        }
    }

    slots
}

pub fn render_bubble_grid(spec: &BubbleGridSpec, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(spec.title.clone())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let slots = grid_assignment(&spec.ratios);

    let mut lines: Vec<TextLine<'_>> = Vec::with_capacity(16);
    lines.push(TextLine::from(Span::styled(
        format!(
            "Every bubble is one dependent per 100 working-age residents (total {:.0})",
            spec.ratios.total_dependency_ratio
        ),
        Style::default().fg(Color::Gray),
    )));
    lines.push(TextLine::from(""));

    for row in 0..10 {
        let mut spans = Vec::with_capacity(10);
        for col in 0..10 {
            let group = slots[row * 10 + col];
            let (symbol, mut style) = match group {
                Some(group) => ("● ", Style::default().fg(group.color())),
                None => ("○ ", Style::default().fg(Color::DarkGray)),
            };
            if let (Some(group), Some(selected)) = (group, spec.selected) {
                if AgeGroup::ALL.get(selected) == Some(&group) {
                    style = style.add_modifier(Modifier::BOLD);
                }
            }
            spans.push(Span::styled(symbol, style));
        }
        lines.push(TextLine::from(spans));
    }

    lines.push(TextLine::from(""));
    let legend_entries = [
        (
            AgeGroup::Youth,
            format!(
                "Youth: {:.0} per 100 workers",
                spec.ratios.youth_dependency_ratio
            ),
        ),
        (
            AgeGroup::Elderly,
            format!(
                "Elderly: {:.0} per 100 workers",
                spec.ratios.elderly_dependency_ratio
            ),
        ),
        (
            AgeGroup::WorkingAge,
            format!(
                "Working-age population: {}",
                super::charts::thousands(spec.ratios.working_age_total)
            ),
        ),
    ];

    for (group, text) in legend_entries {
        let highlighted = spec
            .selected
            .and_then(|index| AgeGroup::ALL.get(index))
            .is_some_and(|selected| *selected == group);
        let style = if highlighted {
            Style::default().fg(group.color()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(group.color())
        };
        lines.push(TextLine::from(vec![
            Span::styled("■ ", style),
            Span::styled(text, style),
        ]));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratios(youth: f64, elderly: f64) -> DependencyRatios {
        DependencyRatios {
            youth_total: 0.0,
            working_age_total: 100.0,
            elderly_total: 0.0,
            youth_dependency_ratio: youth,
            elderly_dependency_ratio: elderly,
            total_dependency_ratio: youth + elderly,
        }
    }

    #[test]
    fn fill_order_is_youth_then_elderly_then_baseline() {
        let slots = grid_assignment(&ratios(3.0, 2.0));
        assert_eq!(slots[0], Some(AgeGroup::Youth));
        assert_eq!(slots[2], Some(AgeGroup::Youth));
        assert_eq!(slots[3], Some(AgeGroup::Elderly));
        assert_eq!(slots[4], Some(AgeGroup::Elderly));
        assert_eq!(slots[5], None);
    }

    #[test]
    fn counts_match_the_ratios() {
        let slots = grid_assignment(&ratios(25.0, 10.0));
        let youth = slots.iter().filter(|s| **s == Some(AgeGroup::Youth)).count();
        let elderly = slots
            .iter()
            .filter(|s| **s == Some(AgeGroup::Elderly))
            .count();
        assert_eq!(youth, 25);
        assert_eq!(elderly, 10);
    }

    #[test]
    fn ratios_above_one_hundred_saturate_the_grid() {
        let slots = grid_assignment(&ratios(120.0, 30.0));
        assert!(slots.iter().all(|s| *s == Some(AgeGroup::Youth)));
    }

    #[test]
    fn non_finite_ratios_leave_the_grid_full() {
        // A missing working-age population propagates NaN; comparisons with
        // NaN are false, so every slot stays baseline rather than panicking.
        let slots = grid_assignment(&ratios(f64::NAN, f64::NAN));
        assert!(slots.iter().all(Option::is_none));
    }
}
