use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::state::FinderState;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use crate::ui::widgets::tables::scroll_offset;

/// Fuzzy chart finder overlay: type to filter, Enter to jump.
pub fn render_finder(finder: &FinderState, f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(50, 60, area);
    f.render_widget(ClearWidget, popup_area);

    let block = Block::default()
        .title(" Find chart ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let mut lines: Vec<TextLine<'_>> = Vec::with_capacity(finder.matches.len() + 2);
    lines.push(TextLine::from(vec![
        Span::styled("> ", Style::default().fg(Color::Yellow)),
        Span::styled(
            finder.query.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("█", Style::default().fg(Color::White)),
    ]));
    lines.push(TextLine::from(""));

    let max_visible = usize::from(inner.height.saturating_sub(2));
    let offset = scroll_offset(finder.matches.len(), max_visible, finder.selected);

    for (index, chart) in finder
        .matches
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible)
    {
        let is_selected = index == finder.selected;
        let style = if is_selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let prefix = if is_selected { ">" } else { " " };
        lines.push(TextLine::from(vec![
            Span::styled(format!("{prefix} "), style),
            Span::styled(chart.title(), style),
            Span::styled(
                format!("  ({})", chart.screen().title()),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }

    if finder.matches.is_empty() {
        lines.push(TextLine::from(Span::styled(
            "No chart matches",
            Style::default().fg(Color::Gray),
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
