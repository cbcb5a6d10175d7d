pub mod built_form;
pub mod climate;
pub mod demographics;
pub mod finder;
pub mod hazards;
pub mod land_cover;
pub mod overview;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::Tabs;
use ratatui::Frame;

use crate::app::{App, ChartId};

/// Tab bar listing the charts available on the active screen.
pub fn render_chart_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = ChartId::on_screen(app.screen)
        .iter()
        .map(|chart| TextLine::from(chart.title()))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.tabs[app.screen.index()])
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

/// Standard screen layout: one line of chart tabs above the chart body.
pub fn split_tabs_and_body(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);
    (chunks[0], chunks[1])
}
