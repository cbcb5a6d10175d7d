// UI rendering: chrome, per-screen chart dispatch and overlays.

pub mod inspector;
pub mod screens;
pub mod widgets;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, WhichUse};

use crate::app::{App, AppScreen};
use crate::ui::inspector::inspector_content;
use crate::ui::widgets::popup::render_inspector;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title + screen tabs
            Constraint::Min(10),   // Chart area
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)));

    render_header(app, f, main_layout[0]);

    if app.show_help {
        render_help(f, main_layout[1]);
    } else if app.is_loading() {
        render_loading(app, f, main_layout[1]);
    } else {
        match app.screen {
            AppScreen::Overview => screens::overview::render_overview(app, f, main_layout[1]),
            AppScreen::Demographics => {
                screens::demographics::render_demographics(app, f, main_layout[1]);
            }
            AppScreen::BuiltForm => screens::built_form::render_built_form(app, f, main_layout[1]),
            AppScreen::LandCover => screens::land_cover::render_land_cover(app, f, main_layout[1]),
            AppScreen::Climate => screens::climate::render_climate(app, f, main_layout[1]),
            AppScreen::Hazards => screens::hazards::render_hazards(app, f, main_layout[1]),
        }

        if app.show_inspector {
            if let Some((title, lines)) = inspector_content(app) {
                render_inspector(&title, lines, f, main_layout[1]);
            }
        }
    }

    render_status(app, f, main_layout[2]);
    render_shortcuts(f, main_layout[3]);

    if let Some(finder) = &app.finder {
        screens::finder::render_finder(finder, f, f.area());
    }
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== City Scan ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(title_block, area);

    let inner = area.inner(Margin::new(1, 1));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(10)])
        .split(inner);

    let location = Paragraph::new(TextLine::from(vec![Span::styled(
        app.config.location(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Left);
    f.render_widget(location, chunks[0]);

    let titles = AppScreen::ALL
        .iter()
        .enumerate()
        .map(|(index, screen)| TextLine::from(format!("{} {}", index + 1, screen.title())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.screen.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, chunks[1]);
}

fn render_loading(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Loading ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(inner);

    let throbber = Throbber::default()
        .label(format!(
            "Loading city datasets from {}...",
            app.config.data_dir.display()
        ))
        .style(Style::default().fg(Color::Cyan))
        .throbber_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .throbber_set(throbber_widgets_tui::CLOCK)
        .use_type(WhichUse::Spin);

    // The state advances once per tick in App::update; rendering works on a
    // scratch copy so the UI can stay borrowed immutably.
    let mut state = app.throbber.clone();
    f.render_stateful_widget(throbber, chunks[1], &mut state);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        Text::from("")
    } else {
        let style = if app.status_message.starts_with("Error") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        Text::from(Span::styled(&app.status_message, style))
    };

    let status_paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default().fg(Color::Gray);

    let shortcuts = TextLine::from(vec![
        Span::styled("1-6", key_style),
        Span::styled(": Screens | ", hint_style),
        Span::styled("Tab/←→", key_style),
        Span::styled(": Charts | ", hint_style),
        Span::styled("↑↓", key_style),
        Span::styled(": Select | ", hint_style),
        Span::styled("Enter", key_style),
        Span::styled(": Inspect | ", hint_style),
        Span::styled("/", key_style),
        Span::styled(": Find chart | ", hint_style),
        Span::styled("F1", key_style),
        Span::styled(": Help | ", hint_style),
        Span::styled("q", key_style),
        Span::styled(": Quit", hint_style),
    ]);

    let shortcuts_paragraph = Paragraph::new(shortcuts).alignment(Alignment::Center);
    f.render_widget(shortcuts_paragraph, area);
}

pub fn render_help(f: &mut Frame<'_>, area: Rect) {
    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_text = vec![
        TextLine::from(vec![Span::styled(
            "City Scan Indicator Dashboard",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        TextLine::from(""),
        TextLine::from(
            "Charts of one city's demographic, environmental and hazard indicators, computed from the scan's processed tables.",
        ),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        TextLine::from("  1-6       - Jump to a screen (Overview, Demographics, Built Form, Land Cover, Climate, Hazards)"),
        TextLine::from("  PgUp/PgDn - Previous / next screen"),
        TextLine::from("  Tab, ←/→  - Cycle charts on the current screen"),
        TextLine::from("  ↑/↓       - Move the record cursor inside a chart"),
        TextLine::from("  Enter     - Inspect the selected record (values at full precision)"),
        TextLine::from("  /         - Fuzzy-find any chart by name"),
        TextLine::from("  F1 or ?   - Toggle this help screen"),
        TextLine::from("  q         - Quit"),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Screens:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        TextLine::from("  Demographics - population growth, pyramid, age groups, dependency ratio, wealth index"),
        TextLine::from("  Built Form   - built-up area by era, extent and share over time, growth dashboard"),
        TextLine::from("  Land Cover   - land-cover treemap, NDVI vegetation distribution"),
        TextLine::from("  Climate      - solar yield, summer surface temperature, air quality"),
        TextLine::from("  Hazards      - fire weather, floods, terrain, landslide and liquefaction"),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Press Esc to close this help screen",
            Style::default().fg(Color::Yellow),
        )]),
    ];

    let help_paragraph = Paragraph::new(Text::from(help_text))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, area);
}
