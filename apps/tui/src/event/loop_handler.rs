use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use tokio::task::JoinHandle;

use crate::app::{handle_input, App};
use crate::data::loader::load_city_data;
use crate::data::{CityData, DataError};
use crate::ui;

/// Run the main application event loop.
///
/// The CSV load fans out on a background task while the loop renders a
/// loading screen; a failed load is fatal, since no chart can render
/// without its dataset.
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let mut load_task: Option<JoinHandle<Result<CityData, DataError>>> =
        Some(tokio::spawn(load_city_data(app.config.data_dir.clone())));

    loop {
        // Update animations
        app.update();

        if load_task
            .as_ref()
            .is_some_and(tokio::task::JoinHandle::is_finished)
        {
            if let Some(task) = load_task.take() {
                match task.await {
                    Ok(Ok(data)) => app.finish_loading(data),
                    Ok(Err(e)) => {
                        return Err(color_eyre::eyre::eyre!(
                            "failed to load city datasets: {e}"
                        ))
                    }
                    Err(e) => {
                        return Err(color_eyre::eyre::eyre!("data load task failed: {e}"))
                    }
                }
            }
        }

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }
    }
    Ok(())
}

/// Run the application in headless mode (no UI).
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    let data = load_city_data(&app.config.data_dir).await?;
    app.finish_loading(data);

    if json {
        render_headless_json(app)?;
    } else {
        render_headless_stats(app);
    }

    Ok(())
}

fn render_headless_stats(app: &App) {
    let Some(stats) = build_headless_stats(app) else {
        return;
    };

    println!("\nCity Scan Stats: {}", stats.location);
    println!("==============================");

    if let Some((year, population)) = stats.latest_population {
        println!("Population ({year}): {population:.0}");
    }

    println!("\nAge dependency:");
    println!("- Youth ratio: {:.0}", stats.dependency.youth_dependency_ratio);
    println!(
        "- Elderly ratio: {:.0}",
        stats.dependency.elderly_dependency_ratio
    );
    println!(
        "- Total ratio: {:.0}",
        stats.dependency.total_dependency_ratio
    );

    println!("\nWealth distribution (% of area):");
    for (label, percentage) in &stats.wealth {
        println!("- {label}: {percentage:.1}%");
    }

    println!("\nLand cover (% of area):");
    for (label, percentage) in &stats.land_cover {
        println!("- {label}: {percentage:.1}%");
    }

    println!("\nMonths per solar condition:");
    for (label, count) in &stats.solar_condition_months {
        println!("- {label}: {count}");
    }

    println!("\nWeeks per fire danger level:");
    for (label, count) in &stats.fire_danger_weeks {
        println!("- {label}: {count}");
    }
}

fn render_headless_json(app: &App) -> Result<()> {
    let Some(stats) = build_headless_stats(app) else {
        return Ok(());
    };
    let json = serde_json::to_string_pretty(&stats)?;
    println!("{json}");
    Ok(())
}

fn build_headless_stats(app: &App) -> Option<HeadlessStats> {
    let data = app.data.as_ref()?;
    let derived = app.derived.as_ref()?;

    let latest_population = data
        .pg
        .iter()
        .max_by_key(|row| row.year_name)
        .map(|row| (row.year_name, row.population));

    let wealth = derived
        .wealth
        .iter()
        .map(|row| (row.bin.clone(), row.percentage))
        .collect();

    let land_cover = data
        .lc
        .iter()
        .filter(|row| row.percentage > 0.0)
        .map(|row| (row.lc_type.clone(), row.percentage))
        .collect();

    let solar_condition_months = derived
        .pv_condition_months
        .iter()
        .map(|entry| (entry.label.clone(), entry.count))
        .collect();

    let fire_danger_weeks = derived
        .fwi_danger_weeks
        .iter()
        .map(|entry| (entry.label.clone(), entry.count))
        .collect();

    Some(HeadlessStats {
        location: app.config.location(),
        latest_population,
        dependency: derived.ratios,
        wealth,
        land_cover,
        solar_condition_months,
        fire_danger_weeks,
    })
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    location: String,
    latest_population: Option<(i32, f64)>,
    dependency: crate::stats::DependencyRatios,
    wealth: Vec<(String, f64)>,
    land_cover: Vec<(String, f64)>,
    solar_condition_months: Vec<(String, usize)>,
    fire_danger_weeks: Vec<(String, usize)>,
}
