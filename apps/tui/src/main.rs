mod app;
mod cli;
mod config;
mod data;
mod domain;
mod event;
mod stats;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let scan_config = config::init_app_config();
    let mut app = App::new(scan_config);

    // Headless mode, explicitly or when stdout is not a terminal.
    if args.headless || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    // Return the result
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
