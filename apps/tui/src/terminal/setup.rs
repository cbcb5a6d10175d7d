use color_eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Write};

/// Set up the terminal with safer state transitions: raw mode first, then
/// the alternate screen, cleaning up whatever succeeded if a later step
/// fails.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    if let Err(e) = enable_raw_mode() {
        return Err(color_eyre::eyre::eyre!("Failed to enable raw mode: {e}"));
    }

    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(color_eyre::eyre::eyre!(
            "Failed to enter alternate screen: {e}"
        ));
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(term) => term,
        Err(e) => {
            let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(color_eyre::eyre::eyre!("Failed to create terminal: {e}"));
        }
    };

    if terminal.clear().is_err() {
        // Not fatal, continue
    }
    if execute!(std::io::stdout(), cursor::Hide).is_err() {
        // Not fatal, continue
    }

    Ok(terminal)
}

/// Restore terminal state, tolerating partial failures so that a broken
/// cleanup never masks the real error.
pub fn cleanup_terminal_state(raw_mode: bool, alternate_screen: bool) {
    let mut stdout_handle = stdout();

    let _ = execute!(stdout_handle, cursor::Show);

    if alternate_screen {
        let _ = execute!(stdout_handle, LeaveAlternateScreen);
    }

    if raw_mode {
        let _ = disable_raw_mode();
    }

    // Force a newline so the shell prompt reappears cleanly.
    let _ = execute!(stdout_handle, cursor::MoveToNextLine(1));
    let _ = stdout_handle.flush();
}
