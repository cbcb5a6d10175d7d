use crossterm::event::KeyCode;

use crate::app::state::{AppScreen, FinderState};
use crate::app::App;

/// Route one key press into the current UI mode.
pub fn handle_input(app: &mut App, key: KeyCode) {
    if app.finder.is_some() {
        handle_finder_input(app, key);
        return;
    }

    if app.show_help {
        if matches!(key, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::F(1) | KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('/') => {
            let mut finder = FinderState::new();
            finder.refresh();
            app.finder = Some(finder);
        }
        KeyCode::Char(c @ '1'..='6') => {
            if let Some(screen) = c
                .to_digit(10)
                .and_then(|digit| AppScreen::from_index(digit as usize - 1))
            {
                app.select_screen(screen);
            }
        }
        KeyCode::PageDown => {
            let next = (app.screen.index() + 1) % AppScreen::ALL.len();
            if let Some(screen) = AppScreen::from_index(next) {
                app.select_screen(screen);
            }
        }
        KeyCode::PageUp => {
            let len = AppScreen::ALL.len();
            let prev = (app.screen.index() + len - 1) % len;
            if let Some(screen) = AppScreen::from_index(prev) {
                app.select_screen(screen);
            }
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_tab(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Enter => {
            if app.record_count() > 0 {
                app.show_inspector = !app.show_inspector;
            }
        }
        KeyCode::Esc => app.show_inspector = false,
        _ => {}
    }
}

fn handle_finder_input(app: &mut App, key: KeyCode) {
    let Some(finder) = app.finder.as_mut() else {
        return;
    };

    match key {
        KeyCode::Esc => app.finder = None,
        KeyCode::Enter => {
            if let Some(chart) = finder.matches.get(finder.selected).copied() {
                app.jump_to_chart(chart);
            } else {
                app.finder = None;
            }
        }
        KeyCode::Backspace => {
            finder.query.pop();
            finder.refresh();
        }
        KeyCode::Down => {
            if !finder.matches.is_empty() {
                finder.selected = (finder.selected + 1) % finder.matches.len();
            }
        }
        KeyCode::Up => {
            if !finder.matches.is_empty() {
                finder.selected =
                    (finder.selected + finder.matches.len() - 1) % finder.matches.len();
            }
        }
        KeyCode::Char(c) => {
            finder.query.push(c);
            finder.refresh();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ChartId;
    use crate::config::ScanConfig;
    use std::path::PathBuf;

    fn test_app() -> App {
        App::new(ScanConfig {
            city: "Testville".to_string(),
            country: String::new(),
            data_dir: PathBuf::from("."),
        })
    }

    #[test]
    fn digits_switch_screens() {
        let mut app = test_app();
        handle_input(&mut app, KeyCode::Char('5'));
        assert_eq!(app.screen, AppScreen::Climate);
        handle_input(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen, AppScreen::Overview);
    }

    #[test]
    fn finder_captures_keys_until_closed() {
        let mut app = test_app();
        handle_input(&mut app, KeyCode::Char('/'));
        assert!(app.finder.is_some());

        // 'q' goes into the query instead of quitting.
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.finder.as_ref().map(|f| f.query.as_str()), Some("q"));

        handle_input(&mut app, KeyCode::Esc);
        assert!(app.finder.is_none());
    }

    #[test]
    fn finder_enter_jumps_to_selection() {
        let mut app = test_app();
        handle_input(&mut app, KeyCode::Char('/'));
        for c in "pyramid".chars() {
            handle_input(&mut app, KeyCode::Char(c));
        }
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.current_chart(), Some(ChartId::PopulationPyramid));
        assert!(app.finder.is_none());
    }

    #[test]
    fn quit_key_stops_the_app() {
        let mut app = test_app();
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
