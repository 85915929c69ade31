//! Interactive terminal browser for the element catalog.
//!
//! Three pieces: [`app`] holds the UI-local state (search text, category
//! selection, list selection), `ui` draws it, and [`run`] owns the
//! terminal and the key-event loop. Filtering happens synchronously in
//! the input handlers; there is no background work to poll for.

mod app;
mod ui;

use anyhow::Result;
use app::{App, View};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

pub fn run(initial_query: Option<String>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Clear the terminal to prevent any artifacts from previous content
    terminal.clear()?;

    let mut app = App::new(initial_query);

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Blocking read: every state change comes from a key event
        if let Event::Key(key) = event::read()? {
            // Only handle key press events, not release or repeat
            // This fixes duplicate keypresses on Windows where both press and release are reported
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Global keybindings
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),
                (KeyModifiers::CONTROL, KeyCode::Char('q')) => return Ok(()),
                _ => {}
            }

            match app.view {
                View::Help => {
                    // Any key closes help
                    app.hide_help();
                }
                View::Elements => {
                    // Check for Ctrl+key combinations first
                    match (key.modifiers, key.code) {
                        // Ctrl+j/Ctrl+n - select next result
                        (KeyModifiers::CONTROL, KeyCode::Char('j'))
                        | (KeyModifiers::CONTROL, KeyCode::Char('n')) => app.select_next(),
                        // Ctrl+k/Ctrl+p - select previous result
                        (KeyModifiers::CONTROL, KeyCode::Char('k'))
                        | (KeyModifiers::CONTROL, KeyCode::Char('p')) => app.select_prev(),
                        // Ctrl+d - page down
                        (KeyModifiers::CONTROL, KeyCode::Char('d')) => app.select_page_down(),
                        // Ctrl+u - page up
                        (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.select_page_up(),
                        // Ctrl+w - delete word backward
                        (KeyModifiers::CONTROL, KeyCode::Char('w')) => app.delete_word(),
                        // Ctrl+h - backspace (terminal standard)
                        (KeyModifiers::CONTROL, KeyCode::Char('h')) => app.backspace(),
                        // Ctrl+a - go to first result
                        (KeyModifiers::CONTROL, KeyCode::Char('a')) => app.select_first(),
                        // Ctrl+e - go to last result
                        (KeyModifiers::CONTROL, KeyCode::Char('e')) => app.select_last(),
                        // Non-Ctrl keybindings. Plain characters edit the
                        // search text, so navigation stays on arrows and
                        // modifier combinations here.
                        (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                            KeyCode::Esc => {
                                if app.query.is_empty() {
                                    return Ok(());
                                }
                                app.clear_query();
                            }
                            KeyCode::Down => app.select_next(),
                            KeyCode::Up => app.select_prev(),
                            KeyCode::PageDown => app.select_page_down(),
                            KeyCode::PageUp => app.select_page_up(),
                            KeyCode::Home => app.select_first(),
                            KeyCode::End => app.select_last(),
                            // Cycle the category selection
                            KeyCode::Left => app.prev_category(),
                            KeyCode::Right => app.next_category(),
                            // Switch to the code samples view
                            KeyCode::Tab => app.toggle_view(),
                            KeyCode::Char(c) => app.push_char(c),
                            KeyCode::Backspace => app.backspace(),
                            KeyCode::F(1) => app.show_help(),
                            _ => {}
                        },
                        _ => {}
                    }
                }
                View::Samples => {
                    // Handle pending 'g' key for gg command
                    if app.pending_key == Some('g') {
                        app.clear_pending_key();
                        if key.code == KeyCode::Char('g') {
                            app.scroll_sample_to_top();
                            continue;
                        }
                        // If not 'g', fall through to normal handling
                    }

                    match (key.modifiers, key.code) {
                        // Ctrl+d - half-page down
                        (KeyModifiers::CONTROL, KeyCode::Char('d')) => {
                            app.scroll_sample_page_down()
                        }
                        // Ctrl+u - half-page up
                        (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.scroll_sample_page_up(),
                        (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Tab => {
                                app.view = View::Elements;
                            }
                            KeyCode::Down | KeyCode::Char('j') => app.scroll_sample_down(),
                            KeyCode::Up | KeyCode::Char('k') => app.scroll_sample_up(),
                            KeyCode::PageDown => app.scroll_sample_page_down(),
                            KeyCode::PageUp => app.scroll_sample_page_up(),
                            // Switch between the samples
                            KeyCode::Left | KeyCode::Char('h') => app.prev_sample(),
                            KeyCode::Right | KeyCode::Char('l') => app.next_sample(),
                            // Vim: g - start 'gg' sequence for go to top
                            KeyCode::Char('g') => {
                                app.pending_key = Some('g');
                            }
                            // Vim: G - go to bottom
                            KeyCode::Char('G') => app.scroll_sample_to_bottom(),
                            KeyCode::Char('?') | KeyCode::F(1) => app.show_help(),
                            _ => {}
                        },
                        _ => {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_each_view() -> Result<()> {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend)?;
        let mut app = App::new(Some("img".to_string()));

        terminal.draw(|f| ui::draw(f, &app))?;

        app.show_help();
        terminal.draw(|f| ui::draw(f, &app))?;
        app.hide_help();

        app.toggle_view();
        assert_eq!(app.view, View::Samples);
        terminal.draw(|f| ui::draw(f, &app))?;

        Ok(())
    }

    #[test]
    fn test_draw_empty_result_set() -> Result<()> {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend)?;
        let app = App::new(Some("zzzznotfound".to_string()));

        terminal.draw(|f| ui::draw(f, &app))?;

        Ok(())
    }
}
