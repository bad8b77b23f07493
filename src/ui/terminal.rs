use crate::app::{mode::AppMode, App, AppEvent};
use crate::ui::command::{command_to_app_event, parse_command};
use crate::ui::render::{
    render_dropped, render_echo, render_help, render_input_line, render_status,
    render_summary, render_token_table,
};
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input: String,
    // Dropped after `terminal` so the screen is restored last
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            input: String::new(),
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            self.render_frame(app)?;

            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            if let Event::Key(key) = event::read()? {
                // Ignore release/repeat events reported by some platforms
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut self.input, app, key);
                }
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        let input = self.input.clone();

        self.terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(3),
                    Constraint::Length(1),
                    Constraint::Length(2),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(frame.area());

            frame.render_widget(render_input_line(&input), chunks[0]);

            if render_state.mode == AppMode::Help {
                frame.render_widget(render_help(), chunks[1]);
            } else {
                // Two rows go to the table borders
                let rows = chunks[1].height.saturating_sub(2) as usize;
                let title = match &render_state.origin {
                    Some(origin) => format!(
                        "Tokens ({}) from {}",
                        render_state.tokens.len(),
                        origin
                    ),
                    None => "Tokens".to_string(),
                };
                let table = render_token_table(
                    render_state.visible_tokens(rows),
                    render_state.value_width,
                    &title,
                );
                frame.render_widget(table, chunks[1]);
            }

            frame.render_widget(
                render_echo(render_state.input_text.as_deref()),
                chunks[2],
            );
            frame.render_widget(render_dropped(&render_state.dropped), chunks[3]);
            frame.render_widget(render_summary(&render_state.summary), chunks[4]);
            frame.render_widget(
                render_status(
                    render_state.origin.as_deref(),
                    render_state.warning.as_deref(),
                ),
                chunks[5],
            );
        })?;

        Ok(())
    }
}

/// Applies one key press to the input line and the app.
pub fn handle_key(input: &mut String, app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.handle_event(AppEvent::Quit);
        }
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(entry) = app.recall_previous() {
                *input = entry;
            }
        }
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            *input = app.recall_next().unwrap_or_default();
        }
        KeyCode::Char(c) => input.push(c),
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Enter => {
            let line = std::mem::take(input);
            app.handle_event(command_to_app_event(parse_command(&line)));
        }
        KeyCode::Esc => {
            if app.mode() == AppMode::Help {
                app.close_help();
            } else {
                input.clear();
            }
        }
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_line(input: &mut String, app: &mut App, line: &str) {
        for c in line.chars() {
            handle_key(input, app, press(KeyCode::Char(c)));
        }
        handle_key(input, app, press(KeyCode::Enter));
    }

    #[test]
    fn test_enter_classifies_typed_text() {
        let mut app = App::new();
        let mut input = String::new();
        type_line(&mut input, &mut app, "0xFF ++ y");

        assert!(input.is_empty());
        let state = app.get_render_state();
        assert_eq!(state.tokens.len(), 3);
    }

    #[test]
    fn test_backspace_and_escape_edit_input() {
        let mut app = App::new();
        let mut input = String::new();
        handle_key(&mut input, &mut app, press(KeyCode::Char('a')));
        handle_key(&mut input, &mut app, press(KeyCode::Char('b')));
        handle_key(&mut input, &mut app, press(KeyCode::Backspace));
        assert_eq!(input, "a");

        handle_key(&mut input, &mut app, press(KeyCode::Esc));
        assert!(input.is_empty());
    }

    #[test]
    fn test_help_then_escape() {
        let mut app = App::new();
        let mut input = String::new();
        type_line(&mut input, &mut app, ":h");
        assert_eq!(app.mode(), AppMode::Help);

        handle_key(&mut input, &mut app, press(KeyCode::Esc));
        assert_eq!(app.mode(), AppMode::Command);
    }

    #[test]
    fn test_quit_command_and_ctrl_c() {
        let mut app = App::new();
        let mut input = String::new();
        type_line(&mut input, &mut app, ":q");
        assert_eq!(app.mode(), AppMode::Quit);

        let mut app = App::new();
        handle_key(
            &mut input,
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.mode(), AppMode::Quit);
        assert!(input.is_empty());
    }

    #[test]
    fn test_classified_text_is_echoed_after_enter() {
        let mut app = App::new();
        let mut input = String::new();
        type_line(&mut input, &mut app, "x = 1");

        assert!(input.is_empty());
        let state = app.get_render_state();
        let echo = render_echo(state.input_text.as_deref());
        assert_eq!(echo.spans[1].content, "x = 1");
    }

    #[test]
    fn test_ctrl_p_and_ctrl_n_recall_history() {
        let mut app = App::new();
        let mut input = String::new();
        type_line(&mut input, &mut app, "a = 1");
        type_line(&mut input, &mut app, "b = 2");

        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        handle_key(&mut input, &mut app, ctrl('p'));
        assert_eq!(input, "b = 2");
        handle_key(&mut input, &mut app, ctrl('p'));
        assert_eq!(input, "a = 1");
        handle_key(&mut input, &mut app, ctrl('p'));
        assert_eq!(input, "a = 1");

        handle_key(&mut input, &mut app, ctrl('n'));
        assert_eq!(input, "b = 2");
        handle_key(&mut input, &mut app, ctrl('n'));
        assert!(input.is_empty());

        // Recalled entries are submitted like typed ones
        handle_key(&mut input, &mut app, ctrl('p'));
        handle_key(&mut input, &mut app, press(KeyCode::Enter));
        assert_eq!(app.get_render_state().input_text.as_deref(), Some("b = 2"));
    }

    #[test]
    fn test_blank_enter_warns() {
        let mut app = App::new();
        let mut input = String::new();
        handle_key(&mut input, &mut app, press(KeyCode::Enter));
        assert_eq!(app.warning(), Some("Nothing to classify"));
    }
}
