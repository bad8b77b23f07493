use lexico::app::App;
use lexico::engine::format_report;
use lexico::input;
use lexico::lexer::classify;
use lexico::ui::TuiManager;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Silent unless RUST_LOG is set
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if !paths.is_empty() {
        return Ok(print_reports(&paths));
    }

    let mut app = App::new();
    let mut tui = TuiManager::new()?;

    // The TUI handles all user input, including file and clipboard loading
    tui.run_event_loop(&mut app)?;

    Ok(ExitCode::SUCCESS)
}

/// Prints a report for each source file; fails if any file could not be loaded.
fn print_reports(paths: &[String]) -> ExitCode {
    let mut status = ExitCode::SUCCESS;

    for path in paths {
        match input::file::load(path) {
            Ok(source) => {
                let tokens = classify(&source.text);
                println!("{}", format_report(&source.text, &tokens));
            }
            Err(e) => {
                eprintln!("{}: {}", path, e);
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}
