use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use linequill::config::Config;
use linequill::editor::session::EditorSession;
use linequill::input::InputHandler;
use linequill::theme::get_builtin_theme;
use linequill::ui::UI;

/// linequill - a modal terminal text editor
#[derive(Parser)]
#[command(name = "linequill")]
#[command(version)]
#[command(about = "A modal terminal text editor", long_about = None)]
struct Cli {
    /// File to edit (created on first save if it does not exist yet)
    file: Option<String>,

    /// Theme name (default: default-dark)
    #[arg(short, long)]
    theme: Option<String>,
}

/// Set up a panic hook that restores the terminal before displaying panic
/// information.
///
/// Without this, panic messages would be hidden or garbled by raw mode and
/// the alternate screen, making debugging very difficult.
fn setup_panic_hook() {
    use std::panic;

    // Take the default panic hook so we can call it after restoration
    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal to normal state.
        // Use stderr to avoid interfering with stdout pipes.
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    let config = Config::load();

    // CLI theme overrides config theme
    let theme_name = cli.theme.as_deref().unwrap_or(&config.theme);
    let theme = get_builtin_theme(theme_name).unwrap_or_else(|| {
        eprintln!(
            "Warning: Theme '{}' not found, using default-dark",
            theme_name
        );
        get_builtin_theme("default-dark").unwrap()
    });

    // Open the session before taking over the terminal so load errors print
    // normally.
    let mut session = EditorSession::open(cli.file.as_deref().map(Path::new))?;

    // Setup terminal
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let ui = UI::new(theme, config.show_line_numbers);
    let mut input_handler = if io::stdin().is_terminal() {
        InputHandler::new()
    } else {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    };

    // Main event loop
    let result = run_event_loop(&mut terminal, &ui, &mut input_handler, &mut session);

    // Termion restores the terminal through Drop guards, but we still want
    // to show the cursor before exiting.
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    result
}

/// The cooperative single-threaded loop: render, wait for one event,
/// dispatch it fully into the session, repeat until the session closes.
fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &UI,
    input_handler: &mut InputHandler,
    session: &mut EditorSession,
) -> Result<()> {
    loop {
        ui.render(terminal, session)?;

        match input_handler.next_event()? {
            Some(event) => {
                let closed = input_handler.handle_event(event, session)?;
                if closed {
                    break;
                }
            }
            // Input stream ended (terminal hangup).
            None => break,
        }
    }

    Ok(())
}
