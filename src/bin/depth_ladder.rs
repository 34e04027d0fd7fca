//! Depth Ladder - Terminal UI for the live market depth ladder
//!
//! Drains the quote feed on the UI thread, draws the ladder, then commits the
//! change baselines of the drawn frame.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use market_depth::application::visualizer::{ui, App};
use market_depth::{init_file_tracing, LadderConfig};
use market_depth_ladder::bin_common::{load_config_from_env, ConfigType};

fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config_path = load_config_from_env(ConfigType::Ladder);
    let config = LadderConfig::load_or_default(&config_path)?;

    // Logging to stdout would corrupt the alternate screen, so only to a file
    if let Some(log_file) = &config.log_file {
        init_file_tracing(log_file, &config.log_level)?;
        config.log();
    }

    // Create tokio runtime
    let runtime = tokio::runtime::Runtime::new()?;

    // Open the feed
    let mut app = runtime.block_on(async {
        App::initialize(runtime.handle().clone(), &config).await
    })?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, config.refresh_interval());

    // Close the feed before handing the terminal back
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    refresh_interval: Duration,
) -> Result<()> {
    loop {
        app.tick();

        // Diff, draw, then commit the drawn baselines
        let pending = app.begin_frame();
        terminal.draw(|frame| ui::draw(frame, app))?;
        app.finish_frame(pending);

        if event::poll(refresh_interval)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('t') | KeyCode::Enter => {
                            app.toggle_panel();
                        }
                        KeyCode::Char('r') => {
                            app.reconnect();
                        }
                        KeyCode::Char('j') | KeyCode::Down => {
                            app.scroll_down();
                        }
                        KeyCode::Char('k') | KeyCode::Up => {
                            app.scroll_up();
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
