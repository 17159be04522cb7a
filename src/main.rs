use digitizer::analysis::{self, AnalysisReceiver};
use digitizer::app::App;
use digitizer::config::Config;
use digitizer::events;
use digitizer::{logging, storage, terminal, ui};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve the config file path from `--config <path>` or the default
/// location.
fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    Config::default_path()
}

fn main() -> Result<()> {
    // Handle --version before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("digitizer {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;

    // =========================================================
    // Pre-flight: configuration must load and validate before
    // anything else is constructed (fail fast, no partial grid)
    // =========================================================
    let config = match config_path_from_args() {
        Some(path) => Config::load(&path)
            .wrap_err(format!("Configuration error in {:?}", path))?,
        None => Config::default(),
    };

    logging::init()?;
    terminal::install_panic_hook();

    // Create the Tokio runtime for the entire application
    let runtime = tokio::runtime::Runtime::new()?;

    let (analysis_tx, analysis_rx) = analysis::channel();
    let mut app = App::new(config, analysis_tx);

    // Setup terminal
    let mut stdout = io::stdout();
    terminal::enter_tui_mode(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend)?;
    term.clear()?;

    // Main event loop
    let result = runtime.block_on(run_app(&mut term, &mut app, analysis_rx));

    // Restore terminal
    terminal::leave_tui_mode(&mut io::stdout());

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut analysis_rx: AnalysisReceiver,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Async event stream for keyboard and mouse input
    let mut event_stream = EventStream::new();

    loop {
        // Draw only when something changed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            match key.code {
                                KeyCode::Char('c')
                                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                                {
                                    app.quit();
                                }
                                KeyCode::Char('q') | KeyCode::Esc => {
                                    app.quit();
                                }
                                _ => {}
                            }
                        }
                        Event::Mouse(mouse) => {
                            if let Some(pointer) =
                                events::from_mouse(&mouse, app.grid_area, &app.grid)
                            {
                                app.on_pointer(pointer);
                            }
                        }
                        _ => {}
                    }
                }
            }

            // Persist completed traces for the analysis consumer
            request = analysis_rx.recv() => {
                if let Some(request) = request {
                    tracing::info!(
                        id = %request.id,
                        points = request.trace.len(),
                        "analysis request received"
                    );
                    if let Err(error) = storage::append_analysis(&request) {
                        tracing::warn!(%error, "failed to persist analysis request");
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
