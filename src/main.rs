use bookdeck::app::{App, AppMessage};
use bookdeck::cli::{parse_args, run_cli_command};
use bookdeck::config::DashboardConfig;
use bookdeck::input::CommandRegistry;
use bookdeck::logging::init_logging;
use bookdeck::store::build_store;
use bookdeck::terminal::{setup_panic_hook, TerminalManager};
use bookdeck::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Spinner and toast expiry cadence
const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Handle flags before any initialization
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("bookdeck: {}", e);
            std::process::exit(2);
        }
    };
    let overrides = run_cli_command(command);

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let config = overrides.apply(DashboardConfig::from_env()?);

    let log_path = config.log_path();
    if let Err(e) = init_logging(&log_path) {
        eprintln!(
            "Warning: logging disabled ({}): {}",
            log_path.display(),
            e
        );
    }
    info!(
        backend = config.backend.as_str(),
        api_url = %config.api_url,
        "Starting bookdeck"
    );

    let store = build_store(&config)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let mut app = App::from_config(store, &config);
        app.load_books();

        let mut term_manager = TerminalManager::new()?;
        let result = run_app(term_manager.terminal(), &mut app).await;
        term_manager.restore();

        if let Err(e) = &result {
            error!(error = %e, "Dashboard exited with error");
        }
        info!("bookdeck exited");
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();
    let mut tick = tokio::time::interval(TICK_RATE);

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    app.mark_dirty();
    loop {
        // Draw only when state changed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &app.view_state()))?;
            app.clear_dirty();
        }

        tokio::select! {
            _ = tick.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key_event(&registry, key);
                        app.mark_dirty();
                    }
                    Some(Ok(Event::Paste(text))) => {
                        if app.handle_paste(&text) {
                            app.mark_dirty();
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    // Input closed; nothing more can happen
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
