//! src/main.rs
//! ============================================================================
//! Galleria TUI: gallery, file manager and recycle bin over an in-memory library

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
    sync::Arc,
    time::Instant,
};

use anyhow::{Context, Result};
use chrono::Utc;
use crossterm::{
    event::{Event as TerminalEvent, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::{
    signal,
    sync::Notify,
    time::{self, Interval, MissedTickBehavior},
};
use tracing::{debug, error, info, warn};

use galleria_core::{
    config::Config,
    controller::{
        actions::Action,
        key_map::map_key,
        view_controller::{ControllerSettings, ViewController},
    },
    error::{AppError, AppResult},
    logging::LoggerBuilder,
    model::seed::seed_library,
    view::{theme, ui::UIRenderer},
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Config first: it decides where the log file goes.
    let (config, config_error) = match Config::load().await {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let _log_guard = LoggerBuilder::new()
        .with_config(config.log.clone())
        .build()
        .context("Failed to initialize logging")?;

    if let Some(e) = config_error {
        warn!("Failed to load config, using defaults: {e:#}");
    }

    setup_panic_handler();

    let app = App::new(&config).context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    controller: ViewController,
    ui_renderer: UIRenderer,
    ticker: Interval,
    shutdown: Arc<Notify>,
}

impl App {
    fn new(config: &Config) -> Result<Self> {
        info!("Starting Galleria");

        let now = Utc::now();
        let library = seed_library(now);
        info!(
            files = library.files().len(),
            albums = library.albums().len(),
            "Library seeded"
        );

        let mut controller = ViewController::new(library, ControllerSettings::from(config), now);
        controller.ui_mut().show_sidebar = config.ui.show_sidebar;

        let ui_renderer = UIRenderer::new(theme::init_theme(config.theme));

        let mut ticker = time::interval(config.ui.tick_rate);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let terminal = setup_terminal().context("Failed to initialize terminal")?;

        Ok(Self {
            terminal,
            controller,
            ui_renderer,
            ticker,
            shutdown: Arc::new(Notify::new()),
        })
    }

    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler();
        info!("Starting event loop");

        let mut event_stream = EventStream::new();

        loop {
            self.render()?;

            let action = tokio::select! {
                // Shutdown signal
                () = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                // Terminal events
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.process_terminal_event(event),
                    Some(Err(e)) => {
                        warn!("Terminal event error: {e}");
                        continue;
                    }
                    None => {
                        info!("Terminal event stream closed");
                        break;
                    }
                },

                // Purge timer + notification expiry
                _ = self.ticker.tick() => Action::Tick,
            };

            if !self.controller.dispatch(action, Utc::now()) {
                info!("Quit requested");
                break;
            }
        }

        info!(frames = self.ui_renderer.frames(), "Event loop terminated cleanly");
        Ok(())
    }

    fn process_terminal_event(&self, event: TerminalEvent) -> Action {
        match event {
            TerminalEvent::Key(key_event) => {
                let ui = self.controller.ui();
                map_key(key_event, &ui.overlay, self.controller.view())
            }
            TerminalEvent::Resize(width, height) => Action::Resize(width, height),
            _ => Action::NoOp,
        }
    }

    fn render(&mut self) -> Result<()> {
        if !self.controller.ui().needs_redraw() {
            return Ok(());
        }

        let start = Instant::now();
        let now = Utc::now();

        let controller = &self.controller;
        let renderer = &mut self.ui_renderer;
        self.terminal
            .draw(|frame: &mut Frame<'_>| renderer.render(frame, controller, now))
            .map_err(|e| AppError::terminal("draw frame", e))?;

        self.controller.ui_mut().clear_redraw();

        let duration = start.elapsed();
        if duration.as_millis() > 16 {
            debug!("Slow render: {}ms (target: <16ms)", duration.as_millis());
        }
        Ok(())
    }

    fn setup_shutdown_handler(&self) {
        let shutdown = Arc::clone(&self.shutdown);

        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{SignalKind, signal};

                match signal(SignalKind::terminate()) {
                    Ok(mut sigterm) => {
                        tokio::select! {
                            _ = sigterm.recv() => info!("Received SIGTERM"),
                            _ = signal::ctrl_c() => info!("Received Ctrl+C"),
                        }
                    }
                    Err(e) => {
                        warn!("Failed to create SIGTERM handler: {e}");
                        if signal::ctrl_c().await.is_err() {
                            return;
                        }
                        info!("Received Ctrl+C");
                    }
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                    return;
                }
                info!("Received Ctrl+C");
            }

            shutdown.notify_one();
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

fn setup_terminal() -> AppResult<AppTerminal> {
    enable_raw_mode().map_err(|e| AppError::terminal("enable raw mode", e))?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| AppError::terminal("enter alternate screen", e))?;

    let backend = CrosstermBackend::new(stdout);
    let terminal =
        Terminal::new(backend).map_err(|e| AppError::terminal("create terminal", e))?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> AppResult<()> {
    disable_raw_mode().map_err(|e| AppError::terminal("disable raw mode", e))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| AppError::terminal("leave alternate screen", e))?;
    terminal
        .show_cursor()
        .map_err(|e| AppError::terminal("show cursor", e))?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
