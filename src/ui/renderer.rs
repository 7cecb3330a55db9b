//! Terminal setup and the main event loop

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tokio::time::Duration;

use crate::config::Config;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};

/// Run the main TUI application
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    let mouse_enabled = config.ui.mouse_enabled;

    // Terminal initialization
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut event_handler = EventHandler::new(Duration::from_millis(config.ui.tick_rate_ms));
    let mut app = AppComponent::new(config, logger);
    log::info!("Schedulist started");

    let res = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Cleanup runs whether or not the loop failed; every step is attempted
    let restored = restore_terminal(&mut terminal, mouse_enabled);

    if let Err(ref e) = res {
        log::error!("Event loop failed: {:#}", e);
    }
    if let Err(ref e) = restored {
        log::error!("Failed to restore terminal: {:#}", e);
    }
    res.and(restored)
}

/// Undo the terminal setup, returning the first failure after trying every step
pub fn restore_terminal<B: Backend + io::Write>(terminal: &mut Terminal<B>, mouse_enabled: bool) -> Result<()> {
    let raw_mode = disable_raw_mode().context("Failed to disable raw mode");
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)
        .context("Failed to leave alternate screen");
    let mouse = if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture).context("Failed to disable mouse capture")
    } else {
        Ok(())
    };
    let cursor = terminal.show_cursor().context("Failed to show cursor");

    raw_mode.and(screen).and(mouse).and(cursor)
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        // Ticks also redraw so expired status messages and error cues disappear
        if !matches!(event, EventType::Other) {
            app.handle_event(event);
            needs_render = true;
        }

        if app.should_quit() {
            log::info!("Schedulist exiting");
            break;
        }
    }

    Ok(())
}
