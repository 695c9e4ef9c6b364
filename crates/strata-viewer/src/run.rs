//! Main run loop for the viewer
//!
//! Handles terminal initialization, the event loop, and cleanup.

use strata_core::{Result, StrataConfig};
use strata_hydrate::Element;
use tracing::debug;

use crate::{
    app::App,
    event::{self, AppEvent},
    terminal, ui,
};

/// Show `element` full screen until the user quits
pub fn run(element: Element, title: &str, config: &StrataConfig) -> Result<()> {
    let mut terminal = terminal::init()?;

    // Restores the terminal on panic
    let _guard = terminal::TerminalGuard::new();

    let mut app = App::new(element, title, config);
    debug!(rows = app.content_rows(), "viewer started");

    loop {
        let height = terminal.size()?.height;
        app.set_viewport_height(ui::viewport_height(height));

        terminal.draw(|frame| ui::draw(frame, &app))?;

        match event::poll_event(app.tick)? {
            Some(AppEvent::Key(key)) => app.handle_key(key),
            Some(AppEvent::Resize(_, _)) => {
                // Picked up by the next viewport update
            }
            Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            break;
        }
    }

    terminal::restore()?;

    Ok(())
}
