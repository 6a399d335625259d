use crate::api::BusApi;
use crate::bridge::spawn_bridge;
use crate::registry::BusRegistry;
use crate::ui::app::{App, Screen};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Everything the terminal loop needs, resolved at startup.
pub struct RunOptions {
    pub screen: Screen,
    pub endpoint: String,
    pub tick_rate: Duration,
}

pub fn run(
    handle: &Handle,
    api: Arc<dyn BusApi>,
    registry: BusRegistry,
    options: RunOptions,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = options.tick_rate;
    let mut app = App::new(options.screen, options.endpoint);
    let events = EventHandler::new(tick_rate);
    app.set_command_sender(spawn_bridge(handle, api, registry, events.sender()));

    // The list loads on startup like any other refresh.
    app.request_refresh();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Registry(snapshot)) => app.on_registry(snapshot),
            Ok(AppEvent::ActionSettled { origin, outcome }) => {
                app.on_action_settled(origin, outcome)
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
