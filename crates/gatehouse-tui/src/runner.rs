//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use gatehouse_app::actions::ActionContext;
use gatehouse_app::auth::Authenticator;
use gatehouse_app::config::Settings;
use gatehouse_app::message::Message;
use gatehouse_app::state::LoginState;
use gatehouse_app::{process, signals, ConfiguredAuthenticator};
use gatehouse_core::prelude::*;

use crate::layout::LoginLayout;
use crate::{event, render, terminal};

/// Capacity of the unified message channel
const CHANNEL_CAPACITY: usize = 64;

/// Run the login screen until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    if let Err(e) = terminal::set_title(&settings.page.title) {
        warn!("{}", e);
    }
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("{}, continuing keyboard-only", e);
    }

    let authenticator = ConfiguredAuthenticator::from_settings(&settings.auth);
    let mut state = LoginState::with_settings(settings);
    info!("Login screen starting");

    // Unified channel for auth outcomes, timer expiry and signals
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let mut ctx = ActionContext::new(msg_tx, authenticator);

    let result = run_loop(&mut term, &mut state, msg_rx, &mut ctx);

    // Restore terminal
    if let Err(e) = terminal::disable_mouse_capture() {
        warn!("{}", e);
    }
    ratatui::restore();
    info!("Login screen closed");

    result
}

/// Main event loop
fn run_loop<A>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut LoginState,
    mut msg_rx: mpsc::Receiver<Message>,
    ctx: &mut ActionContext<A>,
) -> Result<()>
where
    A: Authenticator + Send + Sync + 'static,
{
    let mut layout = LoginLayout::default();

    while !state.should_quit() {
        // Process background messages (auth outcome, timer, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, ctx);
        }
        if state.should_quit() {
            break;
        }

        // Render
        terminal
            .draw(|frame| layout = render::view(frame, state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        let messages = event::poll(state, &layout).context("Failed to read terminal input")?;
        for message in messages {
            process::process_message(state, message, ctx);
        }
    }

    Ok(())
}
