use std::collections::VecDeque;

use anyhow::Result;
use ratatui::{
    crossterm::{
        self,
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
            KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
        },
    },
    prelude::*,
};
use spotlight_engine::{
    ActionRegistry, CloseReason, KeyListeners, Spotlight, SpotlightAction, SpotlightEvent,
    SpotlightMsg, Subscription,
};
use tokio::sync::mpsc;

use ::log::{debug, error};

use crate::actions::Action;
use crate::config::Config;
use crate::effect::execute_effect;
use crate::state::*;
use crate::store::Store;
use crate::view_models::spotlight::SpotlightViewModel;
use crate::views::spotlight::SpotlightAreas;

mod actions;
mod config;
mod effect;
mod keys;
mod log_capture;
mod providers;
mod reducer;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

pub struct App {
    // Redux store - host state (page, theme, console, popup geometry)
    pub store: Store,
    // Spotlight engine - owns query, selection and open state
    pub spotlight: Spotlight,
    registry: ActionRegistry<AppState>,
    // Global key listeners; the spotlight's toggle lives here while mounted
    listeners: KeyListeners<SpotlightMsg>,
    _spotlight_listener: Subscription,
    pub action_tx: mpsc::UnboundedSender<Action>,
}

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = shutdown();
        original_hook(panic_info);
    }));
}

fn startup() -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        std::io::stderr(),
        crossterm::terminal::EnterAlternateScreen,
        EnableMouseCapture
    )?;
    Ok(())
}

fn shutdown() -> Result<()> {
    crossterm::execute!(
        std::io::stderr(),
        DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}

/// Engine events become ordinary actions for the store
fn event_to_action(event: SpotlightEvent) -> Action {
    match event {
        SpotlightEvent::OpenChanged(open) => Action::SpotlightOpenChanged(open),
        SpotlightEvent::RequestFocus { after } => Action::SpotlightFocusRequested(after),
        SpotlightEvent::ScrollIntoView { index } => Action::SpotlightScrollIntoView(index),
        SpotlightEvent::Triggered { id } => Action::SpotlightTriggered(id),
    }
}

fn update(app: &mut App, action: Action) {
    let mut queue = VecDeque::from([action]);

    while let Some(action) = queue.pop_front() {
        match action {
            Action::None => {}
            Action::Key(key) => queue.extend(app.route_key(&key)),
            Action::Mouse(mouse) => queue.push_back(app.route_mouse(&mouse)),
            Action::Spotlight(msg) => queue.extend(app.dispatch_spotlight(msg)),
            action => {
                for effect in app.store.dispatch(action) {
                    execute_effect(app, effect);
                }
            }
        }
    }
}

fn start_event_handler(tx: mpsc::UnboundedSender<Action>) -> tokio::task::JoinHandle<()> {
    let tick_rate = std::time::Duration::from_millis(250);

    tokio::spawn(async move {
        loop {
            let action = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Action::Key(key),
                    Ok(Event::Mouse(mouse)) => Action::Mouse(mouse),
                    Ok(_) => Action::None,
                    Err(err) => {
                        error!("Failed to read terminal event: {}", err);
                        break;
                    }
                },
                // Redraw on every tick so the console follows new logs
                Ok(false) => Action::None,
                Err(err) => {
                    error!("Failed to poll terminal events: {}", err);
                    break;
                }
            };

            if tx.send(action).is_err() {
                break;
            }
        }
    })
}

async fn run_with_log_buffer(log_buffer: log_capture::LogBuffer) -> Result<()> {
    let mut t = Terminal::new(CrosstermBackend::new(std::io::stderr()))?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let mut app = App::new(action_tx.clone(), Config::load(), log_buffer);
    let event_task = start_event_handler(action_tx);

    loop {
        t.draw(|f| {
            ui(f, &mut app);
        })?;

        match action_rx.recv().await {
            Some(action) => update(&mut app, action),
            None => break, // Channel closed
        }

        if app.store.state().ui.should_quit {
            break;
        }
    }

    event_task.abort();

    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    crate::views::catalogue::render_catalogue(f, f.area(), app.store.state());

    // Spotlight floats above the page
    if app.spotlight.is_open() {
        let areas = SpotlightAreas::new(f.area());
        let actions = app.actions();
        let view = app.spotlight.view(&actions);
        let popup_state = &app.store.state().ui.spotlight;

        let vm = SpotlightViewModel::from_view(
            &view,
            app.spotlight.state().input_focused,
            popup_state.scroll_offset,
            popup_state.scroll_target,
            areas.list.height as usize,
        );
        crate::views::spotlight::render_spotlight(f, &areas, &vm, &app.store.state().theme);

        let layout = areas.layout(&vm);
        let changed = popup_state.layout.as_ref() != Some(&layout) || popup_state.scroll_target.is_some();
        if changed {
            // Remember geometry for hit-testing and the scroll position for the next frame
            app.store.dispatch(Action::UpdateSpotlightLayout(Some(layout)));
        }
    }

    // Render debug console (Quake-style drop-down) if visible
    if app.store.state().debug_console.is_open {
        let state = app.store.state();
        let viewport_height = crate::views::debug_console::render_debug_console(
            f,
            f.area(),
            &state.debug_console,
            &state.theme,
        );
        app.store
            .dispatch(Action::UpdateDebugConsoleViewport(viewport_height));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize debug console logger before anything else
    let log_buffer = log_capture::init_logger()?;

    initialize_panic_handler();
    startup()?;
    let result = run_with_log_buffer(log_buffer).await;
    shutdown()?;
    result
}

impl App {
    fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        config: Config,
        log_buffer: log_capture::LogBuffer,
    ) -> App {
        let spotlight = Spotlight::new(config.spotlight_options());
        let registry = providers::build_registry(&action_tx, &config);
        let listeners = KeyListeners::new();
        let spotlight_listener = spotlight.listen(&listeners);

        debug!(
            "Spotlight ready: {} providers, toggle {}",
            registry.provider_count(),
            config.shortcut_hint()
        );

        let initial_state = AppState {
            debug_console: DebugConsoleState {
                logs: log_buffer,
                ..DebugConsoleState::default()
            },
            config,
            ..AppState::default()
        };

        App {
            store: Store::new(initial_state),
            spotlight,
            registry,
            listeners,
            _spotlight_listener: spotlight_listener,
            action_tx,
        }
    }

    /// The spotlight's action list for the current state
    fn actions(&self) -> Vec<SpotlightAction> {
        self.registry.collect(self.store.state())
    }

    fn dispatch_spotlight(&mut self, msg: SpotlightMsg) -> Vec<Action> {
        let actions = self.actions();
        self.spotlight
            .dispatch(msg, &actions)
            .into_iter()
            .map(event_to_action)
            .collect()
    }

    /// Global listeners first, then the focused surface (spotlight or app)
    fn route_key(&self, key: &KeyEvent) -> Vec<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![Action::Quit];
        }

        let open = self.spotlight.is_open();
        let input = keys::to_key_input(key);

        // Escape only means something to a closed spotlight's neighbours
        let msgs: Vec<SpotlightMsg> = self
            .listeners
            .dispatch(&input)
            .into_iter()
            .filter(|msg| open || !matches!(msg, SpotlightMsg::Close(_)))
            .collect();
        if !msgs.is_empty() {
            return msgs.into_iter().map(Action::Spotlight).collect();
        }

        if open {
            vec![keys::spotlight_key_action(key, self.spotlight.query())]
        } else {
            vec![keys::app_key_action(
                key,
                self.store.state().debug_console.is_open,
            )]
        }
    }

    /// Hover, click and click-outside for the open popup
    fn route_mouse(&self, mouse: &MouseEvent) -> Action {
        if !self.spotlight.is_open() {
            return Action::None;
        }
        let Some(layout) = &self.store.state().ui.spotlight.layout else {
            return Action::None;
        };

        let index = layout.index_at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => index
                .map(|i| Action::Spotlight(SpotlightMsg::Hover(i)))
                .unwrap_or(Action::None),
            MouseEventKind::Down(MouseButton::Left) => match index {
                Some(i) => Action::Spotlight(SpotlightMsg::Click(i)),
                None if !layout.contains(mouse.column, mouse.row) => {
                    Action::Spotlight(SpotlightMsg::Close(CloseReason::Outside))
                }
                None => Action::None,
            },
            MouseEventKind::ScrollDown => Action::Spotlight(SpotlightMsg::Next),
            MouseEventKind::ScrollUp => Action::Spotlight(SpotlightMsg::Prev),
            _ => Action::None,
        }
    }
}
