use std::io::{self, BufRead, Write};
use std::path::Path;
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use log::LevelFilter;
use page_core::{update, AppState, Msg, PageViewModel, ALERT_BUTTON};
use page_engine::EngineHandle;
use page_logging::{page_info, page_warn};

use super::config::{load_config, CONFIG_FILENAME};
use super::console::{parse_command, ConsoleCommand};
use super::dialog::{ConsoleDialog, Dialog};
use super::effects::EffectRunner;
use super::render::render;

const POLL_INTERVAL: Duration = Duration::from_millis(20);
/// How long lookups may still complete once console input has ended.
pub const EOF_GRACE: Duration = Duration::from_secs(10);

/// The page: state machine plus the capabilities its effects need.
pub struct PageApp<D: Dialog> {
    state: AppState,
    effects: EffectRunner,
    dialog: D,
}

impl<D: Dialog> PageApp<D> {
    pub fn new(state: AppState, engine: EngineHandle, dialog: D) -> Self {
        Self {
            state,
            effects: EffectRunner::new(engine),
            dialog,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    /// Applies `msg`, runs its effects, and returns the new view if anything visible changed.
    pub fn dispatch(&mut self, msg: Msg) -> Option<PageViewModel> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        self.effects.run(effects, &mut self.dialog);
        was_dirty.then_some(view)
    }

    /// Delivers every completion the engine has ready.
    pub fn pump(&mut self) -> Vec<PageViewModel> {
        let mut views = Vec::new();
        while let Some(msg) = self.effects.try_next_msg() {
            views.extend(self.dispatch(msg));
        }
        views
    }

    /// Blocks until no lookup is in flight or `timeout` elapses. Returns
    /// whether the page went idle.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.state.in_flight().next().is_some() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            if let Some(msg) = self.effects.next_msg_timeout(remaining) {
                self.dispatch(msg);
            }
        }
        true
    }
}

/// Console entry point: loads config, wires the engine and runs until `quit` or EOF.
pub fn run_app() -> anyhow::Result<()> {
    let (config, config_error) = load_config(Path::new(CONFIG_FILENAME));
    page_logging::initialize(config.log_destination, LevelFilter::Info, &config.log_file);
    if let Some(err) = config_error {
        page_warn!("{}; using defaults", err);
    }
    page_info!("Starting page_app with origin {}", config.origin);

    let engine = EngineHandle::new(config.request_settings())
        .with_context(|| format!("invalid origin {:?}", config.origin))?;

    let input = Rc::new(spawn_line_reader(io::BufReader::new(io::stdin())));
    let dialog = ConsoleDialog::new(input.clone(), io::stdout());
    let mut app = PageApp::new(AppState::new(), engine, dialog);
    // Page load wires the greeting button.
    app.dispatch(Msg::BindClickAlert {
        element: ALERT_BUTTON.into(),
    });

    run_console(&mut app, &input, &mut io::stdout())?;
    page_info!("page_app exiting");
    Ok(())
}

/// Forwards each line of `reader` over a channel from a background thread.
/// The channel disconnects at EOF or on the first read error.
pub fn spawn_line_reader<R: BufRead + Send + 'static>(reader: R) -> mpsc::Receiver<String> {
    let (line_tx, line_rx) = mpsc::channel();
    thread::spawn(move || {
        for line in reader.lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });
    line_rx
}

/// Command loop: applies console lines to the page and prints visible changes.
/// On EOF, lookups still in flight get [`EOF_GRACE`] to land before returning.
pub fn run_console<D: Dialog>(
    app: &mut PageApp<D>,
    input: &mpsc::Receiver<String>,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut last_lines = Vec::new();
    writeln!(out, "commands: bind [id] | click [id] | type <title> | lookup | show | quit")?;

    loop {
        for view in app.pump() {
            print_changes(out, &view, &mut last_lines)?;
        }

        let line = match input.recv_timeout(POLL_INTERVAL) {
            Ok(line) => line,
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                if !app.settle(EOF_GRACE) {
                    page_warn!("input closed with lookups still in flight");
                }
                print_changes(out, &app.state().view(), &mut last_lines)?;
                return Ok(());
            }
        };

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(ConsoleCommand::Quit)) => return Ok(()),
            Ok(Some(ConsoleCommand::Show)) => {
                for line in render(&app.state().view()) {
                    writeln!(out, "{line}")?;
                }
            }
            Ok(Some(ConsoleCommand::Page(msg))) => {
                if let Some(view) = app.dispatch(msg) {
                    print_changes(out, &view, &mut last_lines)?;
                }
            }
            Err(err) => {
                page_warn!("{}", err);
                writeln!(out, "error: {err}")?;
            }
        }
    }
}

/// Prints the render lines not already on screen.
fn print_changes(
    out: &mut impl Write,
    view: &PageViewModel,
    last_lines: &mut Vec<String>,
) -> io::Result<()> {
    let lines = render(view);
    for line in lines.iter().filter(|line| !last_lines.contains(line)) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    *last_lines = lines;
    Ok(())
}
