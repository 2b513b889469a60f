use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use finder_core::{update, AppState, Msg};
use finder_logging::{finder_info, finder_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui::input::{parse_line, Command, HELP};
use super::ui::render::render;

/// How often pending engine events are drained while waiting for input.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

enum Input {
    Line(String),
    Closed,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("loading configuration")?;
    finder_logging::initialize(config.log_destination, config.log_level, &config.log_file);
    for note in &config.notes {
        finder_info!("{}", note);
    }
    if config.api.credentials.app_id.is_empty() || config.api.credentials.app_key.is_empty() {
        finder_warn!("Recipe API credentials are not configured");
    }

    let runner = EffectRunner::new(config.api.clone(), config.fetch.clone());
    let (input_tx, input_rx) = mpsc::channel::<Input>();
    spawn_stdin_reader(input_tx);

    let stdout = io::stdout();
    let mut app = App {
        state: AppState::new(),
        runner,
        out: stdout.lock(),
    };
    app.print(&render(&app.state.view()))?;
    app.print(HELP)?;

    let mut quit_requested = false;
    loop {
        match input_rx.recv_timeout(POLL_INTERVAL) {
            Ok(Input::Line(line)) => match parse_line(&line) {
                Some(Command::Dispatch(msg)) => app.dispatch(msg)?,
                Some(Command::Show) => app.print(&render(&app.state.view()))?,
                Some(Command::Help) => app.print(HELP)?,
                Some(Command::Quit) => quit_requested = true,
                Some(Command::Unknown(text)) => {
                    app.print(&format!("Unrecognised input {text:?}\n{HELP}"))?
                }
                None => {}
            },
            Ok(Input::Closed) => quit_requested = true,
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                quit_requested = true;
                thread::sleep(POLL_INTERVAL);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }

        for msg in app.runner.poll() {
            app.dispatch(msg)?;
        }

        // Let an in-flight search land before leaving.
        if quit_requested && !app.state.is_loading() {
            break;
        }
    }

    finder_info!("Recipe finder exiting");
    Ok(())
}

struct App<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
}

impl<W: Write> App<W> {
    fn dispatch(&mut self, msg: Msg) -> anyhow::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;
        self.runner.enqueue(effects);

        if was_dirty {
            self.print(&render(&view))?;
        }
        Ok(())
    }

    fn print(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{text}").context("writing to stdout")?;
        self.out.flush().context("flushing stdout")?;
        Ok(())
    }
}

fn spawn_stdin_reader(tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(Input::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    finder_warn!("Reading input failed: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(Input::Closed);
    });
}
