use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use chrono::Utc;
use directory_core::{update, AppState, Msg};
use directory_engine::{EngineConfig, EngineHandle};
use directory_logging::{directory_info, directory_warn};

use super::commands::{parse_command, Command, HELP};
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::render::render;

const TICK_INTERVAL: Duration = Duration::from_millis(75);

enum Input {
    Line(String),
    Tick,
    Closed,
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::from_env());

    let config = EngineConfig::from_env().context("reading directory configuration")?;
    if config.repository.is_none() {
        directory_info!("No listing repository configured; showing bundled listings");
    }
    let save_wait = config.http.connect_timeout + config.http.request_timeout;
    let runner = EffectRunner::new(EngineHandle::new(config));

    // Local ids must not repeat across sessions either.
    let seed = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(1);
    let mut shell = Shell {
        state: AppState::new().with_local_id_seed(seed),
        runner,
    };

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    spawn_stdin_reader(input_tx.clone());
    // Background tick to pick up engine results while the prompt waits.
    thread::spawn(move || {
        while input_tx.send(Input::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    println!("{HELP}\n");
    shell.print_view()?;
    shell.dispatch(Msg::SessionStarted)?;

    while let Ok(input) = input_rx.recv() {
        match input {
            Input::Tick => shell.dispatch(Msg::Tick)?,
            Input::Line(line) => match parse_command(&line) {
                Ok(Command::Dispatch(msg)) => shell.dispatch(msg)?,
                Ok(Command::Show) => shell.print_view()?,
                Ok(Command::Help) => shell.say(HELP)?,
                Ok(Command::Quit) => break,
                Err(err) => shell.say(&err.to_string())?,
            },
            Input::Closed => break,
        }
        shell.pump_engine()?;
    }

    let pending = shell.state.pending_saves();
    if pending > 0 {
        directory_info!("Waiting up to {:?} for {} outstanding saves", save_wait, pending);
        shell.finish_pending_saves(save_wait)?;
    }
    let unsaved = shell.state.pending_saves();
    if unsaved > 0 {
        directory_warn!("Directory session ended with {} saves outstanding", unsaved);
    } else {
        directory_info!("Directory session ended");
    }
    Ok(())
}

struct Shell {
    state: AppState,
    runner: EffectRunner,
}

impl Shell {
    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.run(effects);
        let was_dirty = state.consume_dirty();
        self.state = state;
        if was_dirty {
            self.print_view()?;
        }
        Ok(())
    }

    fn pump_engine(&mut self) -> io::Result<()> {
        for msg in self.runner.drain() {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    /// Applies save results until none are pending or `limit` has passed.
    fn finish_pending_saves(&mut self, limit: Duration) -> io::Result<()> {
        let deadline = Instant::now() + limit;
        while self.state.pending_saves() > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            match self.runner.recv_timeout(remaining) {
                Some(msg) => self.dispatch(msg)?,
                None => break,
            }
        }
        Ok(())
    }

    fn print_view(&self) -> io::Result<()> {
        self.say(&render(&self.state.view()))
    }

    fn say(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{text}\n> ")?;
        stdout.flush()
    }
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if input_tx.send(Input::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    directory_warn!("Could not read from stdin: {}", err);
                    break;
                }
            }
        }
        let _ = input_tx.send(Input::Closed);
    });
}
