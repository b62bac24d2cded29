use std::io::{self, BufRead};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use phishguard_core::{update, AppState, Msg};
use phishguard_engine::{EngineEvent, EngineHandle, EventSink, FileStorage, HistoryStore};
use scan_logging::{scan_debug, scan_info};

use super::cli::Args;
use super::effects::EffectRunner;
use super::ui::commands::{parse_line, UiCommand, HELP_TEXT};
use super::ui::render::{render_frame, render_history, render_notice};

/// Everything the main loop reacts to, from any thread.
#[derive(Debug)]
pub enum AppEvent {
    Line(String),
    InputClosed,
    Engine(EngineEvent),
    Msg(Msg),
}

struct AppEventSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for AppEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(AppEvent::Engine(event));
    }
}

pub fn run_app(args: Args) -> anyhow::Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();

    let sink: Arc<dyn EventSink> = Arc::new(AppEventSink {
        tx: event_tx.clone(),
    });
    let engine = EngineHandle::new(args.classifier_settings(), args.animation(), sink)
        .context("failed to start scan engine")?;
    let history = HistoryStore::new(Arc::new(FileStorage::new(args.history_dir.clone())));
    scan_info!("History stored in {:?}", args.history_dir);

    let runner = EffectRunner::new(engine, history, event_tx.clone());
    let mut app = App::new(runner);

    spawn_stdin_reader(event_tx);
    println!("{HELP_TEXT}");
    app.runner.load_history();
    if let Some(url) = args.url {
        app.dispatch(Msg::TestUrl(url));
    }

    let mut input_closed = false;
    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Line(line) => {
                if !app.handle_line(&line) {
                    break;
                }
            }
            AppEvent::InputClosed => {
                input_closed = true;
            }
            other => app.handle_background(other),
        }
        // Without stdin, stay only as long as a scan still has to report back.
        if input_closed && !app.state.is_busy() {
            app.drain_pending(&event_rx);
            break;
        }
    }

    scan_info!("Exiting");
    Ok(())
}

struct App {
    state: AppState,
    runner: EffectRunner,
    last_frame: String,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            last_frame: String::new(),
        }
    }

    /// Returns false when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        match parse_line(line, &self.state.view()) {
            UiCommand::Dispatch(msgs) => {
                for msg in msgs {
                    self.dispatch(msg);
                }
            }
            UiCommand::ShowHistory => print!("{}", render_history(&self.state.view().history)),
            UiCommand::ShowHelp => println!("{HELP_TEXT}"),
            UiCommand::Unknown(name) => {
                println!("{}", render_notice(&format!("Unknown command :{name} (try :help)")));
            }
            UiCommand::Quit => return false,
        }
        true
    }

    /// Applies engine events and follow-up messages; terminal input is ignored.
    fn handle_background(&mut self, event: AppEvent) {
        match event {
            AppEvent::Engine(event) => self.dispatch(map_engine_event(event)),
            AppEvent::Msg(msg) => self.dispatch(msg),
            AppEvent::Line(_) | AppEvent::InputClosed => {}
        }
    }

    /// Applies whatever is already queued, e.g. the history reload that follows
    /// a recorded scan, so it is rendered before exit.
    fn drain_pending(&mut self, event_rx: &mpsc::Receiver<AppEvent>) {
        while let Ok(event) = event_rx.try_recv() {
            self.handle_background(event);
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        scan_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        if self.state.consume_dirty() {
            self.render();
        }
        self.runner.run(effects);
    }

    fn render(&mut self) {
        let frame = render_frame(&self.state.view());
        if frame != self.last_frame {
            print!("{frame}");
            self.last_frame = frame;
        }
    }
}

fn map_engine_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::StageActivated { scan_id, stage } => Msg::StageActivated { scan_id, stage },
        EngineEvent::ScanCompleted {
            scan_id,
            elapsed,
            result,
            ..
        } => Msg::ScanCompleted {
            scan_id,
            elapsed,
            outcome: result.map_err(|err| err.to_string()),
        },
    }
}

fn spawn_stdin_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(AppEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}
