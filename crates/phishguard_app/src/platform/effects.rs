use std::sync::mpsc;

use phishguard_core::{Effect, Msg};
use phishguard_engine::{EngineHandle, HistoryStore};
use scan_logging::scan_info;

use super::app::AppEvent;
use super::ui::render::render_notice;

/// Executes core effects against the engine and the history store.
///
/// Follow-up messages go back through the app event channel.
pub struct EffectRunner {
    engine: EngineHandle,
    history: HistoryStore,
    event_tx: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        history: HistoryStore,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            engine,
            history,
            event_tx,
        }
    }

    /// Reads the persisted history so the first render shows it.
    pub fn load_history(&self) {
        self.send(Msg::HistoryLoaded(self.history.entries()));
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ShowNotice(text) => {
                    println!("{}", render_notice(&text));
                }
                Effect::StartScan { scan_id, url } => {
                    scan_info!("StartScan scan_id={} url_len={} url={}", scan_id, url.len(), url);
                    self.engine.scan(scan_id, url);
                }
                Effect::RecordHistory {
                    url,
                    result,
                    probability,
                } => {
                    let entries = self.history.record(&url, &result, probability);
                    self.send(Msg::HistoryLoaded(entries));
                }
                Effect::ClearHistory => {
                    self.history.clear();
                    self.send(Msg::HistoryLoaded(self.history.entries()));
                }
            }
        }
    }

    fn send(&self, msg: Msg) {
        let _ = self.event_tx.send(AppEvent::Msg(msg));
    }
}
