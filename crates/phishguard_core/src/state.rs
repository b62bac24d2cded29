use std::time::Duration;

use crate::view_model::{
    AppViewModel, ButtonView, HistoryRowView, ResultCardView, ResultView, StageView,
    CLEAR_HISTORY_PROMPT, ERROR_TITLE, SCAN_LABEL_BUSY, SCAN_LABEL_IDLE, URL_DISPLAY_CHARS,
};
use crate::{format_probability, format_scan_time, truncate_url, HistoryEntry, ScanResult};

pub type ScanId = u64;

/// Cosmetic progress stages shown while a scan is in flight, in activation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanStage {
    UrlAnalysis,
    DomainReputation,
    ModelInference,
}

impl ScanStage {
    pub const ALL: [ScanStage; 3] = [
        ScanStage::UrlAnalysis,
        ScanStage::DomainReputation,
        ScanStage::ModelInference,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScanStage::UrlAnalysis => "Analyzing URL structure",
            ScanStage::DomainReputation => "Checking domain reputation",
            ScanStage::ModelInference => "Running ML model",
        }
    }

    fn index(self) -> usize {
        match self {
            ScanStage::UrlAnalysis => 0,
            ScanStage::DomainReputation => 1,
            ScanStage::ModelInference => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ResultPanel {
    Verdict { result: ScanResult, elapsed: Duration },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq)]
struct InFlightScan {
    id: ScanId,
    url: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    input: String,
    in_flight: Option<InFlightScan>,
    next_scan_id: ScanId,
    active_stages: [bool; 3],
    result: Option<ResultPanel>,
    history: Vec<HistoryEntry>,
    confirm_clear_pending: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// True while a scan is in flight; the scan control is disabled.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn view(&self) -> AppViewModel {
        let busy = self.is_busy();
        AppViewModel {
            input: self.input.clone(),
            clear_input_visible: !self.input.is_empty(),
            scan_button: ButtonView {
                enabled: !busy,
                label: if busy { SCAN_LABEL_BUSY } else { SCAN_LABEL_IDLE },
            },
            loading_visible: busy,
            stages: ScanStage::ALL
                .iter()
                .map(|stage| StageView {
                    stage: *stage,
                    label: stage.label(),
                    active: self.active_stages[stage.index()],
                })
                .collect(),
            result: self.result.as_ref().map(result_view),
            history: self.history.iter().map(history_row).collect(),
            confirm_clear_prompt: self.confirm_clear_pending.then_some(CLEAR_HISTORY_PROMPT),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, input: String) {
        self.input = input;
        self.mark_dirty();
    }

    pub(crate) fn clear_result(&mut self) {
        if self.result.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Enters the busy state and returns the id of the new scan.
    pub(crate) fn begin_scan(&mut self, url: String) -> ScanId {
        self.next_scan_id += 1;
        let id = self.next_scan_id;
        self.in_flight = Some(InFlightScan { id, url });
        self.result = None;
        self.active_stages = [false; 3];
        self.mark_dirty();
        id
    }

    pub(crate) fn is_current_scan(&self, scan_id: ScanId) -> bool {
        self.in_flight.as_ref().is_some_and(|scan| scan.id == scan_id)
    }

    pub(crate) fn activate_stage(&mut self, stage: ScanStage) {
        self.active_stages[stage.index()] = true;
        self.mark_dirty();
    }

    /// Leaves the busy state and resets every stage. Returns the scanned URL.
    pub(crate) fn finish_scan(&mut self) -> Option<String> {
        let finished = self.in_flight.take();
        self.active_stages = [false; 3];
        self.mark_dirty();
        finished.map(|scan| scan.url)
    }

    pub(crate) fn show_verdict(&mut self, result: ScanResult, elapsed: Duration) {
        self.result = Some(ResultPanel::Verdict { result, elapsed });
        self.mark_dirty();
    }

    pub(crate) fn show_error(&mut self, message: String) {
        self.result = Some(ResultPanel::Error { message });
        self.mark_dirty();
    }

    pub(crate) fn set_history(&mut self, history: Vec<HistoryEntry>) {
        self.history = history;
        self.mark_dirty();
    }

    pub(crate) fn confirm_clear_pending(&self) -> bool {
        self.confirm_clear_pending
    }

    pub(crate) fn set_confirm_clear_pending(&mut self, pending: bool) {
        self.confirm_clear_pending = pending;
        self.mark_dirty();
    }
}

fn result_view(panel: &ResultPanel) -> ResultView {
    match panel {
        ResultPanel::Verdict { result, elapsed } => {
            let verdict = result.verdict();
            let presentation = verdict.presentation();
            ResultView::Verdict(ResultCardView {
                verdict,
                theme: presentation.theme,
                icon: presentation.icon,
                title: presentation.title,
                description: presentation.description,
                tone: presentation.tone,
                risk_score: format_probability(result.probability),
                scan_time: format_scan_time(*elapsed),
                risk_factors: result.risk_factors.clone(),
            })
        }
        ResultPanel::Error { message } => ResultView::Error {
            title: ERROR_TITLE,
            message: message.clone(),
        },
    }
}

fn history_row(entry: &HistoryEntry) -> HistoryRowView {
    HistoryRowView {
        url: entry.url.clone(),
        display_url: truncate_url(&entry.url, URL_DISPLAY_CHARS),
        result: entry.result.clone(),
        time: entry.time.clone(),
        tone: entry.verdict().tone(),
    }
}
