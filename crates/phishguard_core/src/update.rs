use crate::{AppState, Effect, Msg, ScanResult, Verdict};

/// Notice shown when a scan is requested with nothing to scan.
pub const EMPTY_URL_NOTICE: &str = "Please enter a URL";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::ScanClicked => request_scan(&mut state),
        Msg::TestUrl(url) => {
            if state.is_busy() {
                return (state, Vec::new());
            }
            state.set_input(url);
            request_scan(&mut state)
        }
        Msg::ClearInputClicked => {
            state.set_input(String::new());
            state.clear_result();
            Vec::new()
        }
        Msg::ScanAnotherClicked => {
            if !state.is_busy() {
                state.set_input(String::new());
                state.clear_result();
            }
            Vec::new()
        }
        Msg::HistoryLoaded(entries) => {
            state.set_history(entries);
            Vec::new()
        }
        Msg::StageActivated { scan_id, stage } => {
            if state.is_current_scan(scan_id) {
                state.activate_stage(stage);
            }
            Vec::new()
        }
        Msg::ScanCompleted {
            scan_id,
            elapsed,
            outcome,
        } => {
            if !state.is_current_scan(scan_id) {
                return (state, Vec::new());
            }
            let url = state.finish_scan().unwrap_or_default();
            match outcome {
                Ok(result) => {
                    let effect = history_effect(url, &result);
                    state.show_verdict(result, elapsed);
                    vec![effect]
                }
                Err(message) => {
                    state.show_error(message);
                    Vec::new()
                }
            }
        }
        Msg::ClearHistoryClicked => {
            state.set_confirm_clear_pending(true);
            Vec::new()
        }
        Msg::ClearHistoryConfirmed(confirmed) => {
            if !state.confirm_clear_pending() {
                return (state, Vec::new());
            }
            state.set_confirm_clear_pending(false);
            if confirmed {
                vec![Effect::ClearHistory]
            } else {
                Vec::new()
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn request_scan(state: &mut AppState) -> Vec<Effect> {
    // The scan control is disabled while busy; mirror that here so programmatic
    // triggers cannot start an overlapping scan.
    if state.is_busy() {
        return Vec::new();
    }
    let url = state.input().trim().to_string();
    if url.is_empty() {
        return vec![Effect::ShowNotice(EMPTY_URL_NOTICE.to_string())];
    }
    let scan_id = state.begin_scan(url.clone());
    vec![Effect::StartScan { scan_id, url }]
}

fn history_effect(url: String, result: &ScanResult) -> Effect {
    let label = if result.label.is_empty() {
        Verdict::DEFAULT_LABEL.to_string()
    } else {
        result.label.clone()
    };
    Effect::RecordHistory {
        url,
        result: label,
        probability: result.probability * 100.0,
    }
}
