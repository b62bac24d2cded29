use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the URL input field.
    InputChanged(String),
    /// User pressed the scan control or Enter in the URL field.
    ScanClicked,
    /// Programmatic shortcut: pre-fill the field and scan immediately.
    TestUrl(String),
    /// User pressed the clear-input control.
    ClearInputClicked,
    /// User dismissed the current result to start over.
    ScanAnotherClicked,
    /// Persisted history was (re)loaded by the store.
    HistoryLoaded(Vec<crate::HistoryEntry>),
    /// Engine reached the next animation stage.
    StageActivated {
        scan_id: crate::ScanId,
        stage: crate::ScanStage,
    },
    /// Engine finished a scan, successfully or not.
    ScanCompleted {
        scan_id: crate::ScanId,
        elapsed: Duration,
        outcome: Result<crate::ScanResult, String>,
    },
    /// User asked to clear the history; a confirmation prompt follows.
    ClearHistoryClicked,
    /// Answer to the clear-history prompt.
    ClearHistoryConfirmed(bool),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
