use crate::ScanId;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Blocking user-facing notice (e.g. empty input).
    ShowNotice(String),
    /// Run the progress animation and classify `url`.
    StartScan { scan_id: ScanId, url: String },
    /// Persist a finished scan; `probability` is already a percentage.
    RecordHistory {
        url: String,
        result: String,
        probability: f64,
    },
    /// Delete the whole persisted history.
    ClearHistory,
}
