use serde::{Deserialize, Serialize};

use crate::Verdict;

/// Maximum number of entries kept in the scan history.
pub const HISTORY_LIMIT: usize = 10;

/// One persisted past scan. `probability` is a display percentage only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub result: String,
    #[serde(default)]
    pub probability: f64,
    #[serde(default)]
    pub time: String,
}

impl HistoryEntry {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_label(&self.result)
    }
}

/// Inserts `entry` as the newest item and drops whatever falls past [`HISTORY_LIMIT`].
pub fn prepend_bounded(history: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    history.insert(0, entry);
    history.truncate(HISTORY_LIMIT);
}
