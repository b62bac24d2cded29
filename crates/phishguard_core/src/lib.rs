//! PhishGuard core: pure scan/history state machine and view-model helpers.
mod effect;
mod format;
mod history;
mod msg;
mod state;
mod update;
mod verdict;
mod view_model;

pub use effect::Effect;
pub use format::{format_probability, format_scan_time, truncate_url};
pub use history::{prepend_bounded, HistoryEntry, HISTORY_LIMIT};
pub use msg::Msg;
pub use state::{AppState, ScanId, ScanStage};
pub use update::{update, EMPTY_URL_NOTICE};
pub use verdict::{Presentation, ScanResult, Theme, Tone, Verdict};
pub use view_model::{
    AppViewModel, ButtonView, HistoryRowView, ResultCardView, ResultView, StageView,
    CLEAR_HISTORY_PROMPT, EMPTY_HISTORY_TEXT, ERROR_TITLE, SCAN_LABEL_BUSY, SCAN_LABEL_IDLE,
    URL_DISPLAY_CHARS,
};
