use crate::{ScanStage, Theme, Tone, Verdict};

pub const SCAN_LABEL_IDLE: &str = "Scan Now";
pub const SCAN_LABEL_BUSY: &str = "Scanning...";
pub const ERROR_TITLE: &str = "Error";
pub const EMPTY_HISTORY_TEXT: &str = "No recent scans yet.";
pub const CLEAR_HISTORY_PROMPT: &str = "Clear all scan history?";
/// Width of the URL column in the history list; the full URL stays in `url`.
pub const URL_DISPLAY_CHARS: usize = 48;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub clear_input_visible: bool,
    pub scan_button: ButtonView,
    pub loading_visible: bool,
    pub stages: Vec<StageView>,
    pub result: Option<ResultView>,
    /// Newest first. Empty means the placeholder is shown.
    pub history: Vec<HistoryRowView>,
    pub confirm_clear_prompt: Option<&'static str>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub enabled: bool,
    pub label: &'static str,
}

impl Default for ButtonView {
    fn default() -> Self {
        Self {
            enabled: true,
            label: SCAN_LABEL_IDLE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageView {
    pub stage: ScanStage,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Verdict(ResultCardView),
    Error { title: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultCardView {
    pub verdict: Verdict,
    pub theme: Theme,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
    pub risk_score: String,
    pub scan_time: String,
    /// Empty means no risk-factor section is rendered.
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    /// Full URL, shown as the hover tooltip.
    pub url: String,
    pub display_url: String,
    pub result: String,
    pub time: String,
    pub tone: Tone,
}
