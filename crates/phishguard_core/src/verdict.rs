/// Classification outcome for a URL.
///
/// Labels other than `PHISHING` and `SUSPICIOUS` (including the service's
/// `LEGITIMATE (...)` variants) map to [`Verdict::Safe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Phishing,
    Suspicious,
    Safe,
}

/// Card theme. Suspicious shares the danger theme with phishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Danger,
    Success,
}

/// Per-verdict accent, also used as the history row class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Danger,
    Suspicious,
    Safe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub theme: Theme,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

impl Verdict {
    /// Label recorded when the service omits `result`.
    pub const DEFAULT_LABEL: &'static str = "SAFE";

    pub fn from_label(label: &str) -> Self {
        match label {
            "PHISHING" => Verdict::Phishing,
            "SUSPICIOUS" => Verdict::Suspicious,
            _ => Verdict::Safe,
        }
    }

    pub fn presentation(self) -> Presentation {
        match self {
            Verdict::Phishing => Presentation {
                theme: Theme::Danger,
                icon: "fa-radiation",
                title: "Phishing Detected",
                description: "High-risk threat detected. Do not visit this site.",
                tone: Tone::Danger,
            },
            Verdict::Suspicious => Presentation {
                theme: Theme::Danger,
                icon: "fa-exclamation-triangle",
                title: "Suspicious URL",
                description: "This URL shows suspicious patterns. Proceed with caution.",
                tone: Tone::Suspicious,
            },
            Verdict::Safe => Presentation {
                theme: Theme::Success,
                icon: "fa-shield-check",
                title: "Safe to Access",
                description: "This URL checks out. No Phishing threats detected.",
                tone: Tone::Safe,
            },
        }
    }

    pub fn tone(self) -> Tone {
        self.presentation().tone
    }
}

impl Theme {
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Danger => "danger",
            Theme::Success => "success",
        }
    }
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Danger => "danger",
            Tone::Suspicious => "suspicious",
            Tone::Safe => "safe",
        }
    }
}

/// Decoded answer of the classification service, defaults already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    /// Raw verdict label as sent by the service (`"SAFE"` when absent).
    pub label: String,
    /// Phishing likelihood in [0, 1].
    pub probability: f64,
    pub risk_factors: Vec<String>,
}

impl ScanResult {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_label(&self.label)
    }
}
