use std::fmt::Write;

use phishguard_core::{
    AppViewModel, HistoryRowView, ResultCardView, ResultView, EMPTY_HISTORY_TEXT,
};

const RULE: &str = "------------------------------------------------------------";

/// Renders the whole screen for the current view.
///
/// While a scan runs only the button and stage list are shown; otherwise the
/// result card (if any) and the history list. A pending prompt always shows.
pub fn render_frame(view: &AppViewModel) -> String {
    let mut out = String::new();

    let field = if view.input.is_empty() {
        "<empty>".to_string()
    } else {
        view.input.clone()
    };
    let button = if view.scan_button.enabled {
        format!("[{}]", view.scan_button.label)
    } else {
        format!("[{}] (disabled)", view.scan_button.label)
    };
    let _ = writeln!(out, "URL: {field}  {button}");

    if view.loading_visible {
        for stage in &view.stages {
            let mark = if stage.active { "*" } else { " " };
            let _ = writeln!(out, "  [{mark}] {}", stage.label);
        }
    } else {
        if let Some(result) = &view.result {
            out.push_str(&render_result(result));
        }
        out.push_str(&render_history(&view.history));
    }

    // The next line typed answers this prompt, so it shows even mid-scan.
    if let Some(prompt) = view.confirm_clear_prompt {
        let _ = writeln!(out, "{prompt} [y/N]");
    }
    out
}

pub fn render_result(result: &ResultView) -> String {
    match result {
        ResultView::Verdict(card) => render_card(card),
        ResultView::Error { title, message } => {
            format!("{RULE}\n{title} [danger]\n{message}\n{RULE}\n")
        }
    }
}

fn render_card(card: &ResultCardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "{} [{}/{}]",
        card.title,
        card.theme.css_class(),
        card.tone.css_class()
    );
    let _ = writeln!(out, "{}", card.description);
    let _ = writeln!(
        out,
        "  Risk Score: {}    Scan Time: {}",
        card.risk_score, card.scan_time
    );
    if !card.risk_factors.is_empty() {
        let _ = writeln!(out, "  Risk Factors Detected:");
        for factor in &card.risk_factors {
            let _ = writeln!(out, "    x {factor}");
        }
    }
    let _ = writeln!(out, "  (:again to scan another)");
    let _ = writeln!(out, "{RULE}");
    out
}

pub fn render_history(rows: &[HistoryRowView]) -> String {
    let mut out = String::from("Recent Scans\n");
    if rows.is_empty() {
        let _ = writeln!(out, "  {EMPTY_HISTORY_TEXT}");
        return out;
    }
    for row in rows {
        let _ = writeln!(
            out,
            "  {:<10} {:<48} {:<12} {}",
            format!("[{}]", row.tone.css_class()),
            row.display_url,
            row.result,
            row.time
        );
        if row.display_url != row.url {
            let _ = writeln!(out, "             {}", row.url);
        }
    }
    out
}

pub fn render_notice(text: &str) -> String {
    format!("! {text}")
}
