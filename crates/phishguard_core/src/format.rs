use std::time::Duration;

/// Renders a phishing probability in [0, 1] as a percentage with one decimal.
pub fn format_probability(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Renders an elapsed scan time in seconds with two decimals.
pub fn format_scan_time(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}

/// Shortens `url` to at most `max_chars` characters for list display.
pub fn truncate_url(url: &str, max_chars: usize) -> String {
    const ELLIPSIS: &str = "...";
    if url.chars().count() <= max_chars {
        return url.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = url.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}
