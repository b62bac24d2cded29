use phishguard_core::{
    prepend_bounded, update, AppState, Effect, HistoryEntry, Msg, Tone, CLEAR_HISTORY_PROMPT,
    HISTORY_LIMIT, URL_DISPLAY_CHARS,
};

fn entry(url: &str, result: &str) -> HistoryEntry {
    HistoryEntry {
        url: url.to_string(),
        result: result.to_string(),
        probability: 12.5,
        time: "09:41".to_string(),
    }
}

#[test]
fn eleventh_entry_evicts_the_oldest() {
    let mut history = Vec::new();
    for i in 0..HISTORY_LIMIT {
        prepend_bounded(&mut history, entry(&format!("http://{i}.test"), "SAFE"));
    }
    assert_eq!(history.len(), HISTORY_LIMIT);
    assert_eq!(history.last().unwrap().url, "http://0.test");

    prepend_bounded(&mut history, entry("http://newest.test", "PHISHING"));

    assert_eq!(history.len(), HISTORY_LIMIT);
    assert_eq!(history[0].url, "http://newest.test");
    assert_eq!(history.last().unwrap().url, "http://1.test");
    assert!(history.iter().all(|e| e.url != "http://0.test"));
}

#[test]
fn entries_decode_without_optional_fields() {
    let decoded: HistoryEntry =
        serde_json::from_str(r#"{"url":"http://a.test","result":"SAFE"}"#).unwrap();
    assert_eq!(decoded.probability, 0.0);
    assert_eq!(decoded.time, "");
}

#[test]
fn loaded_history_renders_rows_with_tones() {
    let history = vec![
        entry("http://a.test", "PHISHING"),
        entry("http://b.test", "SUSPICIOUS"),
        entry("http://c.test", "SAFE"),
    ];
    let (state, effects) = update(AppState::new(), Msg::HistoryLoaded(history));

    assert!(effects.is_empty());
    let tones: Vec<_> = state.view().history.iter().map(|row| row.tone).collect();
    assert_eq!(tones, vec![Tone::Danger, Tone::Suspicious, Tone::Safe]);
}

#[test]
fn long_urls_keep_full_text_for_tooltip() {
    let long = format!("http://example.test/{}", "a".repeat(100));
    let (state, _) = update(
        AppState::new(),
        Msg::HistoryLoaded(vec![entry(&long, "SAFE")]),
    );

    let row = &state.view().history[0];
    assert_eq!(row.url, long);
    assert_eq!(row.display_url.chars().count(), URL_DISPLAY_CHARS);
}

#[test]
fn empty_history_renders_placeholder() {
    assert!(AppState::new().view().history.is_empty());
}

#[test]
fn clear_requires_confirmation() {
    let (state, _) = update(
        AppState::new(),
        Msg::HistoryLoaded(vec![entry("http://a.test", "SAFE")]),
    );

    let (state, effects) = update(state, Msg::ClearHistoryClicked);
    assert!(effects.is_empty());
    assert_eq!(state.view().confirm_clear_prompt, Some(CLEAR_HISTORY_PROMPT));

    let (state, effects) = update(state, Msg::ClearHistoryConfirmed(false));
    assert!(effects.is_empty());
    assert_eq!(state.view().confirm_clear_prompt, None);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn confirmed_clear_emits_effect() {
    let (state, _) = update(
        AppState::new(),
        Msg::HistoryLoaded(vec![entry("http://a.test", "SAFE")]),
    );
    let (state, _) = update(state, Msg::ClearHistoryClicked);

    let (state, effects) = update(state, Msg::ClearHistoryConfirmed(true));
    assert_eq!(effects, vec![Effect::ClearHistory]);

    let (state, _) = update(state, Msg::HistoryLoaded(Vec::new()));
    assert!(state.view().history.is_empty());
}

#[test]
fn unsolicited_confirmation_is_ignored() {
    let (_state, effects) = update(AppState::new(), Msg::ClearHistoryConfirmed(true));
    assert!(effects.is_empty());
}
