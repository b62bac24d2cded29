use std::sync::Once;
use std::time::Duration;

use phishguard_core::{
    update, AppState, Effect, Msg, ResultView, ScanId, ScanResult, ScanStage, Theme, Verdict,
    EMPTY_URL_NOTICE, ERROR_TITLE, SCAN_LABEL_BUSY, SCAN_LABEL_IDLE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scan_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::ScanClicked)
}

fn started_scan(effects: &[Effect]) -> ScanId {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::StartScan { scan_id, .. } => Some(*scan_id),
            _ => None,
        })
        .expect("start scan effect")
}

fn complete(
    state: AppState,
    scan_id: ScanId,
    outcome: Result<ScanResult, String>,
) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::ScanCompleted {
            scan_id,
            elapsed: Duration::from_millis(2040),
            outcome,
        },
    )
}

fn result(label: &str, probability: f64, factors: &[&str]) -> ScanResult {
    ScanResult {
        label: label.to_string(),
        probability,
        risk_factors: factors.iter().map(|f| f.to_string()).collect(),
    }
}

#[test]
fn empty_or_blank_input_only_shows_notice() {
    init_logging();
    for input in ["", "   ", "\t\n "] {
        let (mut before, _) = update(AppState::new(), Msg::InputChanged(input.to_string()));
        before.consume_dirty();

        let (mut next, effects) = update(before.clone(), Msg::ScanClicked);

        assert_eq!(effects, vec![Effect::ShowNotice(EMPTY_URL_NOTICE.to_string())]);
        assert_eq!(next, before);
        assert!(!next.is_busy());
        assert!(!next.consume_dirty());
    }
}

#[test]
fn scan_enters_busy_state_with_trimmed_url() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "  http://example.com  ");

    assert_eq!(
        effects,
        vec![Effect::StartScan {
            scan_id: 1,
            url: "http://example.com".to_string(),
        }]
    );
    let view = state.view();
    assert!(state.is_busy());
    assert!(view.loading_visible);
    assert!(!view.scan_button.enabled);
    assert_eq!(view.scan_button.label, SCAN_LABEL_BUSY);
    assert!(view.result.is_none());
    assert!(view.stages.iter().all(|stage| !stage.active));
}

#[test]
fn stages_activate_in_order_and_reset_on_completion() {
    init_logging();
    let (mut state, effects) = submit(AppState::new(), "http://example.com");
    let scan_id = started_scan(&effects);

    for stage in ScanStage::ALL {
        let (next, effects) = update(state, Msg::StageActivated { scan_id, stage });
        assert!(effects.is_empty());
        state = next;
    }
    assert!(state.view().stages.iter().all(|stage| stage.active));

    let (state, _) = complete(state, scan_id, Ok(result("SAFE", 0.02, &[])));
    let view = state.view();
    assert!(view.stages.iter().all(|stage| !stage.active));
    assert!(view.scan_button.enabled);
    assert_eq!(view.scan_button.label, SCAN_LABEL_IDLE);
    assert!(!view.loading_visible);
}

#[test]
fn safe_result_renders_card_and_records_history() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "http://example.com");
    let scan_id = started_scan(&effects);

    let (state, effects) = complete(state, scan_id, Ok(result("SAFE", 0.02, &[])));

    assert_eq!(
        effects,
        vec![Effect::RecordHistory {
            url: "http://example.com".to_string(),
            result: "SAFE".to_string(),
            probability: 2.0,
        }]
    );
    let Some(ResultView::Verdict(card)) = state.view().result else {
        panic!("expected verdict card");
    };
    assert_eq!(card.title, "Safe to Access");
    assert_eq!(card.theme, Theme::Success);
    assert_eq!(card.risk_score, "2.0%");
    assert_eq!(card.scan_time, "2.04s");
    assert!(card.risk_factors.is_empty());
}

#[test]
fn phishing_result_lists_risk_factors() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "http://bad-site.test");
    let scan_id = started_scan(&effects);

    let (state, effects) = complete(
        state,
        scan_id,
        Ok(result("PHISHING", 0.96, &["IP-based domain", "suspicious TLD"])),
    );

    assert_eq!(effects.len(), 1);
    let Some(ResultView::Verdict(card)) = state.view().result else {
        panic!("expected verdict card");
    };
    assert_eq!(card.verdict, Verdict::Phishing);
    assert_eq!(card.title, "Phishing Detected");
    assert_eq!(card.theme, Theme::Danger);
    assert_eq!(card.risk_score, "96.0%");
    assert_eq!(card.risk_factors, vec!["IP-based domain", "suspicious TLD"]);
}

#[test]
fn suspicious_result_uses_its_own_title() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "http://odd.test");
    let scan_id = started_scan(&effects);

    let (state, _) = complete(state, scan_id, Ok(result("SUSPICIOUS", 0.55, &[])));

    let Some(ResultView::Verdict(card)) = state.view().result else {
        panic!("expected verdict card");
    };
    assert_eq!(card.title, "Suspicious URL");
    assert_eq!(card.theme, Theme::Danger);
}

#[test]
fn unknown_label_falls_back_to_safe_card() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "https://github.com");
    let scan_id = started_scan(&effects);

    let (state, effects) = complete(
        state,
        scan_id,
        Ok(result("LEGITIMATE (WHITELISTED)", 0.95, &[])),
    );

    let Some(ResultView::Verdict(card)) = state.view().result else {
        panic!("expected verdict card");
    };
    assert_eq!(card.title, "Safe to Access");
    assert_eq!(card.risk_score, "95.0%");
    assert!(matches!(
        &effects[..],
        [Effect::RecordHistory { result, .. }] if result == "LEGITIMATE (WHITELISTED)"
    ));
}

#[test]
fn failure_renders_error_card_and_skips_history() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "http://example.com");
    let scan_id = started_scan(&effects);

    let (state, effects) = complete(state, scan_id, Err("connection refused".to_string()));

    assert!(effects.is_empty());
    let view = state.view();
    assert!(view.scan_button.enabled);
    assert_eq!(view.scan_button.label, SCAN_LABEL_IDLE);
    assert!(view.stages.iter().all(|stage| !stage.active));
    assert_eq!(
        view.result,
        Some(ResultView::Error {
            title: ERROR_TITLE,
            message: "connection refused".to_string(),
        })
    );
    assert!(view.history.is_empty());
}

#[test]
fn overlapping_scan_requests_are_ignored() {
    init_logging();
    let (state, _) = submit(AppState::new(), "http://first.test");

    let (state, effects) = update(state, Msg::ScanClicked);
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::TestUrl("http://second.test".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.input(), "http://first.test");
}

#[test]
fn stale_engine_events_are_ignored() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "http://example.com");
    let scan_id = started_scan(&effects);

    let (state, effects) = update(
        state,
        Msg::StageActivated {
            scan_id: scan_id + 7,
            stage: ScanStage::UrlAnalysis,
        },
    );
    assert!(effects.is_empty());
    assert!(state.view().stages.iter().all(|stage| !stage.active));

    let (state, effects) = complete(state, scan_id + 7, Ok(result("SAFE", 0.0, &[])));
    assert!(effects.is_empty());
    assert!(state.is_busy());
}

#[test]
fn test_url_prefills_and_scans() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::TestUrl("http://secure-login-paypal.com/verify".to_string()),
    );

    assert_eq!(state.input(), "http://secure-login-paypal.com/verify");
    assert!(state.view().clear_input_visible);
    assert_eq!(
        effects,
        vec![Effect::StartScan {
            scan_id: 1,
            url: "http://secure-login-paypal.com/verify".to_string(),
        }]
    );
}

#[test]
fn new_scan_clears_previous_result() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "http://a.test");
    let first = started_scan(&effects);
    let (state, _) = complete(state, first, Err("boom".to_string()));
    assert!(state.view().result.is_some());

    let (state, effects) = update(state, Msg::ScanClicked);
    let second = started_scan(&effects);

    assert!(second > first);
    assert!(state.view().result.is_none());
}

#[test]
fn clear_input_hides_result_and_clear_control() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "http://a.test");
    let scan_id = started_scan(&effects);
    let (state, _) = complete(state, scan_id, Ok(result("SAFE", 0.1, &[])));

    let (state, effects) = update(state, Msg::ClearInputClicked);

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.input, "");
    assert!(!view.clear_input_visible);
    assert!(view.result.is_none());
}

#[test]
fn scan_another_resets_form() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "http://a.test");
    let scan_id = started_scan(&effects);
    let (state, _) = complete(state, scan_id, Ok(result("SAFE", 0.1, &[])));

    let (state, _) = update(state, Msg::ScanAnotherClicked);

    assert_eq!(state.input(), "");
    assert!(state.view().result.is_none());
}
