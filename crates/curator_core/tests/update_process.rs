use std::sync::Once;

use curator_core::{update, AppState, ContentItem, Effect, Msg, NO_VALID_URLS_ERROR};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ui_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::ProcessInputChanged(input.to_string()));
    update(state, Msg::ProcessSubmitted)
}

#[test]
fn only_trimmed_http_lines_survive_filtering() {
    init_logging();
    let state = AppState::new();
    let input = "  https://a.example.com \nnot a url\nftp://files.example.com\n\n http://b.example.com\n";

    let (next, effects) = submit(state, input);

    assert_eq!(
        effects,
        vec![Effect::ProcessUrls {
            urls: vec![
                "https://a.example.com".to_string(),
                "http://b.example.com".to_string(),
            ],
        }]
    );
    assert!(next.view().process.busy);
    assert_eq!(next.view().process.error, None);
}

#[test]
fn zero_valid_urls_blocks_the_request() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = submit(state, "example.com\n\n   \nnope");

    assert!(effects.is_empty());
    let view = next.view();
    assert!(!view.process.busy);
    assert_eq!(view.process.error.as_deref(), Some(NO_VALID_URLS_ERROR));
}

#[test]
fn input_order_is_preserved() {
    init_logging();
    let state = AppState::new();
    let input = "http://z.example.com\nhttp://a.example.com\nhttp://m.example.com";

    let (_next, effects) = submit(state, input);

    assert_eq!(
        effects,
        vec![Effect::ProcessUrls {
            urls: vec![
                "http://z.example.com".to_string(),
                "http://a.example.com".to_string(),
                "http://m.example.com".to_string(),
            ],
        }]
    );
}

#[test]
fn completion_clears_busy_on_both_arms() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit(state, "https://a.example.com");
    assert!(state.view().process.busy);

    let item = ContentItem {
        title: "A".to_string(),
        ..ContentItem::default()
    };
    let (ok_state, effects) = update(state.clone(), Msg::ProcessCompleted(Ok(vec![item])));
    assert!(effects.is_empty());
    assert!(!ok_state.view().process.busy);
    assert_eq!(ok_state.view().process.cards.len(), 1);
    assert_eq!(ok_state.view().process.cards[0].title, "A");

    let (err_state, effects) =
        update(state, Msg::ProcessCompleted(Err("Error: Bad Gateway".to_string())));
    assert!(effects.is_empty());
    assert!(!err_state.view().process.busy);
    assert_eq!(
        err_state.view().process.error.as_deref(),
        Some("Error: Bad Gateway")
    );
}

#[test]
fn resubmission_clears_previous_results_and_error() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit(state, "https://a.example.com");
    let (state, _) = update(
        state,
        Msg::ProcessCompleted(Ok(vec![ContentItem::default()])),
    );
    assert_eq!(state.view().process.cards.len(), 1);

    let (state, effects) = submit(state, "https://b.example.com");

    assert_eq!(effects.len(), 1);
    let view = state.view();
    assert!(view.process.cards.is_empty());
    assert_eq!(view.process.error, None);
}
