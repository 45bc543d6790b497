use page_core::{
    update, AppState, Document, Effect, ElementId, ElementKind, Msg, RequestId, MOVIE_INPUT,
    RESPONSE_OUTPUT,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    page_logging::initialize_for_tests();
}

fn type_title(state: AppState, title: &str) -> AppState {
    let (state, effects) = update(
        state,
        Msg::InputChanged {
            element: MOVIE_INPUT.into(),
            value: title.to_string(),
        },
    );
    assert!(effects.is_empty());
    state
}

fn lookup(state: AppState) -> (AppState, RequestId, String) {
    let (state, effects) = update(state, Msg::LookupRequested);
    match effects.as_slice() {
        [Effect::SendGet { request_id, url }] => (state, *request_id, url.clone()),
        other => panic!("expected a single SendGet, got {other:?}"),
    }
}

fn loaded(state: AppState, request_id: RequestId, status: u16, body: &str) -> AppState {
    let (state, effects) = update(
        state,
        Msg::ResponseLoaded {
            request_id,
            status,
            body: body.to_string(),
        },
    );
    assert!(effects.is_empty());
    state
}

fn output(state: &AppState) -> String {
    state
        .document()
        .inner_html(&ElementId::from(RESPONSE_OUTPUT))
        .unwrap()
        .to_string()
}

#[test]
fn plain_title_is_sent_unchanged() {
    init_logging();
    let state = type_title(AppState::new(), "Inception");
    let (_state, _id, url) = lookup(state);
    assert_eq!(url, "/movie?t=Inception");
}

#[test]
fn space_is_encoded_as_percent_20() {
    let state = type_title(AppState::new(), "The Matrix");
    let (_state, _id, url) = lookup(state);
    assert_eq!(url, "/movie?t=The%20Matrix");
}

#[test]
fn every_title_maps_to_the_movie_path_only() {
    let cases = [
        ("", "/movie?t="),
        ("a&t=b", "/movie?t=a%26t%3Db"),
        ("what?", "/movie?t=what%3F"),
        ("Léon: The Professional", "/movie?t=L%C3%A9on%3A%20The%20Professional"),
        ("Ocean's Eleven (2001)", "/movie?t=Ocean's%20Eleven%20(2001)"),
    ];
    for (title, expected) in cases {
        let state = type_title(AppState::new(), title);
        let (_state, _id, url) = lookup(state);
        assert_eq!(url, expected, "title {title:?}");
    }
}

#[test]
fn response_body_is_rendered_verbatim() {
    let state = type_title(AppState::new(), "Inception");
    let (state, id, _url) = lookup(state);
    assert_eq!(state.view().in_flight, 1);

    let mut state = loaded(state, id, 200, "<b>Found</b>");
    assert_eq!(output(&state), "<b>Found</b>");
    let view = state.view();
    assert_eq!(view.response_html.as_deref(), Some("<b>Found</b>"));
    assert_eq!(view.in_flight, 0);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn error_status_bodies_are_still_rendered() {
    let state = type_title(AppState::new(), "Nope");
    let (state, id, _url) = lookup(state);
    let state = loaded(state, id, 404, "<h1>Error</h1>");
    assert_eq!(output(&state), "<h1>Error</h1>");
}

#[test]
fn last_response_to_complete_wins() {
    let state = type_title(AppState::new(), "First");
    let (state, first, _) = lookup(state);
    let state = type_title(state, "Second");
    let (state, second, _) = lookup(state);
    assert_ne!(first, second);
    assert_eq!(state.view().in_flight, 2);

    let state = loaded(state, second, 200, "second body");
    let state = loaded(state, first, 200, "first body");
    assert_eq!(output(&state), "first body");
    assert_eq!(state.in_flight().count(), 0);
}

#[test]
fn transport_failure_leaves_output_untouched() {
    let state = type_title(AppState::new(), "Inception");
    let (state, id, _url) = lookup(state);
    let state = loaded(state, id, 200, "previous");

    let (state, again, _url) = lookup(state);
    let (state, effects) = update(
        state,
        Msg::RequestFailed {
            request_id: again,
            failure: "connection refused".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(output(&state), "previous");
    assert_eq!(state.view().in_flight, 0);
}

#[test]
fn lookup_without_title_input_raises_a_script_error() {
    let doc = Document::new().with_element(RESPONSE_OUTPUT, ElementKind::Container);
    let (state, effects) = update(AppState::with_document(doc), Msg::LookupRequested);
    assert_eq!(
        effects,
        vec![Effect::ScriptError {
            message: "element not found: #movie".to_string()
        }]
    );
    assert_eq!(state.view().in_flight, 0);
}

#[test]
fn response_without_output_element_raises_a_script_error() {
    let doc = Document::new().with_element(MOVIE_INPUT, ElementKind::TextInput);
    let (state, _id, _url) = lookup(AppState::with_document(doc));
    let (state, effects) = update(
        state,
        Msg::ResponseLoaded {
            request_id: 1,
            status: 200,
            body: "x".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ScriptError {
            message: "element not found: #getrespmsg".to_string()
        }]
    );
    assert_eq!(state.view().in_flight, 0);
}

#[test]
fn typing_into_a_non_input_raises_a_script_error() {
    let (_state, effects) = update(
        AppState::new(),
        Msg::InputChanged {
            element: RESPONSE_OUTPUT.into(),
            value: "x".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ScriptError {
            message: "element #getrespmsg is not a text input".to_string()
        }]
    );
}
