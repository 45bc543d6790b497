use page_core::{update, AppState, Document, Effect, ElementKind, Msg, ALERT_BUTTON, ALERT_TEXT};

fn init_logging() {
    page_logging::initialize_for_tests();
}

fn bind(state: AppState, id: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::BindClickAlert {
            element: id.into(),
        },
    )
}

fn click(state: AppState, id: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::Clicked {
            element: id.into(),
        },
    )
}

#[test]
fn one_click_shows_exactly_one_greeting() {
    init_logging();
    let (state, effects) = bind(AppState::new(), ALERT_BUTTON);
    assert!(effects.is_empty());

    let (_state, effects) = click(state, ALERT_BUTTON);
    assert_eq!(
        effects,
        vec![Effect::ShowAlert {
            text: "Helloooo".to_string()
        }]
    );
    assert_eq!(ALERT_TEXT, "Helloooo");
}

#[test]
fn every_click_shows_a_greeting() {
    let (mut state, _) = bind(AppState::new(), ALERT_BUTTON);
    for _ in 0..3 {
        let (next, effects) = click(state, ALERT_BUTTON);
        assert_eq!(effects.len(), 1);
        state = next;
    }
}

#[test]
fn binding_twice_attaches_two_handlers() {
    let (state, _) = bind(AppState::new(), ALERT_BUTTON);
    let (state, _) = bind(state, ALERT_BUTTON);

    let (_state, effects) = click(state, ALERT_BUTTON);
    assert_eq!(effects.len(), 2);
    assert!(effects
        .iter()
        .all(|effect| matches!(effect, Effect::ShowAlert { text } if text == ALERT_TEXT)));
}

#[test]
fn clicking_before_binding_does_nothing() {
    let (_state, effects) = click(AppState::new(), ALERT_BUTTON);
    assert!(effects.is_empty());
}

#[test]
fn binding_a_missing_element_raises_a_script_error() {
    init_logging();
    let state = AppState::with_document(Document::new());
    let (state, effects) = bind(state, ALERT_BUTTON);
    assert_eq!(
        effects,
        vec![Effect::ScriptError {
            message: "element not found: #test".to_string()
        }]
    );

    let (_state, effects) = click(state, ALERT_BUTTON);
    assert!(effects.is_empty());
}

#[test]
fn binding_is_addressed_by_id_not_fixed_to_the_test_button() {
    let doc = Document::new().with_element("other", ElementKind::Button);
    let (state, _) = bind(AppState::with_document(doc), "other");

    let (state, effects) = click(state, "other");
    assert_eq!(effects.len(), 1);
    let (_state, effects) = click(state, ALERT_BUTTON);
    assert!(effects.is_empty());
}
