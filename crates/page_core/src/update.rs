use crate::{
    movie_lookup_url, AppState, DomError, Effect, ElementId, Msg, ALERT_TEXT, MOVIE_INPUT,
    RESPONSE_OUTPUT,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::BindClickAlert { element } => match state.document_mut().bind_click_alert(&element) {
            Ok(()) => Vec::new(),
            Err(err) => vec![script_error(err)],
        },
        Msg::Clicked { element } => {
            // One dialog per attached handler; unbound elements do nothing.
            let bindings = state.document().click_alert_bindings(&element);
            (0..bindings)
                .map(|_| Effect::ShowAlert {
                    text: ALERT_TEXT.to_string(),
                })
                .collect()
        }
        Msg::InputChanged { element, value } => {
            match state.document_mut().set_value(&element, value) {
                Ok(()) => {
                    state.mark_dirty();
                    Vec::new()
                }
                Err(err) => vec![script_error(err)],
            }
        }
        Msg::LookupRequested => {
            let lookup = state
                .document()
                .value(&ElementId::from(MOVIE_INPUT))
                .map(movie_lookup_url);
            let url = match lookup {
                Ok(url) => url,
                Err(err) => return (state, vec![script_error(err)]),
            };
            let request_id = state.begin_request();
            vec![Effect::SendGet { request_id, url }]
        }
        Msg::ResponseLoaded {
            request_id, body, ..
        } => {
            // Rendered whatever the status code.
            state.finish_request(request_id);
            match state
                .document_mut()
                .set_inner_html(&ElementId::from(RESPONSE_OUTPUT), body)
            {
                Ok(()) => {
                    state.mark_dirty();
                    Vec::new()
                }
                Err(err) => vec![script_error(err)],
            }
        }
        Msg::RequestFailed { request_id, .. } => {
            state.finish_request(request_id);
            Vec::new()
        }
    };

    (state, effects)
}

fn script_error(err: DomError) -> Effect {
    Effect::ScriptError {
        message: err.to_string(),
    }
}
