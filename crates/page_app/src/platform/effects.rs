use page_core::{Effect, Msg};
use page_engine::{EngineEvent, EngineHandle};
use page_logging::{page_error, page_info, page_warn};

use super::dialog::Dialog;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>, dialog: &mut dyn Dialog) {
        for effect in effects {
            match effect {
                Effect::ShowAlert { text } => dialog.alert(&text),
                Effect::SendGet { request_id, url } => {
                    page_info!("SendGet request_id={} url={}", request_id, url);
                    self.engine.enqueue(request_id, url);
                }
                Effect::ScriptError { message } => {
                    page_error!("Uncaught page error: {}", message);
                }
            }
        }
    }

    pub fn try_next_msg(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }

    pub fn next_msg_timeout(&self, timeout: std::time::Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Loaded {
            request_id,
            response,
        } => {
            if !(200..300).contains(&response.status) {
                page_warn!(
                    "request {} got status {}; rendering body anyway",
                    request_id,
                    response.status
                );
            }
            Msg::ResponseLoaded {
                request_id,
                status: response.status,
                body: response.body,
            }
        }
        EngineEvent::Failed { request_id, error } => {
            page_warn!("request {} failed: {}", request_id, error);
            Msg::RequestFailed {
                request_id,
                failure: error.to_string(),
            }
        }
    }
}
