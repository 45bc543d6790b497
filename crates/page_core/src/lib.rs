//! Page core: pure state machine for the movie lookup page.
mod dom;
mod effect;
mod encode;
mod msg;
mod state;
mod update;
mod view_model;

pub use dom::{
    Document, DomError, Element, ElementId, ElementKind, ALERT_BUTTON, MOVIE_INPUT,
    RESPONSE_OUTPUT,
};
pub use effect::{Effect, ALERT_TEXT};
pub use encode::{encode_uri_component, movie_lookup_url, MOVIE_LOOKUP_PATH};
pub use msg::Msg;
pub use state::{AppState, RequestId};
pub use update::update;
pub use view_model::PageViewModel;
