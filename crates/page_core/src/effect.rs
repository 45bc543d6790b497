use crate::RequestId;

/// Greeting shown by the click alert.
pub const ALERT_TEXT: &str = "Helloooo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Present a blocking dialog.
    ShowAlert { text: String },
    /// Issue a GET for `url`, relative to the page origin.
    SendGet { request_id: RequestId, url: String },
    /// A page script failed; surfaced like an uncaught error.
    ScriptError { message: String },
}
