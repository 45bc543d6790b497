use crate::{ElementId, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Attach the greeting handler to an element.
    BindClickAlert { element: ElementId },
    /// User clicked an element.
    Clicked { element: ElementId },
    /// User edited a text input.
    InputChanged { element: ElementId, value: String },
    /// Run the movie lookup with the current title input.
    LookupRequested,
    /// A lookup response was fully received, whatever its status.
    ResponseLoaded {
        request_id: RequestId,
        status: u16,
        body: String,
    },
    /// A lookup never produced a response.
    RequestFailed { request_id: RequestId, failure: String },
}
