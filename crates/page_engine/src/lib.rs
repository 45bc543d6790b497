//! Page engine: request IO and completion delivery.
mod decode;
mod engine;
mod request;
mod types;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::EngineHandle;
pub use request::{RequestSettings, Requester, ReqwestRequester};
pub use types::{EngineEvent, FailureKind, FetchError, LoadedResponse, RequestId};
