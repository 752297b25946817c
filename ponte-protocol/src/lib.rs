//! The request/reply protocol spoken with the legacy registry.
//!
//! The protocol is a simple correlated request-response exchange:
//! 1. The gateway sends one `<requisicao>` envelope per operation
//!    (registration or lookup), stamped with an operation code and a
//!    timestamp.
//! 2. The registry answers one `<resposta>` carrying a status, a message,
//!    an optional record payload, and its own timestamp.
//!
//! This crate owns both ends of the translation: building `<requisicao>`
//! envelopes from typed records, interpreting them on the registry side
//! ([`interpret_request`]), and interpreting `<resposta>` replies into a
//! typed [`Outcome`]. All singleton-list unwrapping mandated by the codec's
//! decoding convention happens here; callers never see wrapped values.

mod envelope;
mod error;
mod fields;
mod reply;
mod request;

pub use envelope::{create_request, lookup_request, Operation};
pub use error::{ProtocolError, ProtocolResult};
pub use reply::{interpret_reply, Outcome, ReplyStatus};
pub use request::{interpret_request, Request};
