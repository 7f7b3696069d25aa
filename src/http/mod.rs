//! Outgoing HTTP response abstraction.
//!
//! A [`Response`] carries a status code, a normalized multi-value header
//! collection, and a body, regardless of whether it renders HTML, JSON, or a
//! redirect. Construction enforces the status-code contracts up front and
//! [`Response::send`] emits the message exactly once.

mod headers;
mod response;

pub use headers::Headers;
pub use response::{Response, ResponseError, ResponseKind};
