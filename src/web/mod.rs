//! Web layer: server-rendered author management pages.

pub mod handlers;
pub mod routes;
