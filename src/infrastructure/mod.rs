//! Infrastructure layer: storage backends.

pub mod persistence;
pub mod session;
