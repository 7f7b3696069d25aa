//! Application layer: business rules and orchestration.

pub mod services;
