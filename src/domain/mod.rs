//! Domain layer: core entities and repository traits.

pub mod entities;
pub mod repositories;
