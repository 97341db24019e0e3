//! Business logic services for the application layer.

pub mod condense_service;

pub use condense_service::{CondenseService, SlugPolicy};
