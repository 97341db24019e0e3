//! Domain layer containing the URL record model and store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Store trait definitions
//!
//! The domain layer has no dependency on HTTP or on a concrete store;
//! implementations live in [`crate::infrastructure::persistence`] and the
//! condense workflow in [`crate::application::services`].

pub mod entities;
pub mod repositories;
