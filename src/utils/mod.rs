//! Helpers used by the condense workflow.
//!
//! - [`slug_generator`] - Random slug generation
//! - [`url_normalizer`] - Submitted URL normalization

pub mod slug_generator;
pub mod url_normalizer;
