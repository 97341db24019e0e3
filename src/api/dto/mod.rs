//! Data Transfer Objects for API requests and responses.
//!
//! Wire names are camelCase.

pub mod condense;
pub mod index;
pub mod url_record;
