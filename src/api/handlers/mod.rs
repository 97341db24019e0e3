//! HTTP request handlers, one module per endpoint.

pub mod condense;
pub mod index;
pub mod redirect;
pub mod urls;

pub use condense::condense_handler;
pub use index::index_handler;
pub use redirect::redirect_handler;
pub use urls::list_urls_handler;
