//! Structured views over the remote site's pages.
//!
//! The remote HTML is treated as an opaque queryable document: these
//! types expose only the candidates and code fragments the pipeline
//! needs.

mod module_page;
mod search;

pub use module_page::ModulePage;
pub use search::{Candidate, SearchDocument};
