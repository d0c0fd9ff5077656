//! Validation Engine
//!
//! Error collection and the runner that walks a document tree, dispatching
//! each node to every active validator at the matching granularity.

pub mod engine;
pub mod errors;

pub use engine::{InitFailure, ValidationRunner};
pub use errors::{ErrorCollector, ErrorLocation, ValidationError};
