//! Commonly used imports for OpenSHR crates
//!
//! Brings the error types and tracing macros into scope with a single glob
//! import: `use openshr_types::prelude::*;`

pub use crate::error::{Error, ShrResult};

pub use tracing::{debug, error, info, trace, warn};

// vim: ts=4
