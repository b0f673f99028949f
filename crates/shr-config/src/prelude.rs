//! Commonly used imports for the configuration service

pub use openshr_types::prelude::*;
pub use openshr_types::property_adapter::PropertyAdapter;

// vim: ts=4
