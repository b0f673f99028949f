//! Shared types and adapter traits for the OpenSHR components.
//!
//! This crate contains the foundational types that are shared between the
//! configuration service and all adapter implementations. Extracting these
//! into a separate crate allows adapter crates to compile in parallel with
//! the feature crates.

pub mod error;
pub mod prelude;
pub mod property_adapter;

// vim: ts=4
