//! Configuration service for the OpenSHR components.
//!
//! Serves the named settings the audit (ATNA) components depend on: security
//! store locations, audit repository endpoint, device identity, and the
//! hierarchy of identifier roots. Values live in an external property store
//! behind the [`PropertyAdapter`](openshr_types::property_adapter::PropertyAdapter)
//! trait; a setting that has never been read is seeded into the store with
//! its default on first access, so the full configuration is discoverable and
//! editable externally without a provisioning step.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod atna_settings;
pub mod prelude;
pub mod settings;

pub use settings::{AtnaConfig, PropertyValue, SettingDef};

// vim: ts=4
