//! Settings subsystem types and service

pub mod service;
pub mod types;

pub use service::AtnaConfig;
pub use types::{PropertyValue, SettingDef};

// vim: ts=4
