//! ATNA setting definitions
//!
//! Property names and defaults for the security stores, the audit repository
//! connection, device identity and the identifier roots. Names are shared
//! with the other processes referencing the same configuration namespace, so
//! they are part of the external contract and must not change.

use crate::settings::SettingDef;

pub const TRUST_STORE: SettingDef<Box<str>> =
	SettingDef { name: "shr-atna.security.trustStore", default: || Box::from("") };

pub const TRUST_STORE_PASSWORD: SettingDef<Box<str>> =
	SettingDef { name: "shr-atna.security.trustStorePassword", default: || Box::from("") };

pub const KEY_STORE: SettingDef<Box<str>> =
	SettingDef { name: "shr-atna.security.keyStore", default: || Box::from("") };

pub const KEY_STORE_PASSWORD: SettingDef<Box<str>> =
	SettingDef { name: "shr-atna.security.keyStorePassword", default: || Box::from("") };

pub const SHR_ROOT: SettingDef<Box<str>> =
	SettingDef { name: "shr.id.root", default: || Box::from("1.2.3.4.5.6") };

pub const EPID_ROOT: SettingDef<Box<str>> =
	SettingDef { name: "shr.id.epidRoot", default: || Box::from("") };

pub const ECID_ROOT: SettingDef<Box<str>> =
	SettingDef { name: "shr.id.ecidRoot", default: || Box::from("") };

pub const AR_ENDPOINT: SettingDef<Box<str>> =
	SettingDef { name: "shr-atna.auditRepository.endpoint", default: || Box::from("127.0.0.1") };

pub const AR_TRANSPORT: SettingDef<Box<str>> =
	SettingDef { name: "shr-atna.auditRepository.transport", default: || Box::from("audit-udp") };

pub const AR_PORT: SettingDef<u16> =
	SettingDef { name: "shr-atna.auditRepository.port", default: || 514 };

pub const LOCAL_BIND_ADDR: SettingDef<Box<str>> =
	SettingDef { name: "shr-atna.auditRepository.localBindAddr", default: || Box::from("127.0.0.1") };

pub const DEVICE_NAME: SettingDef<Box<str>> =
	SettingDef { name: "shr-atna.deviceName", default: || Box::from("OpenSHRInstance") };


// vim: ts=4
