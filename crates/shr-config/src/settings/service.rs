//! The ATNA configuration service
//!
//! Every accessor is a fresh `get_or_create` against the property adapter:
//! no caching, so edits made directly in the external store are visible on
//! the next read.

use std::sync::{Arc, OnceLock};

use crate::atna_settings;
use crate::prelude::*;
use crate::settings::types::{PropertyValue, SettingDef};

static GLOBAL: OnceLock<Arc<AtnaConfig>> = OnceLock::new();

/// Serves the named ATNA configuration settings from a property adapter.
///
/// Prefer constructing one instance in the composition root and handing it to
/// consumers. [`AtnaConfig::global_or_init`] exists for legacy call sites
/// that need an ambient process-wide instance.
#[derive(Debug)]
pub struct AtnaConfig {
	props: Arc<dyn PropertyAdapter>,
}

impl AtnaConfig {
	/// Creates a configuration service on top of a property adapter.
	///
	/// Construction does not touch the store; settings are seeded lazily on
	/// first access.
	pub fn new(props: Arc<dyn PropertyAdapter>) -> Self {
		Self { props }
	}

	/// Returns the process-wide instance, constructing it on first call.
	///
	/// At most one instance is ever constructed; the adapter passed by every
	/// later caller is dropped unused. All callers observe the same instance.
	pub fn global_or_init(props: Arc<dyn PropertyAdapter>) -> Arc<Self> {
		GLOBAL.get_or_init(|| Arc::new(Self::new(props))).clone()
	}

	/// Returns the process-wide instance if one has been initialized
	pub fn global() -> ShrResult<Arc<Self>> {
		GLOBAL.get().cloned().ok_or(Error::NotInitialized)
	}

	/// Reads a setting, seeding the store with its default when absent.
	///
	/// A present, non-empty stored value is coerced to the setting's type;
	/// coercion failure propagates. An absent or empty value causes exactly
	/// one write of the default's text representation, and the typed default
	/// is returned as-is.
	async fn get_or_create<T: PropertyValue>(&self, def: &SettingDef<T>) -> ShrResult<T> {
		match self.props.read_prop(def.name).await? {
			Some(raw) if !raw.is_empty() => T::parse_text(&raw)
				.inspect_err(|_| warn!("invalid stored value for {}: {:?}", def.name, raw)),
			_ => {
				let value = (def.default)();
				self.props.update_prop(def.name, &value.to_text()).await?;
				Ok(value)
			}
		}
	}

	// Security stores
	//*****************

	/// Trust store file path
	pub async fn trust_store_file(&self) -> ShrResult<Box<str>> {
		self.get_or_create(&atna_settings::TRUST_STORE).await
	}

	/// Trust store password
	pub async fn trust_store_password(&self) -> ShrResult<Box<str>> {
		self.get_or_create(&atna_settings::TRUST_STORE_PASSWORD).await
	}

	/// Key store file path
	pub async fn key_store_file(&self) -> ShrResult<Box<str>> {
		self.get_or_create(&atna_settings::KEY_STORE).await
	}

	/// Key store password
	pub async fn key_store_password(&self) -> ShrResult<Box<str>> {
		self.get_or_create(&atna_settings::KEY_STORE_PASSWORD).await
	}

	// Audit repository
	//******************

	/// Audit repository endpoint address
	pub async fn audit_repository_endpoint(&self) -> ShrResult<Box<str>> {
		self.get_or_create(&atna_settings::AR_ENDPOINT).await
	}

	/// Audit repository transport (e.g. "audit-udp")
	pub async fn audit_repository_transport(&self) -> ShrResult<Box<str>> {
		self.get_or_create(&atna_settings::AR_TRANSPORT).await
	}

	/// Audit repository port
	pub async fn audit_repository_port(&self) -> ShrResult<u16> {
		self.get_or_create(&atna_settings::AR_PORT).await
	}

	/// Local address audit messages are sent from
	pub async fn local_bind_address(&self) -> ShrResult<Box<str>> {
		self.get_or_create(&atna_settings::LOCAL_BIND_ADDR).await
	}

	/// Device name reported in audit messages
	pub async fn device_name(&self) -> ShrResult<Box<str>> {
		self.get_or_create(&atna_settings::DEVICE_NAME).await
	}

	// Identifier roots
	//******************

	/// The canonical SHR identifier root
	pub async fn shr_root(&self) -> ShrResult<Box<str>> {
		self.get_or_create(&atna_settings::SHR_ROOT).await
	}

	/// Enterprise community identifier root
	pub async fn ecid_root(&self) -> ShrResult<Box<str>> {
		self.get_or_create(&atna_settings::ECID_ROOT).await
	}

	/// Enterprise patient identifier root
	pub async fn epid_root(&self) -> ShrResult<Box<str>> {
		self.get_or_create(&atna_settings::EPID_ROOT).await
	}

	// Derived identifier roots. Never stored: recomputed from the current
	// SHR root on every read, so a root change propagates immediately.

	async fn derived_root(&self, suffix: u8) -> ShrResult<Box<str>> {
		Ok(format!("{}.{}", self.shr_root().await?, suffix).into_boxed_str())
	}

	/// Identifier root for visits
	pub async fn visit_root(&self) -> ShrResult<Box<str>> {
		self.derived_root(1).await
	}

	/// Identifier root for encounters
	pub async fn encounter_root(&self) -> ShrResult<Box<str>> {
		self.derived_root(2).await
	}

	/// Identifier root for observations
	pub async fn obs_root(&self) -> ShrResult<Box<str>> {
		self.derived_root(3).await
	}

	/// Identifier root for orders
	pub async fn order_root(&self) -> ShrResult<Box<str>> {
		self.derived_root(4).await
	}

	/// Identifier root for problems
	pub async fn problem_root(&self) -> ShrResult<Box<str>> {
		self.derived_root(5).await
	}

	/// Identifier root for allergies
	pub async fn allergy_root(&self) -> ShrResult<Box<str>> {
		self.derived_root(6).await
	}

	/// Identifier root for providers
	pub async fn provider_root(&self) -> ShrResult<Box<str>> {
		self.derived_root(7).await
	}

	/// Identifier root for locations
	pub async fn location_root(&self) -> ShrResult<Box<str>> {
		self.derived_root(8).await
	}

	/// Identifier root for patients
	pub async fn patient_root(&self) -> ShrResult<Box<str>> {
		self.derived_root(9).await
	}

	/// Identifier root for users
	pub async fn user_root(&self) -> ShrResult<Box<str>> {
		self.derived_root(10).await
	}
}

// vim: ts=4
