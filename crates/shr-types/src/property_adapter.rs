//! Adapter that stores named configuration properties as durable text values.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

/// An OpenSHR property adapter
///
/// Every `PropertyAdapter` implementation is required to implement this trait.
/// A `PropertyAdapter` is responsible for durably storing the named text
/// properties the configuration service is built on. The store is shared:
/// values written here are expected to be discoverable and editable by other
/// processes referencing the same configuration namespace, and to survive
/// process restarts.
#[async_trait]
pub trait PropertyAdapter: Debug + Send + Sync {
	/// Reads the text value stored under `name`, `None` if absent
	async fn read_prop(&self, name: &str) -> ShrResult<Option<Box<str>>>;

	/// Creates or overwrites the text value stored under `name`
	async fn update_prop(&self, name: &str, value: &str) -> ShrResult<()>;
}

// vim: ts=4
