//! Common test utilities
//!
//! In-memory property adapter shared by the integration tests. Counts reads
//! and writes so tests can assert on the exact store traffic an accessor
//! produces.

// Not every test binary uses every helper
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use openshr_types::error::ShrResult;
use openshr_types::property_adapter::PropertyAdapter;

#[derive(Debug, Default)]
pub struct MemoryPropAdapter {
	props: Mutex<HashMap<String, String>>,
	reads: AtomicUsize,
	writes: AtomicUsize,
}

impl MemoryPropAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Put a value into the store directly, bypassing the adapter counters
	pub fn seed(&self, name: &str, value: &str) {
		self.props.lock().unwrap().insert(name.into(), value.into());
	}

	/// Raw stored text for a name, if any
	pub fn stored(&self, name: &str) -> Option<String> {
		self.props.lock().unwrap().get(name).cloned()
	}

	pub fn entry_count(&self) -> usize {
		self.props.lock().unwrap().len()
	}

	pub fn reads(&self) -> usize {
		self.reads.load(Ordering::SeqCst)
	}

	pub fn writes(&self) -> usize {
		self.writes.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl PropertyAdapter for MemoryPropAdapter {
	async fn read_prop(&self, name: &str) -> ShrResult<Option<Box<str>>> {
		self.reads.fetch_add(1, Ordering::SeqCst);
		Ok(self.props.lock().unwrap().get(name).map(|v| v.clone().into_boxed_str()))
	}

	async fn update_prop(&self, name: &str, value: &str) -> ShrResult<()> {
		self.writes.fetch_add(1, Ordering::SeqCst);
		self.props.lock().unwrap().insert(name.into(), value.into());
		Ok(())
	}
}

// vim: ts=4
