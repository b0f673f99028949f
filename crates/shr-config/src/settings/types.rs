//! Typed setting definitions and text coercion
//!
//! A [`SettingDef`] names one property in the external store and carries its
//! typed default. Coercion between the store's text representation and the
//! setting's value type goes through [`PropertyValue`], chosen statically by
//! the definition rather than inferred from a default at runtime.

use crate::prelude::*;

/// A value type that can be stored as property text
pub trait PropertyValue: Sized {
	/// Coerces the stored text to the value type.
	///
	/// Failure is caller-visible: a stored value that cannot be coerced is a
	/// configuration error, never silently replaced by the default.
	fn parse_text(raw: &str) -> ShrResult<Self>;

	/// Formats the value as property text for storage
	fn to_text(&self) -> String;
}

impl PropertyValue for Box<str> {
	fn parse_text(raw: &str) -> ShrResult<Self> {
		Ok(raw.into())
	}

	fn to_text(&self) -> String {
		self.to_string()
	}
}

impl PropertyValue for u16 {
	fn parse_text(raw: &str) -> ShrResult<Self> {
		raw.parse()
			.map_err(|_| Error::Parse(format!("invalid integer: '{raw}'").into_boxed_str()))
	}

	fn to_text(&self) -> String {
		self.to_string()
	}
}

/// Definition of one named setting: property name plus typed default.
///
/// The default is a constructor so definitions can be `const` items even for
/// heap-allocated value types.
#[derive(Debug, Clone, Copy)]
pub struct SettingDef<T> {
	pub name: &'static str,
	pub default: fn() -> T,
}


// vim: ts=4
