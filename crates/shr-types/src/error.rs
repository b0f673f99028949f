//! Error types shared by all OpenSHR crates.

/// Result alias used throughout the OpenSHR crates
pub type ShrResult<T> = Result<T, Error>;

/// Common error type for the OpenSHR crates.
///
/// Adapter implementations map their backend-specific failures onto these
/// variants; callers never see backend error types directly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The storage backend failed. Details are logged at the adapter layer.
	#[error("database error")]
	DbError,

	/// The requested entity does not exist
	#[error("not found")]
	NotFound,

	/// A stored text value could not be coerced to the requested type
	#[error("parse error: {0}")]
	Parse(Box<str>),

	/// Input failed validation
	#[error("validation error: {0}")]
	ValidationError(String),

	/// A process-wide service was used before being initialized
	#[error("not initialized")]
	NotInitialized,
}

// vim: ts=4
