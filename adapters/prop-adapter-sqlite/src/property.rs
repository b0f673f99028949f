//! Property key-value storage

use sqlx::{Row, SqlitePool};

use openshr::prelude::*;

/// Read a single property by name
pub(crate) async fn read(db: &SqlitePool, name: &str) -> ShrResult<Option<Box<str>>> {
	let row = sqlx::query("SELECT value FROM properties WHERE name = ?1")
		.bind(name)
		.fetch_optional(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(row.and_then(|r| {
		let value: Option<String> = r.get("value");
		value.map(String::into_boxed_str)
	}))
}

/// Update or create a property
pub(crate) async fn update(db: &SqlitePool, name: &str, value: &str) -> ShrResult<()> {
	sqlx::query("INSERT OR REPLACE INTO properties (name, value) VALUES (?1, ?2)")
		.bind(name)
		.bind(value)
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// vim: ts=4
