//! SQLite-backed property adapter
//!
//! Stores configuration properties in a single `properties` table. The
//! database file is created on first use, so an empty deployment needs no
//! provisioning step before the configuration service can seed its defaults.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use openshr::prelude::*;
use openshr::property_adapter::PropertyAdapter;

mod property;

#[derive(Debug)]
pub struct PropAdapterSqlite {
	db: SqlitePool,
}

impl PropAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> ShrResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		init_db(&db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl PropertyAdapter for PropAdapterSqlite {
	async fn read_prop(&self, name: &str) -> ShrResult<Option<Box<str>>> {
		property::read(&self.db, name).await
	}

	async fn update_prop(&self, name: &str, value: &str) -> ShrResult<()> {
		property::update(&self.db, name, value).await
	}
}

async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS properties (
			name text NOT NULL,
			value text,
			PRIMARY KEY(name)
	)",
	)
	.execute(db)
	.await?;

	Ok(())
}


// vim: ts=4
