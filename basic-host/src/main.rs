//! Minimal composition root: wires the sqlite property adapter into the
//! configuration service and dumps the effective (seeded) configuration.

use std::{env, path, sync::Arc};

use openshr_config::AtnaConfig;
use openshr_prop_adapter_sqlite::PropAdapterSqlite;
use openshr_types::prelude::*;

pub struct Config {
	pub db_dir: path::PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ShrResult<()> {
	tracing_subscriber::fmt::init();

	let config = Config {
		db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or("./data".to_string())),
	};

	tokio::fs::create_dir_all(&config.db_dir)
		.await
		.inspect_err(|err| warn!("cannot create {}: {}", config.db_dir.display(), err))
		.map_err(|_| Error::DbError)?;
	let props = Arc::new(PropAdapterSqlite::new(config.db_dir.join("config.db")).await?);
	let atna = AtnaConfig::global_or_init(props);

	info!("device name: {}", atna.device_name().await?);
	info!("audit repository: {}:{} ({})",
		atna.audit_repository_endpoint().await?,
		atna.audit_repository_port().await?,
		atna.audit_repository_transport().await?,
	);
	info!("local bind address: {}", atna.local_bind_address().await?);
	info!("key store: {:?}", atna.key_store_file().await?);
	info!("trust store: {:?}", atna.trust_store_file().await?);
	info!("shr root: {}", atna.shr_root().await?);
	info!("patient root: {}", atna.patient_root().await?);
	info!("user root: {}", atna.user_root().await?);

	Ok(())
}

// vim: ts=4
