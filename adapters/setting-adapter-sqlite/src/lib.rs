//! SQLite-backed setting adapter.
//!
//! Stores one flat row per setting name. This is the backend variant with
//! per-field access: arbitrary named fields can be fetched individually
//! through [`SettingAdapter::read_field`].

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use settings::prelude::*;
use settings::setting_adapter::SettingAdapter;

mod schema;
mod setting;

#[derive(Debug)]
pub struct SettingAdapterSqlite {
	db: SqlitePool,
}

impl SettingAdapterSqlite {
	/// Open (or create) the settings database inside `dir`
	pub async fn new(dir: impl AsRef<Path>) -> SetResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(dir.as_ref().join("settings.db"))
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl SettingAdapter for SettingAdapterSqlite {
	async fn find_or_create(&self, name: &str) -> SetResult<SettingRecord> {
		setting::find_or_create(&self.db, name).await
	}

	async fn create(&self, record: &SettingRecord) -> SetResult<SettingRecord> {
		setting::create(&self.db, record).await
	}

	async fn save(&self, record: &SettingRecord) -> SetResult<SettingRecord> {
		setting::save(&self.db, record).await
	}

	async fn read_field(&self, name: &str, field: SettingField) -> SetResult<Option<Box<str>>> {
		setting::read_field(&self.db, name, field).await
	}
}

// vim: ts=4
