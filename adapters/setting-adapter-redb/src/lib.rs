//! redb-backed setting adapter.
//!
//! Stores one JSON document per setting name, with the string value
//! translated per locale. The adapter is constructed with an active locale
//! and a fallback locale; an empty translation for the active locale falls
//! back to the fallback one. Only the composed value is exposed: per-field
//! access keeps the trait's default `FieldAccessNotSupported` behavior.

use async_trait::async_trait;
use redb::ReadableTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use settings::prelude::*;
use settings::setting_adapter::{validate_name, SettingAdapter};

/// Settings document table
const TABLE_SETTINGS: redb::TableDefinition<&str, &str> = redb::TableDefinition::new("settings");

fn db_err<E: std::fmt::Display>(err: E) -> Error {
	warn!("DB: {}", err);
	Error::DbError
}

/// Persisted document shape
#[derive(Debug, Serialize, Deserialize)]
struct SettingDoc {
	name: Box<str>,
	translations: HashMap<Box<str>, Box<str>>,
	file: Option<Box<str>>,
	created_at: i64,
	updated_at: i64,
}

impl SettingDoc {
	fn new(name: &str) -> Self {
		let ts = now();
		Self {
			name: name.into(),
			translations: HashMap::new(),
			file: None,
			created_at: ts.0,
			updated_at: ts.0,
		}
	}

	/// Compose the record for the active locale, falling back to the
	/// fallback locale when the active translation is empty or absent
	fn to_record(&self, locale: &str, fallback: &str) -> SettingRecord {
		let string = self
			.translations
			.get(locale)
			.filter(|s| !s.is_empty())
			.or_else(|| self.translations.get(fallback))
			.cloned()
			.unwrap_or_default();
		SettingRecord {
			name: self.name.clone(),
			string,
			file: self.file.clone(),
			created_at: Timestamp(self.created_at),
			updated_at: Timestamp(self.updated_at),
		}
	}
}

#[derive(Debug)]
pub struct SettingAdapterRedb {
	db: Arc<redb::Database>,
	locale: Box<str>,
	fallback_locale: Box<str>,
}

impl SettingAdapterRedb {
	/// Open (or create) the settings database inside `dir`
	pub fn new(dir: impl AsRef<Path>, locale: &str, fallback_locale: &str) -> SetResult<Self> {
		let db = redb::Database::create(dir.as_ref().join("settings.redb")).map_err(db_err)?;

		// Open the table once so reads never hit a missing table on a
		// fresh file
		let tx = db.begin_write().map_err(db_err)?;
		tx.open_table(TABLE_SETTINGS).map_err(db_err)?;
		tx.commit().map_err(db_err)?;

		Ok(Self {
			db: Arc::new(db),
			locale: locale.into(),
			fallback_locale: fallback_locale.into(),
		})
	}

	fn compose(&self, doc: &SettingDoc) -> SettingRecord {
		doc.to_record(&self.locale, &self.fallback_locale)
	}
}

#[async_trait]
impl SettingAdapter for SettingAdapterRedb {
	async fn find_or_create(&self, name: &str) -> SetResult<SettingRecord> {
		validate_name(name)?;

		// Insert-if-absent inside a single write transaction keeps
		// concurrent first lookups from creating duplicate documents
		let tx = self.db.begin_write().map_err(db_err)?;
		let doc = {
			let mut table = tx.open_table(TABLE_SETTINGS).map_err(db_err)?;
			let existing = {
				let guard = table.get(name).map_err(db_err)?;
				match guard {
					Some(raw) => {
						Some(serde_json::from_str::<SettingDoc>(raw.value()).map_err(db_err)?)
					}
					None => None,
				}
			};
			match existing {
				Some(doc) => doc,
				None => {
					let doc = SettingDoc::new(name);
					let raw = serde_json::to_string(&doc).map_err(db_err)?;
					let _ = table.insert(name, raw.as_str()).map_err(db_err)?;
					doc
				}
			}
		};
		tx.commit().map_err(db_err)?;

		Ok(self.compose(&doc))
	}

	async fn create(&self, record: &SettingRecord) -> SetResult<SettingRecord> {
		validate_name(&record.name)?;

		let tx = self.db.begin_write().map_err(db_err)?;
		let doc = {
			let mut table = tx.open_table(TABLE_SETTINGS).map_err(db_err)?;
			let exists = table.get(record.name.as_ref()).map_err(db_err)?.is_some();
			if exists {
				return Err(Error::Validation(format!(
					"setting '{}' already exists",
					record.name
				)));
			}

			let mut doc = SettingDoc::new(&record.name);
			doc.translations.insert(self.locale.clone(), record.string.clone());
			doc.file = record.file.clone();
			let raw = serde_json::to_string(&doc).map_err(db_err)?;
			let _ = table.insert(record.name.as_ref(), raw.as_str()).map_err(db_err)?;
			doc
		};
		tx.commit().map_err(db_err)?;

		Ok(self.compose(&doc))
	}

	async fn save(&self, record: &SettingRecord) -> SetResult<SettingRecord> {
		let tx = self.db.begin_write().map_err(db_err)?;
		let doc = {
			let mut table = tx.open_table(TABLE_SETTINGS).map_err(db_err)?;
			let existing = {
				let guard = table.get(record.name.as_ref()).map_err(db_err)?;
				match guard {
					Some(raw) => {
						Some(serde_json::from_str::<SettingDoc>(raw.value()).map_err(db_err)?)
					}
					None => None,
				}
			};
			let mut doc = existing.ok_or(Error::NotFound)?;

			// The write lands on the active locale only; other translations
			// stay untouched
			doc.translations.insert(self.locale.clone(), record.string.clone());
			doc.file = record.file.clone();
			doc.updated_at = now().0;
			let raw = serde_json::to_string(&doc).map_err(db_err)?;
			let _ = table.insert(record.name.as_ref(), raw.as_str()).map_err(db_err)?;
			doc
		};
		tx.commit().map_err(db_err)?;

		Ok(self.compose(&doc))
	}
}

// vim: ts=4
