//! Setting row persistence

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use settings::prelude::*;
use settings::setting_adapter::validate_name;

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

fn from_row(row: &SqliteRow) -> SettingRecord {
	SettingRecord {
		name: row.get::<String, _>("name").into(),
		string: row.get::<String, _>("string").into(),
		file: row.get::<Option<String>, _>("file").map(Into::into),
		created_at: Timestamp(row.get("created_at")),
		updated_at: Timestamp(row.get("updated_at")),
	}
}

async fn read(db: &SqlitePool, name: &str) -> SetResult<SettingRecord> {
	let row = sqlx::query(
		"SELECT name, string, file, created_at, updated_at FROM settings WHERE name = ?",
	)
	.bind(name)
	.fetch_one(db)
	.await;

	match row {
		Ok(row) => Ok(from_row(&row)),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

/// Look up a setting by name, inserting an empty row when absent.
/// Concurrent first lookups both race through the INSERT OR IGNORE and read
/// back the one surviving row; the primary key keeps duplicates out.
pub(crate) async fn find_or_create(db: &SqlitePool, name: &str) -> SetResult<SettingRecord> {
	validate_name(name)?;

	let ts = now();
	sqlx::query(
		"INSERT OR IGNORE INTO settings (name, string, created_at, updated_at) VALUES (?, '', ?, ?)",
	)
	.bind(name)
	.bind(ts.0)
	.bind(ts.0)
	.execute(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	read(db, name).await
}

/// Validated insert. A duplicate name surfaces as a validation failure
/// instead of silently overwriting.
pub(crate) async fn create(db: &SqlitePool, record: &SettingRecord) -> SetResult<SettingRecord> {
	validate_name(&record.name)?;

	sqlx::query(
		"INSERT INTO settings (name, string, file, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
	)
	.bind(record.name.as_ref())
	.bind(record.string.as_ref())
	.bind(record.file.as_deref())
	.bind(record.created_at.0)
	.bind(record.updated_at.0)
	.execute(db)
	.await
	.map_err(|err| match err {
		sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
			Error::Validation(format!("setting '{}' already exists", record.name))
		}
		err => {
			inspect(&err);
			Error::DbError
		}
	})?;

	read(db, &record.name).await
}

/// Update the stored fields of an existing row, bumping `updated_at`
pub(crate) async fn save(db: &SqlitePool, record: &SettingRecord) -> SetResult<SettingRecord> {
	let res = sqlx::query("UPDATE settings SET string = ?, file = ?, updated_at = ? WHERE name = ?")
		.bind(record.string.as_ref())
		.bind(record.file.as_deref())
		.bind(now().0)
		.bind(record.name.as_ref())
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}

	read(db, &record.name).await
}

/// Read a single named field, creating the row first when absent
pub(crate) async fn read_field(
	db: &SqlitePool,
	name: &str,
	field: SettingField,
) -> SetResult<Option<Box<str>>> {
	let record = find_or_create(db, name).await?;
	match field {
		SettingField::String => Ok(Some(record.string)),
		SettingField::File => Ok(record.file),
	}
}

// vim: ts=4
