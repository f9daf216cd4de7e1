//! Database schema initialization

use sqlx::SqlitePool;

/// Initialize the database schema. The primary key on `name` is the
/// uniqueness constraint the whole module relies on.
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
			name text NOT NULL,
			string text NOT NULL DEFAULT '',
			file text,
			created_at integer NOT NULL,
			updated_at integer NOT NULL,
			PRIMARY KEY(name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;
	Ok(())
}

// vim: ts=4
