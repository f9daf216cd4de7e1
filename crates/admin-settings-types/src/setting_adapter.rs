//! Persistence adapter contract for setting records.

use async_trait::async_trait;

use crate::error::{Error, SetResult};
use crate::types::{SettingField, SettingRecord};

/// Name validation applied by every adapter before touching storage:
/// present and at least one character long. Uniqueness is left to the
/// backend's own constraint, which is the only safeguard against
/// concurrent first-time creation of the same name.
pub fn validate_name(name: &str) -> SetResult<()> {
	if name.is_empty() {
		return Err(Error::Validation("setting name must not be empty".into()));
	}
	Ok(())
}

/// Storage backend for setting records.
///
/// Two implementations exist: a relational one with per-field access
/// (sqlite) and a document one with per-locale translation (redb). Both
/// honor the same find-or-create and validated-create contract; only the
/// relational one supports `read_field`.
#[async_trait]
pub trait SettingAdapter: Send + Sync {
	/// Look up a setting by name, inserting an empty record when absent
	async fn find_or_create(&self, name: &str) -> SetResult<SettingRecord>;

	/// Validated insert. Fails with [`Error::Validation`] when the name is
	/// empty or already taken.
	async fn create(&self, record: &SettingRecord) -> SetResult<SettingRecord>;

	/// Persist the mutable fields of an existing record, bumping its
	/// `updated_at`. Fails with [`Error::NotFound`] when no record with
	/// that name exists.
	async fn save(&self, record: &SettingRecord) -> SetResult<SettingRecord>;

	/// Read a single stored field of a setting. Backends exposing only the
	/// composed value keep the default implementation.
	async fn read_field(&self, name: &str, field: SettingField) -> SetResult<Option<Box<str>>> {
		let _ = (name, field);
		Err(Error::FieldAccessNotSupported)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_validate_name() {
		assert!(validate_name("site_title").is_ok());
		assert!(validate_name("x").is_ok());
		assert!(matches!(validate_name(""), Err(Error::Validation(_))));
	}
}

// vim: ts=4
