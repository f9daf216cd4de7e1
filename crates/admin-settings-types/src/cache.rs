//! Cache contract and key scheme for setting values.
//!
//! Keys are plain strings: `setting_<name>` for the composed value and
//! `setting_<name>_<field>` for a single named field. The cache is injected
//! into the store at construction, so tests can substitute a deterministic
//! implementation.

use std::time::Duration;

use crate::types::SettingField;

/// Cache key for the composed value of a setting
pub fn value_key(name: &str) -> String {
	format!("setting_{}", name)
}

/// Cache key for a single stored field of a setting
pub fn field_key(name: &str, field: SettingField) -> String {
	format!("setting_{}_{}", name, field.as_str())
}

/// Key/value cache with per-entry TTL.
///
/// Writes are last-writer-wins; two concurrent misses recomputing the same
/// value is a benign race. `delete_prefix` exists for invalidation: a save
/// of setting `name` must drop both the plain and the per-field keys.
pub trait SettingsCache: Send + Sync {
	/// Value for `key`, or `None` when absent or expired
	fn get(&self, key: &str) -> Option<String>;

	/// Store `value` under `key`, expiring after `ttl`
	fn put(&self, key: &str, value: &str, ttl: Duration);

	/// Drop a single key
	fn delete(&self, key: &str);

	/// Drop every key starting with `prefix`
	fn delete_prefix(&self, prefix: &str);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_key_scheme() {
		assert_eq!(value_key("site_title"), "setting_site_title");
		assert_eq!(field_key("site_title", SettingField::String), "setting_site_title_string");
		assert_eq!(field_key("logo", SettingField::File), "setting_logo_file");
	}
}

// vim: ts=4
