//! Common types shared by the settings store and its persistence adapters.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

// Timestamp //
//***********//
#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Timestamp(pub i64);

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

pub fn now() -> Timestamp {
	let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
	Timestamp(res.as_secs() as i64)
}

// SettingField //
//**************//
/// Persisted fields a backend may expose individually
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingField {
	String,
	File,
}

impl SettingField {
	pub fn as_str(&self) -> &'static str {
		match self {
			SettingField::String => "string",
			SettingField::File => "file",
		}
	}
}

impl std::fmt::Display for SettingField {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

// SettingRecord //
//***************//
/// A persisted name/value configuration record.
///
/// At most one record exists per `name`; the backend enforces uniqueness.
/// The `file` field holds an opaque reference managed by the embedding
/// application's upload subsystem.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SettingRecord {
	pub name: Box<str>,
	pub string: Box<str>,
	pub file: Option<Box<str>>,
	pub created_at: Timestamp,
	pub updated_at: Timestamp,
}

impl SettingRecord {
	/// New empty record, not yet persisted
	pub fn new(name: &str) -> Self {
		Self {
			name: name.into(),
			string: "".into(),
			file: None,
			created_at: now(),
			updated_at: now(),
		}
	}

	/// Stored content of a single field ("" when unset)
	pub fn field(&self, field: SettingField) -> &str {
		match field {
			SettingField::String => &self.string,
			SettingField::File => self.file.as_deref().unwrap_or(""),
		}
	}
}

// vim: ts=4
