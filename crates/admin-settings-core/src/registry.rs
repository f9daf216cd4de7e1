//! Static metadata registry describing display and typing rules per setting.
//!
//! The registry is owned by the embedding application and read-only once
//! frozen; the store synthesizes defaults for missing attributes instead of
//! writing them back.

use serde::Deserialize;
use std::collections::HashMap;

use settings::prelude::*;

/// Declared value kind of a setting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueKind {
	#[default]
	String,
	Text,
	Html,
	Select,
	File,
}

impl ValueKind {
	/// Parse a declared kind name, falling back to `String` for unknown ones
	pub fn parse(s: &str) -> Self {
		match s {
			"text" => ValueKind::Text,
			"html" => ValueKind::Html,
			"select" => ValueKind::Select,
			"file" => ValueKind::File,
			_ => ValueKind::String,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			ValueKind::String => "string",
			ValueKind::Text => "text",
			ValueKind::Html => "html",
			ValueKind::Select => "select",
			ValueKind::File => "file",
		}
	}

	/// Stored field holding values of this kind. Explicit lookup table,
	/// with `string` as the fallback for everything without its own field.
	pub fn field(&self) -> SettingField {
		match self {
			ValueKind::File => SettingField::File,
			_ => SettingField::String,
		}
	}

	/// Kinds whose records are seeded with the default value on initiation
	pub fn seeds_default(&self) -> bool {
		matches!(self, ValueKind::Text | ValueKind::Html | ValueKind::Select)
	}
}

/// Raw registry entry. Every attribute is optional; missing ones are
/// defaulted at resolution time.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SettingMetadata {
	pub title: Option<Box<str>>,
	#[serde(rename = "type")]
	pub kind: Option<Box<str>>,
	pub description: Option<Box<str>>,
	pub default_value: Option<Box<str>>,
	pub options: Option<Vec<Box<str>>>,
}

/// Registry entry with every attribute defaulted
#[derive(Clone, Debug)]
pub struct ResolvedMetadata {
	pub title: Box<str>,
	pub kind: ValueKind,
	pub description: Box<str>,
	pub default_value: Box<str>,
	pub options: Box<[Box<str>]>,
}

/// Mutable registry used during application initialization
pub struct SettingsRegistry {
	entries: HashMap<Box<str>, SettingMetadata>,
}

impl SettingsRegistry {
	pub fn new() -> Self {
		Self { entries: HashMap::new() }
	}

	/// Load a registry from a JSON document mapping names to entries
	pub fn from_json_str(json: &str) -> SetResult<Self> {
		let entries: HashMap<Box<str>, SettingMetadata> = serde_json::from_str(json)
			.map_err(|err| Error::Config(format!("invalid settings registry: {}", err)))?;
		Ok(Self { entries })
	}

	/// Register a new setting entry
	pub fn register(&mut self, name: &str, meta: SettingMetadata) -> SetResult<()> {
		if self.entries.contains_key(name) {
			return Err(Error::Config(format!("setting '{}' is already registered", name)));
		}

		debug!("registering setting: {}", name);
		self.entries.insert(name.into(), meta);
		Ok(())
	}

	/// Freeze the registry (make it immutable)
	pub fn freeze(self) -> FrozenSettingsRegistry {
		info!("freezing settings registry with {} entries", self.entries.len());
		FrozenSettingsRegistry { entries: self.entries }
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Default for SettingsRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// Immutable registry shared with the store
pub struct FrozenSettingsRegistry {
	entries: HashMap<Box<str>, SettingMetadata>,
}

impl FrozenSettingsRegistry {
	/// Raw entry by name
	pub fn get(&self, name: &str) -> Option<&SettingMetadata> {
		self.entries.get(name)
	}

	/// Whether an entry exists for `name`
	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Resolve an entry, synthesizing defaults for missing attributes.
	/// Names without an entry resolve too (title = name, kind = string,
	/// everything else empty); use [`Self::contains`] to tell them apart.
	pub fn resolve(&self, name: &str) -> ResolvedMetadata {
		let meta = self.entries.get(name).cloned().unwrap_or_default();
		ResolvedMetadata {
			title: meta.title.unwrap_or_else(|| name.into()),
			kind: meta.kind.as_deref().map(ValueKind::parse).unwrap_or_default(),
			description: meta.description.unwrap_or_default(),
			default_value: meta.default_value.unwrap_or_default(),
			options: meta.options.unwrap_or_default().into_boxed_slice(),
		}
	}

	/// Iterate all registered entries
	pub fn list(&self) -> impl Iterator<Item = (&str, &SettingMetadata)> {
		self.entries.iter().map(|(name, meta)| (name.as_ref(), meta))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_kind_fallback() {
		assert_eq!(ValueKind::parse("text"), ValueKind::Text);
		assert_eq!(ValueKind::parse("html"), ValueKind::Html);
		assert_eq!(ValueKind::parse("select"), ValueKind::Select);
		assert_eq!(ValueKind::parse("file"), ValueKind::File);
		assert_eq!(ValueKind::parse("string"), ValueKind::String);
		assert_eq!(ValueKind::parse("bogus"), ValueKind::String);
		assert_eq!(ValueKind::parse(""), ValueKind::String);
	}

	#[test]
	fn test_kind_field_dispatch() {
		assert_eq!(ValueKind::File.field(), SettingField::File);
		assert_eq!(ValueKind::Html.field(), SettingField::String);
		assert_eq!(ValueKind::String.field(), SettingField::String);
	}

	#[test]
	fn test_seeds_default() {
		assert!(ValueKind::Text.seeds_default());
		assert!(ValueKind::Html.seeds_default());
		assert!(ValueKind::Select.seeds_default());
		assert!(!ValueKind::String.seeds_default());
		assert!(!ValueKind::File.seeds_default());
	}

	#[test]
	fn test_register_duplicate() {
		let mut registry = SettingsRegistry::new();
		assert!(registry.register("site_title", SettingMetadata::default()).is_ok());
		assert!(matches!(
			registry.register("site_title", SettingMetadata::default()),
			Err(Error::Config(_))
		));
	}

	#[test]
	fn test_from_json() {
		let registry = SettingsRegistry::from_json_str(
			r#"{
				"site_title": { "type": "string", "default_value": "My Site" },
				"color": { "type": "select", "options": ["blue", "red"] }
			}"#,
		)
		.expect("registry should parse");
		assert_eq!(registry.len(), 2);

		let frozen = registry.freeze();
		let meta = frozen.resolve("color");
		assert_eq!(meta.kind, ValueKind::Select);
		assert_eq!(meta.options.len(), 2);
	}

	#[test]
	fn test_from_json_invalid() {
		assert!(matches!(SettingsRegistry::from_json_str("not json"), Err(Error::Config(_))));
	}

	#[test]
	fn test_resolve_defaults() {
		let frozen = SettingsRegistry::new().freeze();
		let meta = frozen.resolve("unknown");
		assert_eq!(meta.title.as_ref(), "unknown");
		assert_eq!(meta.kind, ValueKind::String);
		assert_eq!(meta.description.as_ref(), "");
		assert_eq!(meta.default_value.as_ref(), "");
		assert!(meta.options.is_empty());
		assert!(!frozen.contains("unknown"));
	}
}

// vim: ts=4
