//! Read-through cached settings store.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use settings::cache::{field_key, value_key, SettingsCache};
use settings::prelude::*;
use settings::setting_adapter::SettingAdapter;

use crate::assets::{is_qualified, AssetResolver};
use crate::registry::{FrozenSettingsRegistry, ResolvedMetadata, ValueKind};

/// Fixed expiration window for cached values. Staleness stays bounded to
/// this window even when an invalidation is missed.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Resolves a setting's current effective value by name, with caching,
/// fallback to registry defaults, and validated initialization. Agnostic to
/// which persistence adapter is plugged in underneath.
pub struct SettingsStore {
	registry: Arc<FrozenSettingsRegistry>,
	adapter: Arc<dyn SettingAdapter>,
	cache: Arc<dyn SettingsCache>,
	assets: Arc<dyn AssetResolver>,
	// Resolved registry entries, memoized here so the shared registry
	// itself stays read-only
	resolved: RwLock<HashMap<Box<str>, Arc<ResolvedMetadata>>>,
}

impl SettingsStore {
	pub fn new(
		registry: Arc<FrozenSettingsRegistry>,
		adapter: Arc<dyn SettingAdapter>,
		cache: Arc<dyn SettingsCache>,
		assets: Arc<dyn AssetResolver>,
	) -> Self {
		Self { registry, adapter, cache, assets, resolved: RwLock::new(HashMap::new()) }
	}

	/// Current effective value of a setting, read through the cache.
	/// Creates an empty record on first lookup; names without a registry
	/// entry yield an empty string.
	pub async fn get(&self, name: &str) -> SetResult<String> {
		self.get_cached(name, true).await
	}

	/// Bypass the cache: recompute the value and refresh the cache entry
	pub async fn get_fresh(&self, name: &str) -> SetResult<String> {
		self.get_cached(name, false).await
	}

	async fn get_cached(&self, name: &str, cached: bool) -> SetResult<String> {
		let key = value_key(name);
		if !cached {
			self.cache.delete(&key);
		} else if let Some(value) = self.cache.get(&key) {
			debug!("setting cache hit: {}", name);
			return Ok(value);
		}

		let record = self.adapter.find_or_create(name).await?;
		let value = self.effective_value(&record);
		self.cache.put(&key, &value, CACHE_TTL);
		Ok(value)
	}

	/// Raw stored field of a setting, read through the cache. Only
	/// supported by backends with per-field access; others report
	/// [`Error::FieldAccessNotSupported`].
	pub async fn fetch_field(&self, name: &str, field: SettingField) -> SetResult<String> {
		let key = field_key(name, field);
		if let Some(value) = self.cache.get(&key) {
			debug!("setting cache hit: {}.{}", name, field);
			return Ok(value);
		}

		self.adapter.find_or_create(name).await?;
		let value: String =
			self.adapter.read_field(name, field).await?.map(Into::into).unwrap_or_default();
		self.cache.put(&key, &value, CACHE_TTL);
		Ok(value)
	}

	/// Effective value of a record: the stored field selected by the
	/// declared kind, substituting the registry default when empty. The
	/// result is display-ready; callers are not expected to escape it.
	pub fn effective_value(&self, record: &SettingRecord) -> String {
		if !self.registry.contains(&record.name) {
			return String::new();
		}

		let meta = self.metadata(&record.name);
		let stored = record.field(meta.kind.field());
		if stored.is_empty() {
			self.default_value(&record.name)
		} else {
			stored.to_string()
		}
	}

	/// Initialize a setting with a type-appropriate default. Text, html,
	/// and select kinds are seeded with the registry default; everything
	/// else starts empty. A second initiation of the same name fails the
	/// backend's uniqueness validation.
	pub async fn initiate(&self, name: &str) -> SetResult<SettingRecord> {
		let mut record = SettingRecord::new(name);
		let meta = self.metadata(name);
		if meta.kind.seeds_default() {
			record.string = self.default_value(name).into();
		}

		let record = self.adapter.create(&record).await?;
		self.invalidate(name);
		info!("setting '{}' initiated", name);
		Ok(record)
	}

	/// Store a new string value, creating the record when absent
	pub async fn update(&self, name: &str, value: &str) -> SetResult<SettingRecord> {
		let mut record = self.adapter.find_or_create(name).await?;
		record.string = value.into();
		let record = self.adapter.save(&record).await?;
		self.invalidate(name);
		info!("setting '{}' updated", name);
		Ok(record)
	}

	/// Store a new file reference. Upload handling and validation of the
	/// referenced file are delegated to the embedding application.
	pub async fn update_file(&self, name: &str, file: Option<&str>) -> SetResult<SettingRecord> {
		let mut record = self.adapter.find_or_create(name).await?;
		record.file = file.map(Into::into);
		let record = self.adapter.save(&record).await?;
		self.invalidate(name);
		info!("setting '{}' file reference updated", name);
		Ok(record)
	}

	// Registry accessors //
	//********************//

	/// Display label (defaults to the name itself)
	pub fn title(&self, name: &str) -> String {
		self.metadata(name).title.to_string()
	}

	/// Declared kind (defaults to string)
	pub fn kind(&self, name: &str) -> ValueKind {
		self.metadata(name).kind
	}

	/// Display description (defaults to empty)
	pub fn description(&self, name: &str) -> String {
		self.metadata(name).description.to_string()
	}

	/// Registry default. File-kind references without a qualified path go
	/// through the asset resolver.
	pub fn default_value(&self, name: &str) -> String {
		let meta = self.metadata(name);
		if meta.kind == ValueKind::File
			&& !meta.default_value.is_empty()
			&& !is_qualified(&meta.default_value)
		{
			self.assets.resolve(&meta.default_value)
		} else {
			meta.default_value.to_string()
		}
	}

	/// Enumerated choices for select-kind settings
	pub fn options(&self, name: &str) -> Vec<String> {
		self.metadata(name).options.iter().map(|opt| opt.to_string()).collect()
	}

	fn metadata(&self, name: &str) -> Arc<ResolvedMetadata> {
		if let Some(meta) = self.resolved.read().get(name) {
			return meta.clone();
		}
		let meta = Arc::new(self.registry.resolve(name));
		self.resolved.write().entry(name.into()).or_insert(meta).clone()
	}

	/// Drops every cache entry derived from `name`, both the plain key and
	/// the per-field keys, so the next read recomputes
	fn invalidate(&self, name: &str) {
		self.cache.delete_prefix(&value_key(name));
		debug!("setting cache invalidated: {}", name);
	}
}

// vim: ts=4
