//! Backend selection at process startup.
//!
//! The persistence strategy is an explicit configuration choice, not a
//! runtime capability probe: deployments state which backend they run and
//! the builder wires up the matching adapter once.

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use adapter_redb::SettingAdapterRedb;
use adapter_sqlite::SettingAdapterSqlite;
use settings_core::{FrozenSettingsRegistry, MemoryCache, SettingsStore, StaticAssetResolver};
use settings_types::cache::SettingsCache;
use settings_types::prelude::*;
use settings_types::setting_adapter::SettingAdapter;

use crate::AssetResolver;

/// Persistence backend, chosen by configuration at process startup
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum BackendConfig {
	/// Relational backend: flat rows, per-field access
	Sqlite { dir: PathBuf },
	/// Document backend: per-locale translated values, composed value only
	Redb { dir: PathBuf, locale: Box<str>, fallback_locale: Box<str> },
}

/// Builds a [`SettingsStore`] from a backend configuration and a frozen
/// registry. Cache and asset resolver default to the in-process
/// implementations unless injected.
pub struct StoreBuilder {
	config: BackendConfig,
	registry: FrozenSettingsRegistry,
	cache: Option<Arc<dyn SettingsCache>>,
	assets: Option<Arc<dyn AssetResolver>>,
}

impl StoreBuilder {
	pub fn new(config: BackendConfig, registry: FrozenSettingsRegistry) -> Self {
		Self { config, registry, cache: None, assets: None }
	}

	/// Inject a cache implementation
	pub fn cache(mut self, cache: Arc<dyn SettingsCache>) -> Self {
		self.cache = Some(cache);
		self
	}

	/// Inject an asset path resolver
	pub fn assets(mut self, assets: Arc<dyn AssetResolver>) -> Self {
		self.assets = Some(assets);
		self
	}

	pub async fn build(self) -> SetResult<SettingsStore> {
		let adapter: Arc<dyn SettingAdapter> = match &self.config {
			BackendConfig::Sqlite { dir } => Arc::new(SettingAdapterSqlite::new(dir).await?),
			BackendConfig::Redb { dir, locale, fallback_locale } => {
				Arc::new(SettingAdapterRedb::new(dir, locale, fallback_locale)?)
			}
		};
		info!("settings store backend: {:?}", self.config);

		Ok(SettingsStore::new(
			Arc::new(self.registry),
			adapter,
			self.cache.unwrap_or_else(|| Arc::new(MemoryCache::new())),
			self.assets.unwrap_or_else(|| Arc::new(StaticAssetResolver::default())),
		))
	}
}

// vim: ts=4
