//! Persisted admin settings: a name/value configuration store with a static
//! metadata registry, read-through caching, and two interchangeable storage
//! backends.
//!
//! # Features
//!
//! - Find-or-create lookup with registry-default fallback
//! - Process-local TTL cache, invalidated synchronously on every save
//! - Pluggable persistence: relational (SQLite) or document store with
//!   per-locale translated values (redb), selected by configuration at
//!   process startup
//! - Injected cache and asset-path resolver seams for deterministic tests

// Re-export shared types and adapter traits from admin-settings-types
pub use settings_types::cache;
pub use settings_types::error;
pub use settings_types::prelude;
pub use settings_types::setting_adapter;
pub use settings_types::types;

// Store, registry, and default collaborators
pub use settings_core::{
	AssetResolver, FrozenSettingsRegistry, MemoryCache, ResolvedMetadata, SettingMetadata,
	SettingsRegistry, SettingsStore, StaticAssetResolver, ValueKind, CACHE_TTL,
};

// Adapter re-exports
pub use adapter_redb::SettingAdapterRedb;
pub use adapter_sqlite::SettingAdapterSqlite;

// Local modules
pub mod config;

pub use config::{BackendConfig, StoreBuilder};

// vim: ts=4
