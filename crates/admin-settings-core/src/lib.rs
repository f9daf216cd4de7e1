//! Settings store with read-through caching, metadata defaults, and safe
//! initialization, in front of a pluggable persistence adapter.
//!
//! # Architecture
//!
//! - **Registry** (`registry.rs`): read-only metadata registry (title, kind,
//!   description, default value, options per setting name)
//! - **Store** (`store.rs`): `SettingsStore` with caching and invalidation
//! - **Cache** (`cache.rs`): default in-memory TTL cache
//! - **Assets** (`assets.rs`): asset path resolution for file-kind defaults

pub mod assets;
pub mod cache;
pub mod registry;
pub mod store;

pub use assets::{AssetResolver, StaticAssetResolver};
pub use cache::MemoryCache;
pub use registry::{
	FrozenSettingsRegistry, ResolvedMetadata, SettingMetadata, SettingsRegistry, ValueKind,
};
pub use store::{SettingsStore, CACHE_TTL};

// vim: ts=4
