//! Default in-memory TTL cache for setting values.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use settings::cache::SettingsCache;

/// Process-local cache with per-entry expiry. Expired entries are skipped on
/// read and swept on write.
pub struct MemoryCache {
	entries: RwLock<HashMap<String, (String, Instant)>>,
}

impl MemoryCache {
	pub fn new() -> Self {
		Self { entries: RwLock::new(HashMap::new()) }
	}

	/// Number of live (unexpired) entries
	pub fn len(&self) -> usize {
		let now = Instant::now();
		self.entries.read().values().filter(|(_, expires)| *expires > now).count()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for MemoryCache {
	fn default() -> Self {
		Self::new()
	}
}

impl SettingsCache for MemoryCache {
	fn get(&self, key: &str) -> Option<String> {
		let entries = self.entries.read();
		match entries.get(key) {
			Some((value, expires)) if *expires > Instant::now() => Some(value.clone()),
			_ => None,
		}
	}

	fn put(&self, key: &str, value: &str, ttl: Duration) {
		let now = Instant::now();
		let mut entries = self.entries.write();
		entries.retain(|_, (_, expires)| *expires > now);
		entries.insert(key.to_string(), (value.to_string(), now + ttl));
	}

	fn delete(&self, key: &str) {
		self.entries.write().remove(key);
	}

	fn delete_prefix(&self, prefix: &str) {
		self.entries.write().retain(|key, _| !key.starts_with(prefix));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_put_get() {
		let cache = MemoryCache::new();
		cache.put("setting_a", "1", Duration::from_secs(60));
		assert_eq!(cache.get("setting_a").as_deref(), Some("1"));
		assert_eq!(cache.get("setting_b"), None);
	}

	#[test]
	fn test_expiry() {
		let cache = MemoryCache::new();
		cache.put("setting_a", "1", Duration::ZERO);
		assert_eq!(cache.get("setting_a"), None);
	}

	#[test]
	fn test_overwrite() {
		let cache = MemoryCache::new();
		cache.put("setting_a", "1", Duration::from_secs(60));
		cache.put("setting_a", "2", Duration::from_secs(60));
		assert_eq!(cache.get("setting_a").as_deref(), Some("2"));
	}

	#[test]
	fn test_delete() {
		let cache = MemoryCache::new();
		cache.put("setting_a", "1", Duration::from_secs(60));
		cache.delete("setting_a");
		assert_eq!(cache.get("setting_a"), None);
	}

	#[test]
	fn test_delete_prefix() {
		let cache = MemoryCache::new();
		cache.put("setting_a", "1", Duration::from_secs(60));
		cache.put("setting_a_string", "2", Duration::from_secs(60));
		cache.put("setting_b", "3", Duration::from_secs(60));
		cache.delete_prefix("setting_a");
		assert_eq!(cache.get("setting_a"), None);
		assert_eq!(cache.get("setting_a_string"), None);
		assert_eq!(cache.get("setting_b").as_deref(), Some("3"));
	}
}

// vim: ts=4
