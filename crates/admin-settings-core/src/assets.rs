//! Asset path resolution for file-kind default values.

/// Resolves a relative asset reference to a fully qualified path. Injected
/// into the store so the embedding application can plug in its own pipeline.
pub trait AssetResolver: Send + Sync {
	fn resolve(&self, path: &str) -> String;
}

/// A reference containing a double slash is treated as already qualified
/// and passed through unchanged.
pub fn is_qualified(value: &str) -> bool {
	value.contains("//")
}

/// Prefixes references with a static public path
pub struct StaticAssetResolver {
	prefix: Box<str>,
}

impl StaticAssetResolver {
	pub fn new(prefix: impl Into<Box<str>>) -> Self {
		Self { prefix: prefix.into() }
	}
}

impl Default for StaticAssetResolver {
	fn default() -> Self {
		Self::new("/assets")
	}
}

impl AssetResolver for StaticAssetResolver {
	fn resolve(&self, path: &str) -> String {
		format!("{}/{}", self.prefix.trim_end_matches('/'), path.trim_start_matches('/'))
	}
}


// vim: ts=4
