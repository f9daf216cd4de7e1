//! End-to-end tests across both storage backends.
//!
//! The same store contract is exercised against the sqlite and the redb
//! adapter; only per-field access is expected to differ.

use tempfile::TempDir;

use admin_settings::prelude::*;
use admin_settings::{BackendConfig, SettingsRegistry, SettingsStore, StoreBuilder};

const REGISTRY_JSON: &str = r#"{
	"site_title": { "type": "string", "default_value": "My Site" },
	"color": { "type": "select", "default_value": "blue", "options": ["blue", "red"] }
}"#;

async fn create_test_store(config: BackendConfig) -> SettingsStore {
	let registry =
		SettingsRegistry::from_json_str(REGISTRY_JSON).expect("registry should parse").freeze();
	StoreBuilder::new(config, registry).build().await.expect("store should build")
}

fn sqlite_config(temp_dir: &TempDir) -> BackendConfig {
	BackendConfig::Sqlite { dir: temp_dir.path().to_path_buf() }
}

fn redb_config(temp_dir: &TempDir) -> BackendConfig {
	BackendConfig::Redb {
		dir: temp_dir.path().to_path_buf(),
		locale: "en".into(),
		fallback_locale: "en".into(),
	}
}

#[tokio::test]
async fn test_sqlite_backend_round_trip() {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let store = create_test_store(sqlite_config(&temp_dir)).await;

	assert_eq!(store.get("site_title").await.expect("get should succeed"), "My Site");
	store.update("site_title", "Better Site").await.expect("update should succeed");
	assert_eq!(store.get("site_title").await.expect("get should succeed"), "Better Site");
}

#[tokio::test]
async fn test_redb_backend_round_trip() {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let store = create_test_store(redb_config(&temp_dir)).await;

	assert_eq!(store.get("site_title").await.expect("get should succeed"), "My Site");
	store.update("site_title", "Better Site").await.expect("update should succeed");
	assert_eq!(store.get("site_title").await.expect("get should succeed"), "Better Site");
}

#[tokio::test]
async fn test_initiate_uniqueness_on_both_backends() {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let store = create_test_store(sqlite_config(&temp_dir)).await;
	let record = store.initiate("color").await.expect("initiate should succeed");
	assert_eq!(record.string.as_ref(), "blue");
	assert!(matches!(store.initiate("color").await, Err(Error::Validation(_))));

	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let store = create_test_store(redb_config(&temp_dir)).await;
	let record = store.initiate("color").await.expect("initiate should succeed");
	assert_eq!(record.string.as_ref(), "blue");
	assert!(matches!(store.initiate("color").await, Err(Error::Validation(_))));
}

#[tokio::test]
async fn test_field_access_asymmetry() {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let store = create_test_store(sqlite_config(&temp_dir)).await;
	store.update("site_title", "Better Site").await.expect("update should succeed");
	assert_eq!(
		store
			.fetch_field("site_title", SettingField::String)
			.await
			.expect("fetch should succeed"),
		"Better Site"
	);

	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let store = create_test_store(redb_config(&temp_dir)).await;
	assert!(matches!(
		store.fetch_field("site_title", SettingField::String).await,
		Err(Error::FieldAccessNotSupported)
	));
}

#[tokio::test]
async fn test_backend_config_from_json() {
	let config: BackendConfig =
		serde_json::from_str(r#"{ "backend": "sqlite", "dir": "/tmp/settings" }"#)
			.expect("config should parse");
	assert!(matches!(config, BackendConfig::Sqlite { .. }));

	let config: BackendConfig = serde_json::from_str(
		r#"{ "backend": "redb", "dir": "/tmp/settings", "locale": "en", "fallback_locale": "en" }"#,
	)
	.expect("config should parse");
	assert!(matches!(config, BackendConfig::Redb { .. }));
}

// vim: ts=4
